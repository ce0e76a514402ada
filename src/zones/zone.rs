//! Ordered, owned card containers.
//!
//! A `Zone` is an ordered sequence of card ids with one explicit end
//! convention shared by every zone kind:
//!
//! - **front**: the display end. `push_front` puts the most recently added card
//!   here (the newest trashed card, the newest card in hand).
//! - **back**: the draw end. `pop_back` removes the next card to draw (deck
//!   top, next life card).
//!
//! Zone operations keep each card's `zone` reference in agreement with zone
//! membership, so they take the `CardArena` alongside the zone.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::CardArena;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// The kinds of zone every player owns exactly one of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Main deck (face down).
    Deck,
    /// DON!! deck (face down).
    DonDeck,
    Hand,
    /// Character area.
    Field,
    Trash,
    /// Face-down life cards.
    Life,
    /// Cost area holding DON!! cards.
    Cost,
    Stage,
}

impl ZoneKind {
    /// All zone kinds, in display order.
    pub const ALL: [ZoneKind; 8] = [
        ZoneKind::Deck,
        ZoneKind::DonDeck,
        ZoneKind::Hand,
        ZoneKind::Field,
        ZoneKind::Trash,
        ZoneKind::Life,
        ZoneKind::Cost,
        ZoneKind::Stage,
    ];

    /// Who may see the cards in a zone of this kind.
    #[must_use]
    pub const fn visibility(self) -> ZoneVisibility {
        match self {
            ZoneKind::Deck | ZoneKind::DonDeck | ZoneKind::Life => ZoneVisibility::Hidden,
            ZoneKind::Hand => ZoneVisibility::OwnerOnly,
            ZoneKind::Field | ZoneKind::Trash | ZoneKind::Cost | ZoneKind::Stage => {
                ZoneVisibility::Public
            }
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::DonDeck => "DON!! deck",
            ZoneKind::Hand => "hand",
            ZoneKind::Field => "field",
            ZoneKind::Trash => "trash",
            ZoneKind::Life => "life",
            ZoneKind::Cost => "cost area",
            ZoneKind::Stage => "stage",
        };
        f.write_str(name)
    }
}

/// Zone visibility rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneVisibility {
    /// All cards visible to both players (field, trash).
    Public,
    /// Cards visible only to the zone owner (hand).
    OwnerOnly,
    /// Cards not visible to anyone (deck, life).
    Hidden,
}

/// Address of a zone: its owner plus its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneRef {
    pub owner: PlayerId,
    pub kind: ZoneKind,
}

impl ZoneRef {
    #[must_use]
    pub const fn new(owner: PlayerId, kind: ZoneKind) -> Self {
        Self { owner, kind }
    }
}

impl std::fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s {}", self.owner, self.kind)
    }
}

/// Which end of a zone to insert at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Display end (most recently added).
    Front,
    /// Draw end (deck top).
    Back,
}

/// An ordered container of cards owned by one player.
///
/// Uses `im::Vector` so cloning a `GameState` for snapshots stays cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    owner: PlayerId,
    kind: ZoneKind,
    cards: Vector<EntityId>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(owner: PlayerId, kind: ZoneKind) -> Self {
        Self {
            owner,
            kind,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// This zone's address.
    #[must_use]
    pub fn zone_ref(&self) -> ZoneRef {
        ZoneRef::new(self.owner, self.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: EntityId) -> bool {
        self.cards.contains(&card)
    }

    /// Iterate front (display end) to back (draw end).
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.cards.iter().copied()
    }

    /// Snapshot of the contents, front to back.
    ///
    /// Callers that mutate the zone while walking it iterate this copy.
    #[must_use]
    pub fn to_vec(&self) -> Vec<EntityId> {
        self.cards.iter().copied().collect()
    }

    /// Insert a card at the front.
    ///
    /// Panics if the card is already a member of some zone; moving between
    /// zones is `GameState::move_card`'s job.
    pub fn push_front(&mut self, card: EntityId, cards: &mut CardArena) {
        self.claim(card, cards);
        self.cards.push_front(card);
    }

    /// Insert a card at the back (draw end).
    ///
    /// Panics if the card is already a member of some zone.
    pub fn push_back(&mut self, card: EntityId, cards: &mut CardArena) {
        self.claim(card, cards);
        self.cards.push_back(card);
    }

    /// Insert at the given end.
    pub fn insert(&mut self, card: EntityId, position: ZonePosition, cards: &mut CardArena) {
        match position {
            ZonePosition::Front => self.push_front(card, cards),
            ZonePosition::Back => self.push_back(card, cards),
        }
    }

    /// Remove a specific card, clearing its zone reference.
    ///
    /// Returns false (and logs) if the card isn't here.
    pub fn remove(&mut self, card: EntityId, cards: &mut CardArena) -> bool {
        let Some(index) = self.cards.index_of(&card) else {
            warn!(%card, zone = %self.zone_ref(), "card not found in zone");
            return false;
        };
        self.cards.remove(index);
        cards.card_mut(card).set_zone(None);
        true
    }

    /// Remove and return the card at the draw end.
    pub fn pop_back(&mut self, cards: &mut CardArena) -> Option<EntityId> {
        let card = self.cards.pop_back()?;
        cards.card_mut(card).set_zone(None);
        Some(card)
    }

    /// The card at the draw end, if any.
    #[must_use]
    pub fn peek(&self) -> Option<EntityId> {
        self.cards.back().copied()
    }

    /// Up to `n` cards from the draw end, next-to-draw first.
    #[must_use]
    pub fn peek_n(&self, n: usize) -> Vec<EntityId> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Uniformly permute the contents.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut order = self.to_vec();
        rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
    }

    /// Remove every card, clearing each card's zone reference.
    ///
    /// Returns the removed cards, front to back.
    pub fn clear(&mut self, cards: &mut CardArena) -> Vec<EntityId> {
        let removed = self.to_vec();
        for &card in &removed {
            cards.card_mut(card).set_zone(None);
        }
        self.cards.clear();
        removed
    }

    fn claim(&self, card: EntityId, cards: &mut CardArena) {
        let instance = cards.card_mut(card);
        if let Some(current) = instance.zone() {
            panic!("{card} is already in {current}, cannot add it to {}", self.zone_ref());
        }
        instance.set_zone(Some(self.zone_ref()));
    }
}
