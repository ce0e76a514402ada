//! Deck: a zone with multi-card draw and search.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::zone::{Zone, ZoneKind};
use crate::cards::{Card, CardArena};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A drawable zone (main deck or DON!! deck).
///
/// Derefs to `Zone` for the single-card operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    zone: Zone,
}

impl Deck {
    /// Create an empty deck of the given kind.
    #[must_use]
    pub fn new(owner: PlayerId, kind: ZoneKind) -> Self {
        debug_assert!(matches!(kind, ZoneKind::Deck | ZoneKind::DonDeck));
        Self {
            zone: Zone::new(owner, kind),
        }
    }

    /// Draw the top card.
    pub fn draw(&mut self, cards: &mut CardArena) -> Option<EntityId> {
        self.zone.pop_back(cards)
    }

    /// Draw up to `count` cards from the top.
    ///
    /// Returns fewer than `count` if the deck runs out.
    pub fn draw_many(&mut self, count: usize, cards: &mut CardArena) -> Vec<EntityId> {
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            match self.zone.pop_back(cards) {
                Some(card) => drawn.push(card),
                None => {
                    debug!(zone = %self.zone.zone_ref(), requested = count, drawn = drawn.len(), "deck exhausted");
                    break;
                }
            }
        }
        drawn
    }

    /// Cards matching `predicate`, front to back.
    pub fn search<F>(&self, cards: &CardArena, predicate: F) -> Vec<EntityId>
    where
        F: Fn(&Card) -> bool,
    {
        self.zone
            .iter()
            .filter(|&id| predicate(cards.card(id)))
            .collect()
    }
}

impl Deref for Deck {
    type Target = Zone;

    fn deref(&self) -> &Self::Target {
        &self.zone
    }
}

impl DerefMut for Deck {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.zone
    }
}
