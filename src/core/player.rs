//! Player identification, per-player storage, and the player aggregate.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two players.
//!
//! ## PlayerMap
//!
//! Per-player data storage with O(1) indexing by `PlayerId`.
//!
//! ## Player
//!
//! A passive aggregate of one player's leader slot and zones. It exposes no
//! mutation of its own; `GameState` is the only authority that moves cards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::entity::EntityId;
use crate::zones::{Deck, Zone, ZoneKind};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. `PlayerId::ONE` takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index out of range");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs, first player first.
    ///
    /// ```
    /// use optcg_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use optcg_engine::core::{PlayerId, PlayerMap};
///
/// let mut drawn: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// drawn[PlayerId::TWO] += 1;
///
/// assert_eq!(drawn[PlayerId::ONE], 0);
/// assert_eq!(drawn[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap from both players' values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One player's leader slot and zones.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    leader: Option<EntityId>,
    deck: Deck,
    don_deck: Deck,
    hand: Zone,
    field: Zone,
    trash: Zone,
    life: Zone,
    cost: Zone,
    stage: Zone,
}

impl Player {
    /// Create a player with empty zones and no leader.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            leader: None,
            deck: Deck::new(id, ZoneKind::Deck),
            don_deck: Deck::new(id, ZoneKind::DonDeck),
            hand: Zone::new(id, ZoneKind::Hand),
            field: Zone::new(id, ZoneKind::Field),
            trash: Zone::new(id, ZoneKind::Trash),
            life: Zone::new(id, ZoneKind::Life),
            cost: Zone::new(id, ZoneKind::Cost),
            stage: Zone::new(id, ZoneKind::Stage),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The leader card, once setup has assigned one.
    #[must_use]
    pub fn leader(&self) -> Option<EntityId> {
        self.leader
    }

    pub(crate) fn set_leader(&mut self, leader: EntityId) {
        self.leader = Some(leader);
    }

    pub(crate) fn clear_leader(&mut self) -> Option<EntityId> {
        self.leader.take()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn don_deck(&self) -> &Deck {
        &self.don_deck
    }

    #[must_use]
    pub fn hand(&self) -> &Zone {
        &self.hand
    }

    #[must_use]
    pub fn field(&self) -> &Zone {
        &self.field
    }

    #[must_use]
    pub fn trash(&self) -> &Zone {
        &self.trash
    }

    #[must_use]
    pub fn life(&self) -> &Zone {
        &self.life
    }

    #[must_use]
    pub fn cost(&self) -> &Zone {
        &self.cost
    }

    #[must_use]
    pub fn stage(&self) -> &Zone {
        &self.stage
    }

    /// Look up a zone by kind.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Deck => &*self.deck,
            ZoneKind::DonDeck => &*self.don_deck,
            ZoneKind::Hand => &self.hand,
            ZoneKind::Field => &self.field,
            ZoneKind::Trash => &self.trash,
            ZoneKind::Life => &self.life,
            ZoneKind::Cost => &self.cost,
            ZoneKind::Stage => &self.stage,
        }
    }

    pub(crate) fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Deck => &mut *self.deck,
            ZoneKind::DonDeck => &mut *self.don_deck,
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Field => &mut self.field,
            ZoneKind::Trash => &mut self.trash,
            ZoneKind::Life => &mut self.life,
            ZoneKind::Cost => &mut self.cost,
            ZoneKind::Stage => &mut self.stage,
        }
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}
