//! Card instance identification.
//!
//! Every physical card in a game (leaders, main-deck cards, DON!! cards) gets a
//! unique `EntityId` when `GameState` creates it. Zones, attachment lists and
//! battle APIs refer to cards only by id; the `Card` itself lives in the
//! state's `CardArena`.
//!
//! ```
//! use optcg_engine::core::EntityId;
//!
//! let card = EntityId(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.to_string(), "Entity(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The first id handed out by a fresh `GameState`.
    pub const FIRST: EntityId = EntityId(0);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
