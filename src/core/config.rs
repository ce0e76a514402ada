//! Engine configuration.
//!
//! `EngineConfig` holds the numbers a table of players agrees on before a
//! game: opening hand size, DON!! deck size and how many DON!! cards arrive
//! each turn. Setup and the turn manager both read from it.

use serde::{Deserialize, Serialize};

/// Game-wide tunables.
///
/// ## Example
///
/// ```
/// use optcg_engine::core::EngineConfig;
///
/// let config = EngineConfig::default().with_starting_hand_size(6);
/// assert_eq!(config.starting_hand_size, 6);
/// assert_eq!(config.don_per_turn, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards drawn for the opening hand.
    pub starting_hand_size: usize,

    /// DON!! cards in each player's DON!! deck.
    pub don_deck_size: usize,

    /// DON!! cards drawn in the DON phase of the very first turn.
    pub first_turn_don: usize,

    /// DON!! cards drawn in every later DON phase.
    pub don_per_turn: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 5,
            don_deck_size: 10,
            first_turn_don: 1,
            don_per_turn: 2,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_don_deck_size(mut self, size: usize) -> Self {
        self.don_deck_size = size;
        self
    }

    #[must_use]
    pub fn with_first_turn_don(mut self, count: usize) -> Self {
        self.first_turn_don = count;
        self
    }

    #[must_use]
    pub fn with_don_per_turn(mut self, count: usize) -> Self {
        self.don_per_turn = count;
        self
    }

    /// DON!! cards to draw this turn.
    #[must_use]
    pub fn don_for_turn(&self, first_turn: bool) -> usize {
        if first_turn {
            self.first_turn_don
        } else {
            self.don_per_turn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.don_deck_size, 10);
        assert_eq!(config.don_for_turn(true), 1);
        assert_eq!(config.don_for_turn(false), 2);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_don_deck_size(8)
            .with_first_turn_don(2)
            .with_don_per_turn(3);

        assert_eq!(config.don_deck_size, 8);
        assert_eq!(config.don_for_turn(true), 2);
        assert_eq!(config.don_for_turn(false), 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = EngineConfig::default().with_starting_hand_size(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"don_per_turn": 1}"#).unwrap();
        assert_eq!(config.don_per_turn, 1);
        assert_eq!(config.starting_hand_size, 5);
    }
}
