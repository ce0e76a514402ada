//! Game setup: building a ready-to-play `GameState` and `TurnManager`.

pub mod builder;
pub mod factory;

pub use builder::{GameBuilder, PlayerSetup};
pub use factory::{starter_deck, starter_game, starter_leaders};
