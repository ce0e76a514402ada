//! Core engine types: entities, players, game state, RNG, configuration, errors.
//!
//! `GameState` is the single mutation authority over cards and zones; the
//! other types here are the identifiers and support it is built from.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use entity::EntityId;
pub use error::EngineError;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
