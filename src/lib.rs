//! # optcg-engine
//!
//! Rules engine for a two-player DON!!-based trading card game: the card and
//! zone model, the turn/phase state machine, and battle resolution.
//!
//! ## Design Principles
//!
//! 1. **Single Authority**: `GameState` is the only thing that moves cards or
//!    changes their status. `Player` and `Zone` are read-only from outside.
//!
//! 2. **One End Convention**: every zone's front is its display end and its
//!    back is its draw end.
//!
//! 3. **Errors for Illegal Requests Only**: illegal actions return
//!    `EngineError` and change nothing. Running out of deck or life ends the
//!    game. Broken invariants panic.
//!
//! ## Architecture
//!
//! - **Arena + Ids**: card instances live in one `CardArena`; zones hold
//!   `EntityId`s in persistent `im` vectors, so cloning a game is cheap.
//!
//! - **Explicit Context**: `TurnManager` and `BattleSystem` take
//!   `&mut GameState` per call instead of holding on to it.
//!
//! - **Seeded RNG**: every shuffle draws from the game's `GameRng`, so a seed
//!   replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, game state, RNG, configuration, errors
//! - `zones`: Ordered card containers and decks
//! - `cards`: Card definitions, instances, arena and registry
//! - `turn`: Phases and the turn manager
//! - `battle`: Attack legality, counters and battle resolution
//! - `setup`: Game builder and the starter game

pub mod battle;
pub mod cards;
pub mod core;
pub mod setup;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, EntityId, GameRng, GameState, Player, PlayerId, PlayerMap,
};

pub use crate::zones::{Deck, Zone, ZoneKind, ZonePosition, ZoneRef, ZoneVisibility};

pub use crate::cards::{
    Card, CardArena, CardDefinition, CardId, CardKind, CardRegistry, CardType, DON_POWER_BOOST,
};

pub use crate::turn::{Phase, TurnManager};

pub use crate::battle::{BattleOutcome, BattleSystem, CounterResolver, NoCounter, PrintedCounter};

pub use crate::setup::{starter_game, GameBuilder, PlayerSetup};
