//! Card system: definitions, instances, storage and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (set code)
//! - `CardDefinition`: Static printed card data
//! - `Card`: Runtime card state (zone, rest, attachments, leader life)
//! - `CardArena`: All card instances of one game, keyed by `EntityId`
//! - `CardRegistry`: Card definition lookup

pub mod arena;
pub mod definition;
pub mod instance;
pub mod registry;

pub use arena::CardArena;
pub use definition::{Attribute, CardDefinition, CardId, CardType, Color};
pub use instance::{Card, CardKind, DON_POWER_BOOST};
pub use registry::CardRegistry;
