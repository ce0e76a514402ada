//! Zone system for card locations.
//!
//! Each player owns exactly one zone of every `ZoneKind`. Zones are ordered;
//! `front` is the display end and `back` is the draw end for every kind.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Deck, DON!! deck, hand, field, trash, life, cost area, stage
//! - `ZoneRef`: Owner + kind, stored on each card as its location
//! - `Zone`: Ordered container with insert/remove/draw/shuffle
//! - `Deck`: Zone with multi-card draw and predicate search

pub mod deck;
pub mod zone;

pub use deck::Deck;
pub use zone::{Zone, ZoneKind, ZonePosition, ZoneRef, ZoneVisibility};
