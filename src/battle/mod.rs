//! Combat: legal attackers and targets, counters, and battle resolution.

pub mod counter;
pub mod system;

pub use counter::{CounterResolver, NoCounter, PrintedCounter};
pub use system::{BattleOutcome, BattleSystem};
