//! Turn structure: phases and the turn manager that steps through them.

pub mod manager;
pub mod phase;

pub use manager::TurnManager;
pub use phase::Phase;
