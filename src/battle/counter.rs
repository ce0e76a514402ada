//! Counter resolution.
//!
//! How much power a counter card grants depends on card effects, which the
//! engine doesn't interpret. `BattleSystem` asks a `CounterResolver` instead,
//! so the lookup can be swapped without touching battle code.

use crate::core::entity::EntityId;
use crate::core::state::GameState;

/// Computes the power boost a counter card grants to the defending card.
pub trait CounterResolver {
    /// Called while `counter_card` is still in the defender's hand.
    fn counter_boost(&self, state: &GameState, counter_card: EntityId, target: EntityId) -> u32;
}

/// Counters grant nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCounter;

impl CounterResolver for NoCounter {
    fn counter_boost(&self, _state: &GameState, _counter_card: EntityId, _target: EntityId) -> u32 {
        0
    }
}

/// Counters grant the counter value printed on the card.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintedCounter;

impl CounterResolver for PrintedCounter {
    fn counter_boost(&self, state: &GameState, counter_card: EntityId, _target: EntityId) -> u32 {
        state.card(counter_card).definition().counter
    }
}

impl<F> CounterResolver for F
where
    F: Fn(&GameState, EntityId, EntityId) -> u32,
{
    fn counter_boost(&self, state: &GameState, counter_card: EntityId, target: EntityId) -> u32 {
        self(state, counter_card, target)
    }
}
