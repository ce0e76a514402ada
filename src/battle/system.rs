//! Battle resolution.
//!
//! A battle is one attacker against one target. The attacker rests no matter
//! what happens. It wins when its total power is at least the target's total
//! power plus any counter boost; ties go to the attacker. A beaten leader
//! loses one life card, a beaten character goes to its owner's trash.

use tracing::{debug, info, warn};

use super::counter::{CounterResolver, NoCounter};
use crate::core::entity::EntityId;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// What a resolved battle did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// A character target was trashed.
    CharacterKnockedOut,
    /// A leader target lost a life card (or its owner lost the game).
    LifeTaken,
    /// The defender held.
    Repelled,
}

/// Computes legal attacks and resolves them.
#[derive(Clone, Debug, Default)]
pub struct BattleSystem<R = NoCounter> {
    resolver: R,
}

impl BattleSystem<NoCounter> {
    /// A battle system where counters grant no power.
    #[must_use]
    pub fn new() -> Self {
        Self { resolver: NoCounter }
    }
}

impl<R: CounterResolver> BattleSystem<R> {
    /// A battle system using `resolver` for counter values.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The player's leader if it can attack, then every field card that can,
    /// in field order.
    #[must_use]
    pub fn valid_attackers(&self, state: &GameState, player: PlayerId) -> Vec<EntityId> {
        let leader = state
            .leader(player)
            .filter(|&leader| state.card(leader).can_attack());
        leader
            .into_iter()
            .chain(
                state
                    .player(player)
                    .field()
                    .iter()
                    .filter(|&card| state.card(card).can_attack()),
            )
            .collect()
    }

    /// The opponent's leader, then every rested card on the opponent's field.
    #[must_use]
    pub fn valid_targets(&self, state: &GameState, opponent: PlayerId) -> Vec<EntityId> {
        state
            .leader(opponent)
            .into_iter()
            .chain(
                state
                    .player(opponent)
                    .field()
                    .iter()
                    .filter(|&card| state.card(card).is_rested()),
            )
            .collect()
    }

    /// Play a counter card from the defender's hand.
    ///
    /// The counter card goes to the defender's trash. Returns the power boost
    /// for `target`, as computed by the resolver.
    pub fn apply_counter(
        &self,
        state: &mut GameState,
        defender: PlayerId,
        counter_card: EntityId,
        target: EntityId,
    ) -> Result<u32, EngineError> {
        if !state.player(defender).hand().contains(counter_card) {
            warn!(player = %defender, card = %counter_card, "counter card is not in hand");
            return Err(EngineError::NotInHand {
                player: defender,
                card: counter_card,
            });
        }

        let boost = self.resolver.counter_boost(state, counter_card, target);
        state.trash(defender, counter_card);
        debug!(player = %defender, card = %counter_card, %target, boost, "counter played");
        Ok(boost)
    }

    /// Resolve a battle without checking legality.
    pub fn resolve(
        &self,
        state: &mut GameState,
        attacker: EntityId,
        target: EntityId,
        counter_boost: u32,
    ) -> BattleOutcome {
        state.rest(attacker);

        let attacker_power = state.card(attacker).total_power();
        let defender_power = state.card(target).total_power().saturating_add(counter_boost);

        let outcome = if attacker_power >= defender_power {
            let defender = state.card(target);
            let owner = defender.owner();
            if defender.is_leader() {
                state.remove_life(owner, 1);
                BattleOutcome::LifeTaken
            } else {
                state.trash(owner, target);
                BattleOutcome::CharacterKnockedOut
            }
        } else {
            BattleOutcome::Repelled
        };

        info!(
            %attacker,
            %target,
            attacker_power,
            defender_power,
            ?outcome,
            "battle resolved"
        );
        outcome
    }

    /// Check that `attacker` may attack `target`, then resolve the battle.
    ///
    /// The attacking player is the attacker's controller.
    pub fn attack(
        &self,
        state: &mut GameState,
        attacker: EntityId,
        target: EntityId,
        counter_boost: u32,
    ) -> Result<BattleOutcome, EngineError> {
        let player = state.card(attacker).controller();
        if !self.valid_attackers(state, player).contains(&attacker) {
            warn!(%player, %attacker, "illegal attacker");
            return Err(EngineError::IllegalAttacker(attacker));
        }
        if !self.valid_targets(state, player.opponent()).contains(&target) {
            warn!(%player, %target, "illegal attack target");
            return Err(EngineError::IllegalTarget(target));
        }

        Ok(self.resolve(state, attacker, target, counter_boost))
    }
}
