//! Turn manager: the phase state machine.
//!
//! ```text
//! REFRESH -> DRAW -> DON -> MAIN -> END -> (other player's) REFRESH
//! ```
//!
//! The game starts in player one's DON phase with `first_turn` set, so the
//! very first turn skips REFRESH and DRAW. Each call to `advance_phase` runs
//! the action for leaving the current phase:
//!
//! | Leaving | Action |
//! |---------|--------|
//! | REFRESH | refresh leader, field, then cost-area DON!! |
//! | DRAW    | draw 1 card (deck-out ends the game) |
//! | DON     | draw 1 DON!! on the first turn, 2 after |
//! | MAIN    | nothing; the controller drives MAIN |
//! | END     | pass the turn, clear `first_turn`, bump the turn counter |
//!
//! The manager doesn't refuse to advance after the game ends; check
//! `GameState::is_game_over` between calls.

use tracing::debug;

use super::phase::Phase;
use crate::core::config::EngineConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Tracks whose turn it is and which phase the turn is in.
#[derive(Clone, Debug)]
pub struct TurnManager {
    active: PlayerId,
    phase: Phase,
    turn: u32,
    first_turn: bool,
    config: EngineConfig,
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnManager {
    /// Player one's first DON phase, turn 1, with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            active: PlayerId::ONE,
            phase: Phase::Don,
            turn: 1,
            first_turn: true,
            config,
        }
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the current phase's exit action and move to the next phase.
    ///
    /// Returns the new phase.
    pub fn advance_phase(&mut self, state: &mut GameState) -> Phase {
        let player = self.active;
        match self.phase {
            Phase::Refresh => {
                state.refresh_leader(player);
                state.refresh_field(player);
                state.refresh_don(player);
            }
            Phase::Draw => {
                state.draw(player, 1);
            }
            Phase::Don => {
                let count = self.config.don_for_turn(self.first_turn);
                state.draw_don(player, count);
            }
            Phase::Main => {}
            Phase::End => {
                self.end_turn();
                return self.phase;
            }
        }

        self.phase = self.phase.next();
        debug!(%player, turn = self.turn, phase = %self.phase, "phase advanced");
        self.phase
    }

    /// Advance until an interactive phase is reached or the game ends.
    pub fn advance_to_main(&mut self, state: &mut GameState) -> Phase {
        loop {
            if self.phase.is_interactive() || state.is_game_over() {
                return self.phase;
            }
            self.advance_phase(state);
        }
    }

    fn end_turn(&mut self) {
        self.active = self.active.opponent();
        self.first_turn = false;
        self.turn += 1;
        self.phase = Phase::Refresh;
        debug!(player = %self.active, turn = self.turn, "turn started");
    }
}
