//! Turn phases.

use serde::{Deserialize, Serialize};

/// One step of the fixed per-turn sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Activate rested cards and return attached DON!!.
    Refresh,
    /// Draw one card.
    Draw,
    /// Draw DON!! cards into the cost area.
    Don,
    /// Players act: play cards, attach DON!!, attack.
    Main,
    /// Pass the turn.
    End,
}

impl Phase {
    /// Phases in turn order.
    pub const ALL: [Phase; 5] = [Phase::Refresh, Phase::Draw, Phase::Don, Phase::Main, Phase::End];

    /// The phase that follows this one. `End` wraps to the next turn's `Refresh`.
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::Refresh => Phase::Draw,
            Phase::Draw => Phase::Don,
            Phase::Don => Phase::Main,
            Phase::Main => Phase::End,
            Phase::End => Phase::Refresh,
        }
    }

    /// Does this phase wait for player decisions?
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Phase::Main)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Refresh => "REFRESH",
            Phase::Draw => "DRAW",
            Phase::Don => "DON",
            Phase::Main => "MAIN",
            Phase::End => "END",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut phase = Phase::Refresh;
        for expected in Phase::ALL.iter().skip(1) {
            phase = phase.next();
            assert_eq!(phase, *expected);
        }
        assert_eq!(phase.next(), Phase::Refresh);
    }

    #[test]
    fn test_only_main_is_interactive() {
        let interactive: Vec<_> = Phase::ALL.into_iter().filter(|p| p.is_interactive()).collect();
        assert_eq!(interactive, vec![Phase::Main]);
    }
}
