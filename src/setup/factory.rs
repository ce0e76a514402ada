//! Ready-made starter game for local play-testing.
//!
//! Luffy (red) against Zoro (green): 5000-power leaders with 5 life, each
//! with the same 50-card character deck spread across costs 1 to 7.

use std::sync::Arc;

use crate::cards::{Attribute, CardDefinition, CardType, Color};
use crate::core::error::EngineError;
use crate::core::state::GameState;
use crate::turn::TurnManager;

use super::builder::{GameBuilder, PlayerSetup};

/// (id, name, cost/power tier, copies)
const STARTER_CHARACTERS: [(&str, &str, u32, usize); 7] = [
    ("ST-C1", "Pirate Grunt", 1, 10),
    ("ST-C2", "Pirate Lieutenant", 2, 10),
    ("ST-C3", "Pirate Captain", 3, 10),
    ("ST-C4", "Pirate Commander", 4, 8),
    ("ST-C5", "Pirate Admiral", 5, 7),
    ("ST-C6", "Yonko Officer", 6, 3),
    ("ST-C7", "Yonko", 7, 2),
];

/// The two starter leaders: Luffy, then Zoro.
#[must_use]
pub fn starter_leaders() -> [Arc<CardDefinition>; 2] {
    let leader = |id: &str, name: &str, color| {
        Arc::new(
            CardDefinition::new(id, name, CardType::Leader)
                .with_power(5000)
                .with_life(5)
                .with_attribute(Attribute::Strike)
                .with_color(color)
                .with_description("Test leader for local play."),
        )
    };
    [
        leader("ST-L1", "Monkey D. Luffy", Color::Red),
        leader("ST-L2", "Roronoa Zoro", Color::Green),
    ]
}

/// The 50-card starter deck. Each tier costs N and has N x 1000 power.
#[must_use]
pub fn starter_deck() -> Vec<Arc<CardDefinition>> {
    STARTER_CHARACTERS
        .iter()
        .flat_map(|&(id, name, tier, copies)| {
            let card = Arc::new(
                CardDefinition::new(id, name, CardType::Character)
                    .with_cost(tier)
                    .with_power(tier * 1000),
            );
            std::iter::repeat(card).take(copies)
        })
        .collect()
}

/// Build the starter game, ready for player one's first DON phase.
pub fn starter_game(seed: u64) -> Result<(GameState, TurnManager), EngineError> {
    let [luffy, zoro] = starter_leaders();
    GameBuilder::new()
        .first_player(PlayerSetup::new("Monkey D. Luffy", luffy).with_deck(starter_deck()))
        .second_player(PlayerSetup::new("Roronoa Zoro", zoro).with_deck(starter_deck()))
        .build(seed)
}
