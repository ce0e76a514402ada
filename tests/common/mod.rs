//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use optcg_engine::cards::{CardDefinition, CardType};
use optcg_engine::core::{EntityId, GameState, PlayerId};
use optcg_engine::zones::ZoneKind;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn character(power: u32) -> Arc<CardDefinition> {
    Arc::new(
        CardDefinition::new(format!("T-{power}"), "Test Character", CardType::Character)
            .with_power(power),
    )
}

pub fn leader(power: u32, life: u32) -> Arc<CardDefinition> {
    Arc::new(
        CardDefinition::new("T-L", "Test Leader", CardType::Leader)
            .with_power(power)
            .with_life(life),
    )
}

pub fn don() -> Arc<CardDefinition> {
    Arc::new(CardDefinition::don())
}

/// Two players with 5000-power leaders and `life` life cards each.
pub struct Table {
    pub state: GameState,
    pub leaders: [EntityId; 2],
}

impl Table {
    pub fn new(life: u32) -> Self {
        init_logging();
        let mut state = GameState::new("Luffy", "Zoro", 42);
        let mut leaders = [EntityId(0); 2];
        for player in PlayerId::all() {
            let card = state.create_card(leader(5000, life), player);
            state.set_leader(player, card);
            for _ in 0..life {
                state.create_card_in(character(1000), player, ZoneKind::Life);
            }
            leaders[player.index()] = card;
        }
        Self { state, leaders }
    }

    pub fn leader(&self, player: PlayerId) -> EntityId {
        self.leaders[player.index()]
    }

    /// A fresh (not summon-sick) character on `player`'s field.
    pub fn on_field(&mut self, player: PlayerId, power: u32) -> EntityId {
        self.state.create_card_in(character(power), player, ZoneKind::Field)
    }

    pub fn in_hand(&mut self, player: PlayerId, definition: Arc<CardDefinition>) -> EntityId {
        self.state.create_card_in(definition, player, ZoneKind::Hand)
    }

    pub fn stock_deck(&mut self, player: PlayerId, count: usize) {
        for _ in 0..count {
            self.state.create_card_in(character(1000), player, ZoneKind::Deck);
        }
    }

    pub fn stock_dons(&mut self, player: PlayerId, count: usize) {
        for _ in 0..count {
            self.state.create_card_in(don(), player, ZoneKind::DonDeck);
        }
    }

    /// Put `count` active DON!! cards straight into the cost area.
    pub fn give_dons(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        (0..count)
            .map(|_| self.state.create_card_in(don(), player, ZoneKind::Cost))
            .collect()
    }
}
