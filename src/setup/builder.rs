//! Game builder: players, leaders and decks in, a ready game out.

use std::sync::Arc;

use tracing::info;

use crate::cards::CardDefinition;
use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::GameState;
use crate::turn::TurnManager;
use crate::zones::ZoneKind;

/// One player's name, leader and main deck.
#[derive(Clone, Debug)]
pub struct PlayerSetup {
    name: String,
    leader: Arc<CardDefinition>,
    deck: Vec<Arc<CardDefinition>>,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, leader: Arc<CardDefinition>) -> Self {
        Self {
            name: name.into(),
            leader,
            deck: Vec::new(),
        }
    }

    /// Add `count` copies of a card to the main deck.
    pub fn with_cards(mut self, card: Arc<CardDefinition>, count: usize) -> Self {
        self.deck.extend(std::iter::repeat(card).take(count));
        self
    }

    /// Replace the main deck.
    pub fn with_deck(mut self, deck: Vec<Arc<CardDefinition>>) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }
}

/// Builds a `GameState` and `TurnManager` ready for player one's first DON
/// phase.
///
/// `build` creates both leaders, main decks and DON!! decks, shuffles,
/// draws opening hands, applies any mulligans, then deals each player life
/// cards equal to their leader's life.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use optcg_engine::cards::{CardDefinition, CardType};
/// use optcg_engine::core::PlayerId;
/// use optcg_engine::setup::{GameBuilder, PlayerSetup};
///
/// let leader = Arc::new(CardDefinition::new("L-1", "Luffy", CardType::Leader).with_power(5000).with_life(5));
/// let grunt = Arc::new(CardDefinition::new("C-1", "Grunt", CardType::Character).with_power(2000));
///
/// let (state, turns) = GameBuilder::new()
///     .first_player(PlayerSetup::new("Luffy", Arc::clone(&leader)).with_cards(Arc::clone(&grunt), 20))
///     .second_player(PlayerSetup::new("Zoro", leader).with_cards(grunt, 20))
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.player(PlayerId::ONE).hand().len(), 5);
/// assert_eq!(state.life_points(PlayerId::TWO), 5);
/// assert_eq!(turns.active_player(), PlayerId::ONE);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: EngineConfig,
    players: PlayerMap<Option<PlayerSetup>>,
    mulligans: PlayerMap<bool>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn first_player(self, setup: PlayerSetup) -> Self {
        self.player(PlayerId::ONE, setup)
    }

    pub fn second_player(self, setup: PlayerSetup) -> Self {
        self.player(PlayerId::TWO, setup)
    }

    pub fn player(mut self, player: PlayerId, setup: PlayerSetup) -> Self {
        self.players[player] = Some(setup);
        self
    }

    /// Have `player` take a mulligan after drawing the opening hand.
    pub fn mulligan(mut self, player: PlayerId) -> Self {
        self.mulligans[player] = true;
        self
    }

    /// Build the game.
    ///
    /// Fails with `MissingLeader` if a player wasn't configured or their
    /// leader definition isn't a leader card.
    pub fn build(self, seed: u64) -> Result<(GameState, TurnManager), EngineError> {
        let mut setups = Vec::with_capacity(2);
        for (player, setup) in self.players.iter() {
            match setup {
                Some(setup) if setup.leader.is_leader() => setups.push((player, setup)),
                _ => return Err(EngineError::MissingLeader(player)),
            }
        }

        let (first, second) = (setups[0].1, setups[1].1);
        let mut state = GameState::new(first.name.clone(), second.name.clone(), seed);
        let don = Arc::new(CardDefinition::don());

        for &(player, setup) in &setups {
            let leader = state.create_card(Arc::clone(&setup.leader), player);
            state.set_leader(player, leader);
            for card in &setup.deck {
                state.create_card_in(Arc::clone(card), player, ZoneKind::Deck);
            }
            for _ in 0..self.config.don_deck_size {
                state.create_card_in(Arc::clone(&don), player, ZoneKind::DonDeck);
            }
            state.shuffle_deck(player);
        }

        for player in PlayerId::all() {
            state.draw(player, self.config.starting_hand_size);
            if self.mulligans[player] {
                state.mulligan(player);
            }
        }

        for &(player, setup) in &setups {
            state.deal_life(player, setup.leader.life as usize);
        }

        info!(
            seed,
            first = first.name.as_str(),
            second = second.name.as_str(),
            "game set up"
        );
        Ok((state, TurnManager::with_config(self.config)))
    }
}
