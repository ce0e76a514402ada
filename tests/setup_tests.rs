//! Game setup integration tests: builder, registry-backed decks, starter game.

mod common;

use std::sync::Arc;

use optcg_engine::cards::{CardDefinition, CardId, CardRegistry, CardType};
use optcg_engine::core::{EngineConfig, EngineError, PlayerId};
use optcg_engine::setup::{starter_deck, starter_game, starter_leaders, GameBuilder, PlayerSetup};
use optcg_engine::turn::Phase;

const P1: PlayerId = PlayerId::ONE;
const P2: PlayerId = PlayerId::TWO;

const CARD_DATA: &str = r#"[
    {"card_set_id": "OP01-001", "card_name": "Roronoa Zoro", "card_type": "Leader",
     "card_power": "5000", "life": "5", "card_color": "Red", "attribute": "Slash"},
    {"card_set_id": "OP01-060", "card_name": "Donquixote Doflamingo", "card_type": "Leader",
     "card_power": 5000, "life": 4, "card_color": "Blue Purple"},
    {"card_set_id": "OP01-016", "card_name": "Nami", "card_type": "Character",
     "card_cost": "1", "card_power": "NULL", "counter_amount": "1000"},
    {"card_set_id": "OP01-025", "card_name": "Roronoa Zoro", "card_type": "Character",
     "card_cost": 3, "card_power": 5000, "counter_amount": null},
    {"card_set_id": "OP01-026", "card_name": "Gum-Gum Fire-Fist Pistol Red Hawk",
     "card_type": "Event", "card_cost": 2, "card_text": "[Counter] +4000 power"},
    {"card_name": "Broken Entry"}
]"#;

fn registry() -> CardRegistry {
    common::init_logging();
    CardRegistry::from_json(CARD_DATA).unwrap()
}

fn registry_deck(registry: &CardRegistry) -> Vec<Arc<CardDefinition>> {
    ["OP01-016", "OP01-025", "OP01-026"]
        .iter()
        .flat_map(|id| std::iter::repeat(registry.get_unchecked(&CardId::new(*id))).take(12))
        .collect()
}

#[test]
fn test_registry_loads_clean_and_dirty_records() {
    let registry = registry();

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.find_by_type(CardType::Leader).count(), 2);

    let nami = registry.get_unchecked(&CardId::new("OP01-016"));
    assert_eq!(nami.power, 0);
    assert_eq!(nami.counter, 1000);
    assert_eq!(nami.cost, 1);
}

#[test]
fn test_build_from_registry() {
    let registry = registry();
    let zoro = registry.get_unchecked(&CardId::new("OP01-001"));
    let doffy = registry.get_unchecked(&CardId::new("OP01-060"));

    let (state, turns) = GameBuilder::new()
        .first_player(PlayerSetup::new("Zoro", zoro).with_deck(registry_deck(&registry)))
        .second_player(PlayerSetup::new("Doflamingo", doffy).with_deck(registry_deck(&registry)))
        .build(5)
        .unwrap();

    // 36 cards: 5 in hand, then life from the deck top
    assert_eq!(state.player(P1).deck().len(), 36 - 5 - 5);
    assert_eq!(state.player(P2).deck().len(), 36 - 5 - 4);
    assert_eq!(state.life_points(P2), 4);
    assert_eq!(turns.phase(), Phase::Don);
    assert!(turns.is_first_turn());
}

#[test]
fn test_every_card_has_one_location() {
    let (state, _) = starter_game(3).unwrap();

    for card in state.cards().iter() {
        match card.zone() {
            Some(zone) => assert!(state.zone(zone).contains(card.entity_id())),
            None => assert_eq!(state.leader(card.owner()), Some(card.entity_id())),
        }
    }
}

#[test]
fn test_leader_sits_in_no_zone() {
    let (state, _) = starter_game(3).unwrap();

    for player in PlayerId::all() {
        let leader = state.leader(player).unwrap();
        assert_eq!(state.card(leader).zone(), None);
        assert_eq!(state.card(leader).card_type(), CardType::Leader);
    }
}

#[test]
fn test_starter_game_is_replayable() {
    let (a, _) = starter_game(1234).unwrap();
    let (b, _) = starter_game(1234).unwrap();

    assert_eq!(a.seed(), 1234);
    for player in PlayerId::all() {
        assert_eq!(a.player(player).hand().to_vec(), b.player(player).hand().to_vec());
        assert_eq!(a.player(player).life().to_vec(), b.player(player).life().to_vec());
        assert_eq!(a.player(player).deck().to_vec(), b.player(player).deck().to_vec());
    }
}

#[test]
fn test_short_deck_ends_game_during_setup() {
    let registry = registry();
    let zoro = registry.get_unchecked(&CardId::new("OP01-001"));
    let nami = registry.get_unchecked(&CardId::new("OP01-016"));

    let (state, _) = GameBuilder::new()
        .first_player(PlayerSetup::new("Zoro", zoro.clone()).with_cards(nami.clone(), 3))
        .second_player(PlayerSetup::new("Zoro", zoro).with_cards(nami, 20))
        .build(8)
        .unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.winner(), Some(P2));
    assert_eq!(state.player(P1).hand().len(), 3);
}

#[test]
fn test_config_from_json() {
    let config: EngineConfig =
        serde_json::from_str(r#"{"starting_hand_size": 4, "don_deck_size": 6}"#).unwrap();
    let [luffy, zoro] = starter_leaders();

    let (state, turns) = GameBuilder::new()
        .config(config)
        .first_player(PlayerSetup::new("Luffy", luffy).with_deck(starter_deck()))
        .second_player(PlayerSetup::new("Zoro", zoro).with_deck(starter_deck()))
        .build(2)
        .unwrap();

    assert_eq!(state.player(P1).hand().len(), 4);
    assert_eq!(state.player(P2).don_deck().len(), 6);
    assert_eq!(turns.config().don_per_turn, 2);
}

#[test]
fn test_missing_second_player() {
    let [luffy, _] = starter_leaders();

    let err = GameBuilder::new()
        .first_player(PlayerSetup::new("Luffy", luffy))
        .build(1)
        .unwrap_err();

    assert_eq!(err, EngineError::MissingLeader(P2));
    assert_eq!(err.to_string(), "Player 2 has no leader");
}
