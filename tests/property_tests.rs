//! Property tests for card, zone and resource invariants.

include!("common/proptest_prelude.rs");

mod common;

use common::{character, Table};
use optcg_engine::battle::BattleSystem;
use optcg_engine::core::{GameState, PlayerId};
use optcg_engine::zones::{ZoneKind, ZoneRef};
use proptest::prelude::*;

const P1: PlayerId = PlayerId::ONE;

fn zone_ref() -> impl Strategy<Value = ZoneRef> {
    (0u8..2, prop::sample::select(ZoneKind::ALL.to_vec()))
        .prop_map(|(owner, kind)| ZoneRef::new(PlayerId(owner), kind))
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Total power is printed power plus 1000 per attached DON!!.
    #[test]
    fn prop_power_formula(base in 0u32..=12, attached in 0usize..=10) {
        let mut table = Table::new(0);
        let host = table.on_field(P1, base * 1000);
        for token in table.give_dons(P1, attached) {
            table.state.attach_token(host, token).unwrap();
        }

        let card = table.state.card(host);
        prop_assert_eq!(card.total_power(), base * 1000 + 1000 * attached as u32);
        prop_assert_eq!(card.attached_count(), attached);
    }

    /// Shuffling reorders the deck without adding or losing cards.
    #[test]
    fn prop_shuffle_preserves_cards(size in 0usize..60, seed in any::<u64>()) {
        let mut state = GameState::new("Luffy", "Zoro", seed);
        for _ in 0..size {
            state.create_card_in(character(1000), P1, ZoneKind::Deck);
        }
        let mut before = state.player(P1).deck().to_vec();

        state.shuffle_deck(P1);

        let mut after = state.player(P1).deck().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// After any sequence of moves, every card is in exactly the zone it
    /// records, and nowhere else.
    #[test]
    fn prop_moves_keep_zone_agreement(
        moves in prop::collection::vec((0usize..8, zone_ref()), 1..40),
    ) {
        let mut table = Table::new(0);
        let cards: Vec<_> = (0..8).map(|i| table.in_hand(P1, character(i * 1000))).collect();

        for (index, to) in moves {
            table.state.move_card(cards[index], to);
        }

        for &card in &cards {
            let zone = table.state.card(card).zone();
            prop_assert!(zone.is_some());
            let holders = table
                .state
                .players()
                .flat_map(|player| ZoneKind::ALL.into_iter().map(move |kind| player.zone(kind)))
                .filter(|z| z.contains(card))
                .map(|z| z.zone_ref())
                .collect::<Vec<_>>();
            prop_assert_eq!(holders, zone.into_iter().collect::<Vec<_>>());
        }
    }

    /// Detached DON!! cards always come back rested and unattached.
    #[test]
    fn prop_detach_rests_token(attached in 1usize..8, detach in 0usize..10) {
        let mut table = Table::new(0);
        let host = table.on_field(P1, 1000);
        for token in table.give_dons(P1, attached) {
            table.state.attach_token(host, token).unwrap();
        }

        for _ in 0..detach {
            if let Some(token) = table.state.detach_token(host) {
                let don = table.state.card(token);
                prop_assert!(don.is_rested());
                prop_assert!(!don.is_attached());
                prop_assert!(table.state.player(P1).cost().contains(token));
            }
        }

        let remaining = attached.saturating_sub(detach);
        prop_assert_eq!(table.state.card(host).attached_count(), remaining);
        prop_assert_eq!(table.state.player(P1).cost().len(), attached - remaining);
    }

    /// A card can attack exactly when it is active and not summon-sick.
    #[test]
    fn prop_attack_eligibility(played in any::<bool>(), rested in any::<bool>()) {
        let mut table = Table::new(1);
        let card = if played {
            let card = table.in_hand(P1, character(2000));
            table.state.play_card(P1, card).unwrap();
            card
        } else {
            table.on_field(P1, 2000)
        };
        if rested {
            table.state.rest(card);
        }

        let eligible = !rested && !played;
        prop_assert_eq!(table.state.card(card).can_attack(), eligible);
        prop_assert_eq!(
            BattleSystem::new().valid_attackers(&table.state, P1).contains(&card),
            eligible
        );
    }

    /// The leader's life counter tracks the life zone as life is taken.
    #[test]
    fn prop_life_counter_matches_zone(life in 1u32..=6, hits in 0usize..6) {
        let mut table = Table::new(life);

        table.state.remove_life(P1, hits);

        let taken = hits.min(life as usize);
        prop_assert_eq!(table.state.player(P1).life().len(), life as usize - taken);
        prop_assert_eq!(table.state.life_points(P1), life - taken as u32);
        prop_assert_eq!(table.state.is_game_over(), hits > life as usize);
    }
}
