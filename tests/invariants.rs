//! Seed-quantified invariants: whatever the seed, a full match must keep
//! its books straight.

use std::sync::Arc;

use proptest::prelude::*;

use fiefdom::{
    random_set, CardId, Catalog, Game, GameConfig, GameRng, RandomStrategy, Strategy,
};

fn play_standard_match(seed: u64) -> Game {
    let catalog = Arc::new(Catalog::standard());
    let mut sample_rng = GameRng::new(seed ^ 0xA076_1D64_78BD_642F);
    let supply = random_set(&catalog, &[], 10, &mut sample_rng);

    let strategies: Vec<Box<dyn Strategy>> = vec![
        Box::new(RandomStrategy::new(seed.wrapping_add(1))),
        Box::new(RandomStrategy::new(seed.wrapping_add(2))),
    ];

    let mut game = Game::new(
        catalog,
        supply,
        strategies,
        GameConfig::new(seed).with_round_limit(3000),
    )
    .unwrap();
    game.play().unwrap();
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn conservation_and_supply_bounds_hold(seed in 0u64..10_000) {
        let game = play_standard_match(seed);
        let state = game.state();

        let mut trashed_sum = 0;
        for player in state.players() {
            prop_assert_eq!(
                player.cards_total(),
                player.gained_total() - player.trashed_total() - player.stolen_total()
            );
            trashed_sum += player.trashed_total();
        }
        prop_assert_eq!(state.trash().len(), trashed_sum);

        for &pile in state.supply().piles() {
            prop_assert!(state.supply().remaining(pile) <= state.catalog().spec(pile).pile_size);
        }
    }

    #[test]
    fn finished_matches_report_consistent_winners(seed in 0u64..10_000) {
        let game = play_standard_match(seed);
        let stats = game.stats();

        let winners = stats.winners.clone().expect("match ran to completion");
        prop_assert!(!winners.is_empty());
        for player in &stats.players {
            prop_assert_eq!(player.leading, player.victory_points == stats.max_points);
        }
        prop_assert_eq!(
            winners.len(),
            stats.players.iter().filter(|p| p.leading).count()
        );
    }

    #[test]
    fn random_set_always_includes_base(seed in 0u64..10_000, num in 0usize..15) {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(seed);
        let set = random_set(&catalog, &[], num, &mut rng);

        let kingdom = num.min(catalog.kingdom_cards().len());
        prop_assert_eq!(set.len(), kingdom + catalog.base_cards().len());
        for &id in catalog.base_cards() {
            prop_assert!(set.contains(&id));
        }

        // no duplicates
        let mut dedup: Vec<CardId> = set.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), set.len());
    }
}
