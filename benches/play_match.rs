use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use fiefdom::{Catalog, Game, GameConfig, RandomStrategy, Strategy};

fn bench_full_match(c: &mut Criterion) {
    let base = Arc::new(Catalog::base_only());
    let standard = Arc::new(Catalog::standard());

    c.bench_function("base_set_match", |b| {
        b.iter(|| {
            let strategies: Vec<Box<dyn Strategy>> = vec![
                Box::new(RandomStrategy::new(1)),
                Box::new(RandomStrategy::new(2)),
            ];
            let mut game = Game::new(
                Arc::clone(&base),
                base.base_cards().to_vec(),
                strategies,
                GameConfig::new(42).with_round_limit(5000),
            )
            .unwrap();
            game.play().unwrap();
            game.stats()
        })
    });

    c.bench_function("standard_kingdom_match", |b| {
        b.iter(|| {
            let strategies: Vec<Box<dyn Strategy>> = vec![
                Box::new(RandomStrategy::new(1)),
                Box::new(RandomStrategy::new(2)),
            ];
            let supply = standard.iter().map(|(id, _)| id).collect();
            let mut game = Game::new(
                Arc::clone(&standard),
                supply,
                strategies,
                GameConfig::new(42).with_round_limit(5000),
            )
            .unwrap();
            game.play().unwrap();
            game.stats()
        })
    });
}

criterion_group!(benches, bench_full_match);
criterion_main!(benches);
