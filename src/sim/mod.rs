//! Series runner: many independent matches, aggregated.
//!
//! Each match gets its own state, supply sample, strategy instances and
//! RNG seed derived from `base_seed + match_index`, so matches are
//! mutually independent and run in parallel by default.

use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::cards::{random_set, Catalog, CardId};
use crate::core::{EngineError, GameConfig, GameRng};
use crate::game::{Game, MatchOutcome, MatchStats};
use crate::strategy::registry;

/// Settings for a series of matches.
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    /// Number of matches to play.
    pub games: usize,

    /// Seed base; match `i` plays with `base_seed + i`.
    pub base_seed: u64,

    /// Kingdom piles per match (the base piles come on top).
    pub kingdom_size: usize,

    /// Card names forced into every supply sample.
    pub include: Vec<String>,

    /// Optional per-match round ceiling.
    pub round_limit: Option<u32>,

    /// Run matches on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 42,
            kingdom_size: 10,
            include: Vec::new(),
            round_limit: None,
            parallel: true,
        }
    }
}

/// Aggregated results of a series.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesResult {
    /// Matches played.
    pub games: usize,

    /// Wins per strategy identifier. A tied match counts as a win for
    /// every tied strategy.
    pub wins: BTreeMap<String, usize>,

    /// Matches cut off by the round limit.
    pub forced_terminations: usize,

    /// Per-match stats records, in match order.
    pub summaries: Vec<MatchStats>,
}

/// Run a series of independent matches between the named strategies.
///
/// Strategy and card names are resolved up front, so a bad identifier
/// aborts before any match starts.
pub fn run_series(
    catalog: &Arc<Catalog>,
    strategy_names: &[String],
    config: &SeriesConfig,
) -> Result<SeriesResult, EngineError> {
    if strategy_names.len() < 2 {
        return Err(EngineError::Configuration(format!(
            "need at least 2 strategies, got {}",
            strategy_names.len()
        )));
    }
    for name in strategy_names {
        registry::create_strategy(name, 0)?;
    }
    let include_ids: Vec<CardId> = config
        .include
        .iter()
        .map(|name| {
            catalog
                .by_name(name)
                .ok_or_else(|| EngineError::Configuration(format!("unknown card '{name}'")))
        })
        .collect::<Result<_, _>>()?;

    let run_one = |idx: usize| -> Result<(MatchStats, MatchOutcome), EngineError> {
        let seed = config.base_seed.wrapping_add(idx as u64);

        // separate stream for supply sampling, decoupled from the match RNG
        let mut sample_rng = GameRng::new(seed ^ 0x9E37_79B9_7F4A_7C15);
        let supply = random_set(catalog, &include_ids, config.kingdom_size, &mut sample_rng);

        let strategies = strategy_names
            .iter()
            .enumerate()
            .map(|(i, name)| registry::create_strategy(name, seed.wrapping_add(0x100 + i as u64)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut game_config = GameConfig::new(seed);
        if let Some(limit) = config.round_limit {
            game_config = game_config.with_round_limit(limit);
        }

        let mut game = Game::new(Arc::clone(catalog), supply, strategies, game_config)?;
        let outcome = game.play()?;
        Ok((game.stats(), outcome))
    };

    let results: Vec<(MatchStats, MatchOutcome)> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(run_one)
            .collect::<Result<_, _>>()?
    } else {
        (0..config.games).map(run_one).collect::<Result<_, _>>()?
    };

    let mut wins: BTreeMap<String, usize> =
        strategy_names.iter().map(|name| (name.clone(), 0)).collect();
    let mut forced_terminations = 0;
    for (stats, outcome) in &results {
        if *outcome == MatchOutcome::RoundLimit {
            forced_terminations += 1;
        }
        if let Some(winners) = &stats.winners {
            for winner in winners {
                *wins.entry(winner.clone()).or_insert(0) += 1;
            }
        }
    }

    info!(
        games = config.games,
        forced_terminations, "series finished"
    );

    Ok(SeriesResult {
        games: config.games,
        wins,
        forced_terminations,
        summaries: results.into_iter().map(|(stats, _)| stats).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_series_runs_sequentially() {
        let catalog = Arc::new(Catalog::base_only());
        let config = SeriesConfig {
            games: 3,
            base_seed: 42,
            round_limit: Some(5000),
            parallel: false,
            ..SeriesConfig::default()
        };

        let result =
            run_series(&catalog, &names(&["random", "smarter"]), &config).unwrap();

        assert_eq!(result.games, 3);
        assert_eq!(result.summaries.len(), 3);
        // every match reports winners
        for summary in &result.summaries {
            assert!(summary.winners.is_some());
        }
        // at least one win was handed out per match
        let total_wins: usize = result.wins.values().sum();
        assert!(total_wins >= 3);
    }

    #[test]
    fn test_series_runs_in_parallel() {
        let catalog = Arc::new(Catalog::standard());
        let config = SeriesConfig {
            games: 4,
            base_seed: 7,
            round_limit: Some(5000),
            parallel: true,
            ..SeriesConfig::default()
        };

        let result =
            run_series(&catalog, &names(&["big-money", "smarter"]), &config).unwrap();
        assert_eq!(result.summaries.len(), 4);
    }

    #[test]
    fn test_series_is_deterministic() {
        let catalog = Arc::new(Catalog::standard());
        let config = SeriesConfig {
            games: 2,
            base_seed: 123,
            round_limit: Some(5000),
            parallel: false,
            ..SeriesConfig::default()
        };
        let strategies = names(&["big-money", "random"]);

        let a = run_series(&catalog, &strategies, &config).unwrap();
        let b = run_series(&catalog, &strategies, &config).unwrap();
        assert_eq!(a.wins, b.wins);
    }

    #[test]
    fn test_unknown_strategy_fails_before_running() {
        let catalog = Arc::new(Catalog::base_only());
        let config = SeriesConfig::default();

        let err = run_series(&catalog, &names(&["random", "nope"]), &config).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_unknown_include_fails_before_running() {
        let catalog = Arc::new(Catalog::standard());
        let config = SeriesConfig {
            include: vec!["Platinum".to_string()],
            ..SeriesConfig::default()
        };

        let err = run_series(&catalog, &names(&["random", "random"]), &config).unwrap_err();
        match err {
            EngineError::Configuration(msg) => assert!(msg.contains("Platinum")),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_forced_terminations_counted() {
        let catalog = Arc::new(Catalog::base_only());
        let config = SeriesConfig {
            games: 2,
            base_seed: 1,
            round_limit: Some(1),
            parallel: false,
            ..SeriesConfig::default()
        };

        // one round is never enough to empty a pile
        let result = run_series(&catalog, &names(&["random", "random"]), &config).unwrap();
        assert_eq!(result.forced_terminations, 2);
    }
}
