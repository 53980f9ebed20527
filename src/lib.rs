//! # fiefdom
//!
//! A simulator for multi-player deck-building card games, built to pit
//! automated play policies against each other over many independent
//! matches.
//!
//! ## Design Principles
//!
//! 1. **The engine trusts nobody with mutation**: strategies read
//!    `GameState` and answer decisions; every state change flows through
//!    the turn engine and the effect resolver.
//!
//! 2. **Explicit randomness**: no global RNG. Each match (and each
//!    policy) owns a seeded `GameRng`, so runs are reproducible and
//!    matches parallelize safely.
//!
//! 3. **Closed effect dispatch**: card behavior is a `CardEffect` variant
//!    in the catalog, resolved by one module - no per-card type hierarchy.
//!
//! ## Modules
//!
//! - `core`: RNG, match configuration, error taxonomy
//! - `cards`: card definitions, the catalog, shipped sets, supply sampling
//! - `game`: supply, player deck state, effect resolution, turn engine
//! - `strategy`: the decision contract, baseline policy, rule chains
//! - `sim`: multi-match series runner

pub mod cards;
pub mod core;
pub mod game;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::cards::{random_set, Catalog, CardEffect, CardId, CardSpec, EffectParams, Scoring, Tags};
pub use crate::core::{EngineError, GameConfig, GameRng, Phase};
pub use crate::game::{Game, GameState, MatchOutcome, MatchStats, Player, PlayerId, PlayerSummary, Supply};
pub use crate::sim::{run_series, SeriesConfig, SeriesResult};
pub use crate::strategy::{ActionChoice, Decision, RandomStrategy, Rule, RuleChain, Strategy};
