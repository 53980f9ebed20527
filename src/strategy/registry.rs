//! Name-based resolution of strategies and card sets.
//!
//! The CLI (and any other embedding) refers to policies and catalogs by
//! registry key; unknown names fail fast at setup time with the offending
//! identifier, before any match starts.

use crate::cards::Catalog;
use crate::core::EngineError;

use super::{samples, RandomStrategy, Strategy};

/// Registry keys of the shipped strategies.
pub const STRATEGIES: &[&str] = &[
    "random",
    "smarter",
    "big-money",
    "big-money-smithy",
    "big-money-witch",
    "big-money-miner",
];

/// Registry keys of the shipped card sets.
pub const SETS: &[&str] = &["standard", "base"];

/// Instantiate a strategy by registry key, seeding its private RNG.
pub fn create_strategy(name: &str, seed: u64) -> Result<Box<dyn Strategy>, EngineError> {
    match name {
        "random" => Ok(Box::new(RandomStrategy::new(seed))),
        "smarter" => Ok(Box::new(samples::smarter(seed))),
        "big-money" => Ok(Box::new(samples::big_money(seed))),
        "big-money-smithy" => Ok(Box::new(samples::big_money_smithy(seed))),
        "big-money-witch" => Ok(Box::new(samples::big_money_witch(seed))),
        "big-money-miner" => Ok(Box::new(samples::big_money_miner(seed))),
        _ => Err(EngineError::Configuration(format!(
            "unknown strategy '{name}' (available: {})",
            STRATEGIES.join(", ")
        ))),
    }
}

/// Build a card catalog by registry key.
pub fn create_catalog(name: &str) -> Result<Catalog, EngineError> {
    match name {
        "standard" => Ok(Catalog::standard()),
        "base" => Ok(Catalog::base_only()),
        _ => Err(EngineError::Configuration(format!(
            "unknown card set '{name}' (available: {})",
            SETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_strategy_resolves() {
        for name in STRATEGIES {
            let strategy = create_strategy(name, 42).unwrap();
            assert_eq!(strategy.name(), *name);
        }
    }

    #[test]
    fn test_unknown_strategy_is_configuration_error() {
        let err = create_strategy("galaxy-brain", 42).unwrap_err();
        match err {
            EngineError::Configuration(msg) => assert!(msg.contains("galaxy-brain")),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_every_listed_set_resolves() {
        for name in SETS {
            assert!(create_catalog(name).is_ok());
        }
    }

    #[test]
    fn test_unknown_set_is_configuration_error() {
        assert!(matches!(
            create_catalog("promo"),
            Err(EngineError::Configuration(_))
        ));
    }
}
