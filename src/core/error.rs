//! Error taxonomy for the engine.
//!
//! Only two things are fatal: a strategy violating the decision contract
//! mid-match, and unresolvable configuration at setup time. Exhausted
//! supply piles and empty decks are normal game states, not errors, and
//! never surface here.

use thiserror::Error;

use super::config::Phase;

/// Fatal engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A strategy chose a card that is not in the required container, not
    /// affordable, or otherwise breaks the decision contract. The match
    /// state can no longer be trusted, so the match is aborted.
    #[error("invalid move in {phase} phase by player #{player} ({strategy}): {reason}")]
    InvalidMove {
        /// 1-based player number in turn order.
        player: u32,
        /// Identifier of the offending strategy.
        strategy: String,
        /// Phase in which the violation happened.
        phase: Phase,
        reason: String,
    },

    /// Bad setup: unknown strategy or card-set name, missing required
    /// supply piles, too few players. Raised before any match starts.
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = EngineError::InvalidMove {
            player: 2,
            strategy: "random".to_string(),
            phase: Phase::Buy,
            reason: "cannot afford Province".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("player #2"));
        assert!(msg.contains("buy phase"));
        assert!(msg.contains("random"));
    }

    #[test]
    fn test_configuration_message() {
        let err = EngineError::Configuration("unknown strategy 'foo'".to_string());
        assert_eq!(err.to_string(), "configuration error: unknown strategy 'foo'");
    }
}
