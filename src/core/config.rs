//! Match configuration and turn-phase identifiers.

use serde::{Deserialize, Serialize};

/// The four phases of a player's turn, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Action,
    Treasure,
    Buy,
    Cleanup,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Action => "action",
            Phase::Treasure => "treasure",
            Phase::Buy => "buy",
            Phase::Cleanup => "cleanup",
        };
        write!(f, "{name}")
    }
}

/// Per-match configuration.
///
/// The seed drives every shuffle, draw and random tie-break in the match.
/// The round limit is a safety valve against strategies that never deplete
/// the supply; reaching it ends the match with a forced-termination outcome.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the match RNG.
    pub seed: u64,

    /// Maximum number of completed rounds before the match is cut off.
    /// `None` means no limit.
    pub round_limit: Option<u32>,
}

impl GameConfig {
    /// Create a configuration with the given seed and no round limit.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            round_limit: None,
        }
    }

    /// Set a round limit (builder pattern).
    #[must_use]
    pub const fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(format!("{}", Phase::Action), "action");
        assert_eq!(format!("{}", Phase::Cleanup), "cleanup");
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(7).with_round_limit(100);
        assert_eq!(config.seed, 7);
        assert_eq!(config.round_limit, Some(100));

        let plain = GameConfig::new(7);
        assert_eq!(plain.round_limit, None);
    }
}
