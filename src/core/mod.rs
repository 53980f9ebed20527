//! Core building blocks: deterministic RNG, match configuration, errors.
//!
//! Everything in here is independent of the card catalog and the turn
//! engine; the rest of the crate builds on these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Phase};
pub use error::EngineError;
pub use rng::GameRng;
