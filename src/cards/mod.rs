//! Card catalog: definitions, the registry, and the shipped card sets.

pub mod catalog;
pub mod definition;
pub mod sets;

pub use catalog::{random_set, Catalog};
pub use definition::{CardEffect, CardId, CardSpec, EffectParams, Scoring, Tags};
