//! The base piles present in every supply: treasures, victory cards, Curse.
//!
//! These are registered first in every catalog, so their ids are fixed and
//! exported as constants - effect resolution and policies reference them
//! directly.

use crate::cards::definition::{CardId, CardSpec, Scoring, Tags};

pub const COPPER: CardId = CardId::new(0);
pub const SILVER: CardId = CardId::new(1);
pub const GOLD: CardId = CardId::new(2);
pub const ESTATE: CardId = CardId::new(3);
pub const DUCHY: CardId = CardId::new(4);
pub const PROVINCE: CardId = CardId::new(5);
pub const CURSE: CardId = CardId::new(6);

/// Definitions in registration order; must match the constants above.
#[must_use]
pub(crate) fn specs() -> Vec<CardSpec> {
    vec![
        CardSpec::treasure("Copper", 0, 60, 1),
        CardSpec::treasure("Silver", 3, 40, 2),
        CardSpec::treasure("Gold", 6, 30, 3),
        CardSpec::victory("Estate", 2, 12, 1),
        CardSpec::victory("Duchy", 5, 12, 3),
        CardSpec::victory("Province", 8, 12, 6),
        CardSpec::new("Curse", 0, 30, Tags::CURSE).with_scoring(Scoring::Flat(-1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_order_matches_constants() {
        let specs = specs();
        assert_eq!(specs[COPPER.index()].name, "Copper");
        assert_eq!(specs[SILVER.index()].name, "Silver");
        assert_eq!(specs[GOLD.index()].name, "Gold");
        assert_eq!(specs[ESTATE.index()].name, "Estate");
        assert_eq!(specs[DUCHY.index()].name, "Duchy");
        assert_eq!(specs[PROVINCE.index()].name, "Province");
        assert_eq!(specs[CURSE.index()].name, "Curse");
    }

    #[test]
    fn test_curse_is_negative() {
        let specs = specs();
        let curse = &specs[CURSE.index()];
        assert_eq!(curse.scoring, Scoring::Flat(-1));
        assert!(curse.tags.contains(Tags::CURSE));
        assert!(!curse.is_victory());
    }
}
