//! The shared supply: how many copies of each pile remain purchasable.

use rustc_hash::FxHashMap;

use crate::cards::sets::base::PROVINCE;
use crate::cards::{Catalog, CardId};

/// Mapping from card variant to remaining pile count.
///
/// Counts only ever decrease (via gain) and never go below zero. The pile
/// list keeps its construction order because effect candidate ranking
/// breaks cost ties by input order.
#[derive(Clone, Debug)]
pub struct Supply {
    piles: Vec<CardId>,
    counts: FxHashMap<CardId, u32>,
}

impl Supply {
    /// Stock the supply with the given piles at their base sizes.
    ///
    /// Duplicate entries are kept once, at their first position.
    #[must_use]
    pub fn new(catalog: &Catalog, variants: &[CardId]) -> Self {
        let mut piles = Vec::with_capacity(variants.len());
        let mut counts = FxHashMap::default();

        for &id in variants {
            if counts.contains_key(&id) {
                continue;
            }
            counts.insert(id, catalog.spec(id).pile_size);
            piles.push(id);
        }

        Self { piles, counts }
    }

    /// Remaining count for a pile; 0 if the variant was never stocked.
    #[must_use]
    pub fn remaining(&self, id: CardId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Take one card from a pile. Returns false (and changes nothing) if
    /// the pile is already empty or was never stocked.
    pub fn decrement(&mut self, id: CardId) -> bool {
        match self.counts.get_mut(&id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// The stocked piles, in construction order.
    #[must_use]
    pub fn piles(&self) -> &[CardId] {
        &self.piles
    }

    /// Check whether a variant was stocked at all.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.counts.contains_key(&id)
    }

    /// Number of stocked piles that have run out.
    #[must_use]
    pub fn exhausted_piles(&self) -> usize {
        self.piles.iter().filter(|id| self.remaining(**id) == 0).count()
    }

    /// The end-of-game condition: the Province pile is empty, or at least
    /// three piles are. The turn engine evaluates this once per completed
    /// round, not continuously.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.remaining(PROVINCE) == 0 || self.exhausted_piles() >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::sets::base::{COPPER, CURSE, DUCHY, ESTATE, GOLD, SILVER};

    fn full_supply() -> (Catalog, Supply) {
        let catalog = Catalog::base_only();
        let variants: Vec<CardId> = catalog.base_cards().to_vec();
        let supply = Supply::new(&catalog, &variants);
        (catalog, supply)
    }

    #[test]
    fn test_initial_counts() {
        let (_, supply) = full_supply();
        assert_eq!(supply.remaining(COPPER), 60);
        assert_eq!(supply.remaining(PROVINCE), 12);
        assert_eq!(supply.remaining(CURSE), 30);
    }

    #[test]
    fn test_unstocked_is_zero() {
        let catalog = Catalog::standard();
        let supply = Supply::new(&catalog, &[COPPER]);
        let smithy = catalog.by_name("Smithy").unwrap();
        assert_eq!(supply.remaining(smithy), 0);
        assert!(!supply.contains(smithy));
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let catalog = Catalog::base_only();
        let mut supply = Supply::new(&catalog, &[PROVINCE]);

        for _ in 0..12 {
            assert!(supply.decrement(PROVINCE));
        }
        assert_eq!(supply.remaining(PROVINCE), 0);
        assert!(!supply.decrement(PROVINCE));
        assert_eq!(supply.remaining(PROVINCE), 0);
    }

    #[test]
    fn test_game_over_on_empty_provinces() {
        let (_, mut supply) = full_supply();
        assert!(!supply.is_game_over());

        for _ in 0..12 {
            supply.decrement(PROVINCE);
        }
        assert!(supply.is_game_over());
    }

    #[test]
    fn test_game_over_on_three_empty_piles() {
        let (_, mut supply) = full_supply();

        for _ in 0..12 {
            supply.decrement(ESTATE);
        }
        for _ in 0..12 {
            supply.decrement(DUCHY);
        }
        assert_eq!(supply.exhausted_piles(), 2);
        assert!(!supply.is_game_over());

        for _ in 0..30 {
            supply.decrement(CURSE);
        }
        assert_eq!(supply.exhausted_piles(), 3);
        assert!(supply.is_game_over());
    }

    #[test]
    fn test_piles_keep_input_order() {
        let catalog = Catalog::base_only();
        let supply = Supply::new(&catalog, &[GOLD, SILVER, COPPER, GOLD]);
        assert_eq!(supply.piles(), &[GOLD, SILVER, COPPER]);
        assert_eq!(supply.remaining(GOLD), 30);
    }
}
