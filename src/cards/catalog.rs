//! Card catalog: the registry of card definitions.
//!
//! The catalog owns every `CardSpec` in play and hands out dense `CardId`s.
//! The base piles (treasures, victory cards, Curse) are always registered
//! first, at fixed well-known ids; kingdom cards follow in registration
//! order. `random_set` assembles a supply selection from it.

use rustc_hash::FxHashMap;

use crate::core::GameRng;

use super::definition::{CardId, CardSpec};
use super::sets;

/// Registry of card definitions for one simulation.
///
/// ## Example
///
/// ```
/// use fiefdom::cards::{Catalog, sets::base};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.by_name("Copper"), Some(base::COPPER));
/// assert_eq!(catalog.spec(base::PROVINCE).cost, 8);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    specs: Vec<CardSpec>,
    by_name: FxHashMap<String, CardId>,
    base: Vec<CardId>,
    kingdom: Vec<CardId>,
}

impl Catalog {
    /// Catalog holding only the base piles - a null kingdom set.
    #[must_use]
    pub fn base_only() -> Self {
        let mut catalog = Self {
            specs: Vec::new(),
            by_name: FxHashMap::default(),
            base: Vec::new(),
            kingdom: Vec::new(),
        };
        for spec in sets::base::specs() {
            let id = catalog.insert(spec);
            catalog.base.push(id);
        }
        debug_assert_eq!(catalog.by_name("Province"), Some(sets::base::PROVINCE));
        catalog
    }

    /// Catalog holding the base piles plus the standard kingdom set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::base_only();
        for spec in sets::kingdom::specs() {
            catalog.register(spec);
        }
        catalog
    }

    /// Register a kingdom card and return its assigned id.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, spec: CardSpec) -> CardId {
        let id = self.insert(spec);
        self.kingdom.push(id);
        id
    }

    fn insert(&mut self, spec: CardSpec) -> CardId {
        if self.by_name.contains_key(&spec.name) {
            panic!("card '{}' already registered", spec.name);
        }
        let id = CardId::new(self.specs.len() as u16);
        self.by_name.insert(spec.name.clone(), id);
        self.specs.push(spec);
        id
    }

    /// Look up a definition, panicking on an id from another catalog.
    #[must_use]
    pub fn spec(&self, id: CardId) -> &CardSpec {
        &self.specs[id.index()]
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardSpec> {
        self.specs.get(id.index())
    }

    /// Look up a card id by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Check whether an id belongs to this catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.specs.len()
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over all (id, definition) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CardSpec)> {
        self.specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (CardId::new(i as u16), spec))
    }

    /// The base piles, in registration order.
    #[must_use]
    pub fn base_cards(&self) -> &[CardId] {
        &self.base
    }

    /// The kingdom cards, in registration order.
    #[must_use]
    pub fn kingdom_cards(&self) -> &[CardId] {
        &self.kingdom
    }
}

/// Assemble a supply selection: the fixed `include` cards first, then a
/// random sample of the remaining kingdom catalog to reach `num` cards,
/// then the base piles appended unconditionally.
#[must_use]
pub fn random_set(
    catalog: &Catalog,
    include: &[CardId],
    num: usize,
    rng: &mut GameRng,
) -> Vec<CardId> {
    let mut cards: Vec<CardId> = include.to_vec();

    if cards.len() < num {
        let mut pool: Vec<CardId> = catalog
            .kingdom_cards()
            .iter()
            .copied()
            .filter(|id| !cards.contains(id))
            .collect();
        rng.shuffle(&mut pool);
        pool.truncate(num - cards.len());
        cards.extend(pool);
    }

    cards.extend_from_slice(catalog.base_cards());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::sets::base;

    #[test]
    fn test_base_ids_are_stable() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.by_name("Copper"), Some(base::COPPER));
        assert_eq!(catalog.by_name("Silver"), Some(base::SILVER));
        assert_eq!(catalog.by_name("Gold"), Some(base::GOLD));
        assert_eq!(catalog.by_name("Estate"), Some(base::ESTATE));
        assert_eq!(catalog.by_name("Duchy"), Some(base::DUCHY));
        assert_eq!(catalog.by_name("Province"), Some(base::PROVINCE));
        assert_eq!(catalog.by_name("Curse"), Some(base::CURSE));
    }

    #[test]
    fn test_standard_has_kingdom() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.base_cards().len(), 7);
        assert_eq!(catalog.kingdom_cards().len(), 20);
        assert_eq!(catalog.len(), 27);
        assert!(catalog.by_name("Smithy").is_some());
        assert!(catalog.by_name("Throne Room").is_some());
    }

    #[test]
    fn test_base_only_has_no_kingdom() {
        let catalog = Catalog::base_only();
        assert!(catalog.kingdom_cards().is_empty());
        assert_eq!(catalog.by_name("Smithy"), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = Catalog::base_only();
        catalog.register(CardSpec::action("Copper", 1, 10));
    }

    #[test]
    fn test_random_set_size_and_base() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);

        let set = random_set(&catalog, &[], 10, &mut rng);
        assert_eq!(set.len(), 17); // 10 kingdom + 7 base

        for &id in catalog.base_cards() {
            assert!(set.contains(&id));
        }
    }

    #[test]
    fn test_random_set_keeps_includes_first() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let smithy = catalog.by_name("Smithy").unwrap();
        let witch = catalog.by_name("Witch").unwrap();

        let set = random_set(&catalog, &[smithy, witch], 10, &mut rng);
        assert_eq!(set[0], smithy);
        assert_eq!(set[1], witch);
        assert_eq!(set.len(), 17);
        // no duplicate of the included cards in the sampled tail
        assert_eq!(set.iter().filter(|&&id| id == smithy).count(), 1);
    }

    #[test]
    fn test_random_set_null_kingdom() {
        let catalog = Catalog::base_only();
        let mut rng = GameRng::new(42);

        let set = random_set(&catalog, &[], 10, &mut rng);
        assert_eq!(set.len(), 7); // base only - nothing to sample
    }
}
