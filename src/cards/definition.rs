//! Card definitions - static card data.
//!
//! A `CardSpec` holds the immutable properties of a card variant: cost,
//! pile size, tags, the static bonuses granted when it is played, how it
//! scores, and which effect it resolves. Decks, hands and piles hold plain
//! `CardId`s; there is no per-card instance state.

use serde::{Deserialize, Serialize};

/// Identifier of a card variant - a dense index into the [`Catalog`].
///
/// [`Catalog`]: super::catalog::Catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Categorical card tags, stored as a small bitset.
///
/// A card can carry several tags at once (e.g. Thief is both an action and
/// an attack).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tags(u8);

impl Tags {
    pub const NONE: Tags = Tags(0);
    pub const TREASURE: Tags = Tags(1);
    pub const ACTION: Tags = Tags(1 << 1);
    pub const VICTORY: Tags = Tags(1 << 2);
    pub const CURSE: Tags = Tags(1 << 3);
    pub const ATTACK: Tags = Tags(1 << 4);
    pub const REACTION: Tags = Tags(1 << 5);

    /// Check whether all of `other`'s tags are present.
    #[must_use]
    pub const fn contains(self, other: Tags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Tags {
    type Output = Tags;

    fn bitor(self, rhs: Tags) -> Tags {
        Tags(self.0 | rhs.0)
    }
}

/// How a card contributes to its owner's victory points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scoring {
    /// A fixed number of points (possibly zero or negative).
    Flat(i32),
    /// One point per ten cards the owner has in total, rounded down.
    PerTenCards,
}

/// The behavior a card resolves when played, beyond its static bonuses.
///
/// This is the closed set of effect variants the resolver understands; the
/// catalog maps each card to one of them. Variants carry their tuning
/// knobs (budgets, counts) so closely related cards can share an arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    /// Nothing beyond the static bonuses.
    None,
    /// Discard the chosen hand cards, then draw as many.
    DiscardForDraws,
    /// Move the entire draw pile to the discard pile (optional).
    DiscardDrawPile,
    /// Trash the chosen hand cards.
    TrashChosen,
    /// Every other player draws this many cards.
    OthersDraw(u32),
    /// Trash the played card itself, then gain a chosen card within budget.
    TrashSelfGain { max_cost: u32 },
    /// Trash a treasure from hand, gain a treasure costing up to `bonus`
    /// more, straight to hand.
    UpgradeTreasure { bonus: u32 },
    /// Trash a Copper from hand in exchange for bonus coins this turn.
    TrashCopperForCoins { coins: u32 },
    /// Trash a hand card, gain a card costing up to `bonus` more.
    Upgrade { bonus: u32 },
    /// Reveal cards until `count` treasures turn up; treasures go to hand,
    /// everything else is discarded.
    RevealTreasures { count: u32 },
    /// Attack: reveal two cards from each opponent and steal or trash one.
    StealTreasures,
    /// Play a chosen action card from hand twice.
    PlayTwice,
    /// Attack: every other player gains a Curse while any remain.
    CurseOthers,
    /// Gain a card costing at most `max_cost`.
    GainCard { max_cost: u32 },
}

/// Static card definition.
#[derive(Clone, Debug)]
pub struct CardSpec {
    /// Card name, unique within a catalog.
    pub name: String,

    /// Purchase cost.
    pub cost: u32,

    /// Number of copies the supply starts with.
    pub pile_size: u32,

    /// Categorical tags.
    pub tags: Tags,

    /// Bonus actions granted on play.
    pub actions: u32,

    /// Bonus buys granted on play.
    pub buys: u32,

    /// Cards drawn on play.
    pub cards: u32,

    /// Coins contributed while in play.
    pub money: u32,

    /// Victory scoring rule.
    pub scoring: Scoring,

    /// Effect resolved on play.
    pub effect: CardEffect,
}

impl CardSpec {
    /// Create a card with the given tags and no bonuses or effect.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, pile_size: u32, tags: Tags) -> Self {
        Self {
            name: name.into(),
            cost,
            pile_size,
            tags,
            actions: 0,
            buys: 0,
            cards: 0,
            money: 0,
            scoring: Scoring::Flat(0),
            effect: CardEffect::None,
        }
    }

    /// Shorthand for a treasure card.
    #[must_use]
    pub fn treasure(name: impl Into<String>, cost: u32, pile_size: u32, money: u32) -> Self {
        Self::new(name, cost, pile_size, Tags::TREASURE).with_money(money)
    }

    /// Shorthand for a victory card with flat points.
    #[must_use]
    pub fn victory(name: impl Into<String>, cost: u32, pile_size: u32, points: i32) -> Self {
        Self::new(name, cost, pile_size, Tags::VICTORY).with_scoring(Scoring::Flat(points))
    }

    /// Shorthand for an action card.
    #[must_use]
    pub fn action(name: impl Into<String>, cost: u32, pile_size: u32) -> Self {
        Self::new(name, cost, pile_size, Tags::ACTION)
    }

    /// Add tags (builder pattern).
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = self.tags | tags;
        self
    }

    /// Set bonus actions.
    #[must_use]
    pub fn with_actions(mut self, actions: u32) -> Self {
        self.actions = actions;
        self
    }

    /// Set bonus buys.
    #[must_use]
    pub fn with_buys(mut self, buys: u32) -> Self {
        self.buys = buys;
        self
    }

    /// Set cards drawn on play.
    #[must_use]
    pub fn with_cards(mut self, cards: u32) -> Self {
        self.cards = cards;
        self
    }

    /// Set coins contributed while in play.
    #[must_use]
    pub fn with_money(mut self, money: u32) -> Self {
        self.money = money;
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the play effect.
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.tags.contains(Tags::TREASURE)
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.tags.contains(Tags::ACTION)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.tags.contains(Tags::VICTORY)
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.tags.contains(Tags::ATTACK)
    }

    #[must_use]
    pub fn is_reaction(&self) -> bool {
        self.tags.contains(Tags::REACTION)
    }
}

/// Parameters a strategy supplies alongside a card it wants to play.
///
/// Effects that involve choices (what to discard, trash, gain, or replay)
/// read their targets from here. Every field is optional; effects fall
/// back to their documented default-selection policy when a field is
/// empty. Replaces per-invocation parameter objects with a plain value.
#[derive(Clone, Debug, Default)]
pub struct EffectParams {
    /// Cards to discard from hand (discard-for-draws effects).
    pub discard: Vec<CardId>,

    /// Cards to trash from hand. Upgrade effects use the first entry;
    /// the steal effect reads this as its priority list.
    pub trash: Vec<CardId>,

    /// Preferred gain candidates, in priority order. The steal effect
    /// reads this as the set of cards worth keeping.
    pub gain: Vec<CardId>,

    /// Action card to replay (play-twice effects).
    pub play: Option<CardId>,

    /// Nested parameters for each repeated play, in order.
    pub repeats: Vec<EffectParams>,

    /// Keep the draw pile where it is instead of discarding it
    /// (deck-discarding effects default to discarding).
    pub keep_deck: bool,
}

impl EffectParams {
    /// Parameters that trash the given card.
    #[must_use]
    pub fn trashing(card: CardId) -> Self {
        Self {
            trash: vec![card],
            ..Self::default()
        }
    }

    /// Parameters that prefer gaining the given card.
    #[must_use]
    pub fn gaining(card: CardId) -> Self {
        Self {
            gain: vec![card],
            ..Self::default()
        }
    }

    /// Parameters that replay the given action card.
    #[must_use]
    pub fn replaying(card: CardId) -> Self {
        Self {
            play: Some(card),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_tags_contains() {
        let tags = Tags::ACTION | Tags::ATTACK;
        assert!(tags.contains(Tags::ACTION));
        assert!(tags.contains(Tags::ATTACK));
        assert!(tags.contains(Tags::ACTION | Tags::ATTACK));
        assert!(!tags.contains(Tags::TREASURE));
    }

    #[test]
    fn test_spec_builder() {
        let spec = CardSpec::action("Market", 5, 10)
            .with_actions(1)
            .with_buys(1)
            .with_cards(1)
            .with_money(1);

        assert_eq!(spec.name, "Market");
        assert_eq!(spec.cost, 5);
        assert!(spec.is_action());
        assert!(!spec.is_treasure());
        assert_eq!(spec.actions, 1);
        assert_eq!(spec.money, 1);
        assert_eq!(spec.effect, CardEffect::None);
    }

    #[test]
    fn test_treasure_shorthand() {
        let spec = CardSpec::treasure("Silver", 3, 40, 2);
        assert!(spec.is_treasure());
        assert_eq!(spec.money, 2);
        assert_eq!(spec.scoring, Scoring::Flat(0));
    }

    #[test]
    fn test_victory_shorthand() {
        let spec = CardSpec::victory("Duchy", 5, 12, 3);
        assert!(spec.is_victory());
        assert_eq!(spec.scoring, Scoring::Flat(3));
    }

    #[test]
    fn test_effect_params_helpers() {
        let id = CardId::new(3);
        assert_eq!(EffectParams::trashing(id).trash, vec![id]);
        assert_eq!(EffectParams::gaining(id).gain, vec![id]);
        assert_eq!(EffectParams::replaying(id).play, Some(id));
        assert!(!EffectParams::default().keep_deck);
    }
}
