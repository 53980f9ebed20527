//! Sample policies assembled from decision rules.
//!
//! These mirror the classic big-money family: mostly treasure-driven
//! buying with a few engine cards layered on top. They are ordinary
//! users of the strategy contract, not part of the engine.

use std::cmp::Reverse;

use crate::cards::sets::base::{COPPER, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::cards::CardId;
use crate::core::GameRng;
use crate::game::{GameState, PlayerId};

use super::rules::{Decision, Rule, RuleChain};
use super::ActionChoice;

/// All non-empty piles the player can pay for right now.
fn affordable(state: &GameState, me: PlayerId) -> Vec<CardId> {
    let money = state.money(me);
    state
        .supply()
        .piles()
        .iter()
        .copied()
        .filter(|&c| state.supply().remaining(c) > 0 && state.catalog().spec(c).cost <= money)
        .collect()
}

/// Most expensive affordable pile, cost ties broken at random.
fn greedy_buy(state: &GameState, me: PlayerId, rng: &mut GameRng) -> Option<CardId> {
    let mut buyable = affordable(state, me);
    rng.shuffle(&mut buyable);
    buyable.sort_by_key(|&c| Reverse(state.catalog().spec(c).cost));
    buyable.first().copied()
}

/// Play a random action card from hand.
pub struct RandomActionRule;

impl Rule for RandomActionRule {
    fn action(
        &mut self,
        me: PlayerId,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Decision<ActionChoice> {
        let playable: Vec<CardId> = state
            .player(me)
            .hand()
            .iter()
            .copied()
            .filter(|&c| state.catalog().spec(c).is_action())
            .collect();
        match rng.choose(&playable).copied() {
            Some(card) => Decision::Choose(ActionChoice::plain(card)),
            None => Decision::Pass,
        }
    }
}

/// Play the action promising the most (actions, money, cards, buys), in
/// that order of importance; ties broken at random.
pub struct PriorityActionRule;

impl Rule for PriorityActionRule {
    fn action(
        &mut self,
        me: PlayerId,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Decision<ActionChoice> {
        let mut playable: Vec<CardId> = state
            .player(me)
            .hand()
            .iter()
            .copied()
            .filter(|&c| state.catalog().spec(c).is_action())
            .collect();
        rng.shuffle(&mut playable);
        playable.sort_by_key(|&c| {
            let spec = state.catalog().spec(c);
            Reverse((spec.actions, spec.money, spec.cards, spec.buys))
        });
        match playable.first().copied() {
            Some(card) => Decision::Choose(ActionChoice::plain(card)),
            None => Decision::Pass,
        }
    }
}

/// Play the first treasure in hand.
pub struct FirstTreasureRule;

impl Rule for FirstTreasureRule {
    fn treasure(&mut self, me: PlayerId, state: &GameState, _rng: &mut GameRng) -> Decision<CardId> {
        let first = state
            .player(me)
            .hand()
            .iter()
            .copied()
            .find(|&c| state.catalog().spec(c).is_treasure());
        match first {
            Some(card) => Decision::Choose(card),
            None => Decision::Pass,
        }
    }
}

/// Greedy buying, but never Copper, and no Estates while the Province
/// pile is still deep.
pub struct SmartBuyRule;

impl Rule for SmartBuyRule {
    fn buy(&mut self, me: PlayerId, state: &GameState, rng: &mut GameRng) -> Decision<CardId> {
        match greedy_buy(state, me, rng) {
            None => Decision::Pass,
            Some(card) if card == COPPER => Decision::Pass,
            Some(card) if card == ESTATE && state.supply().remaining(PROVINCE) > 4 => Decision::Pass,
            Some(card) => Decision::Choose(card),
        }
    }
}

/// Buy only from a fixed shortlist, most expensive affordable first.
pub struct ShortlistBuyRule {
    shortlist: Vec<CardId>,
}

impl ShortlistBuyRule {
    /// The classic big-money shortlist: victory cards and real money.
    #[must_use]
    pub fn big_money() -> Self {
        Self {
            shortlist: vec![PROVINCE, DUCHY, ESTATE, GOLD, SILVER],
        }
    }
}

impl Rule for ShortlistBuyRule {
    fn buy(&mut self, me: PlayerId, state: &GameState, _rng: &mut GameRng) -> Decision<CardId> {
        let mut buyable: Vec<CardId> = affordable(state, me)
            .into_iter()
            .filter(|c| self.shortlist.contains(c))
            .collect();
        buyable.sort_by_key(|&c| Reverse(state.catalog().spec(c).cost));
        match buyable.first().copied() {
            Some(card) => Decision::Choose(card),
            None => Decision::Pass,
        }
    }
}

/// Buy a specific kingdom card inside a money window, up to an owned cap;
/// otherwise delegate.
///
/// The card is looked up by name per decision so the rule stays inert
/// when the card is not part of this match's supply.
pub struct CappedBuyRule {
    card: &'static str,
    min_money: u32,
    max_money: u32,
    cap: usize,
}

impl CappedBuyRule {
    #[must_use]
    pub fn new(card: &'static str, min_money: u32, max_money: u32, cap: usize) -> Self {
        Self {
            card,
            min_money,
            max_money,
            cap,
        }
    }
}

impl Rule for CappedBuyRule {
    fn buy(&mut self, me: PlayerId, state: &GameState, _rng: &mut GameRng) -> Decision<CardId> {
        let Some(id) = state.catalog().by_name(self.card) else {
            return Decision::Next;
        };
        let money = state.money(me);
        if (self.min_money..=self.max_money).contains(&money)
            && state.supply().remaining(id) > 0
            && state.player(me).card_count(id) < self.cap
        {
            Decision::Choose(id)
        } else {
            Decision::Next
        }
    }
}

/// Play Mine to upgrade Silver into Gold, or Copper into Silver;
/// otherwise delegate.
pub struct MineUpgradeRule;

impl Rule for MineUpgradeRule {
    fn action(
        &mut self,
        me: PlayerId,
        state: &GameState,
        _rng: &mut GameRng,
    ) -> Decision<ActionChoice> {
        let Some(mine) = state.catalog().by_name("Mine") else {
            return Decision::Next;
        };
        let hand = state.player(me).hand();
        if !hand.contains(&mine) {
            return Decision::Next;
        }
        let target = if hand.contains(&SILVER) {
            SILVER
        } else if hand.contains(&COPPER) {
            COPPER
        } else {
            return Decision::Next;
        };
        Decision::Choose(ActionChoice::with_params(
            mine,
            crate::cards::EffectParams::trashing(target),
        ))
    }
}

/// Random actions, first treasures, buys filtered for value.
#[must_use]
pub fn smarter(seed: u64) -> RuleChain {
    RuleChain::new("smarter", seed)
        .with_rule(PriorityActionRule)
        .with_rule(FirstTreasureRule)
        .with_rule(SmartBuyRule)
}

/// Buy money and victory cards, nothing else.
#[must_use]
pub fn big_money(seed: u64) -> RuleChain {
    RuleChain::new("big-money", seed)
        .with_rule(RandomActionRule)
        .with_rule(FirstTreasureRule)
        .with_rule(ShortlistBuyRule::big_money())
}

/// Big money plus a few Smithies for draw.
#[must_use]
pub fn big_money_smithy(seed: u64) -> RuleChain {
    RuleChain::new("big-money-smithy", seed)
        .with_rule(PriorityActionRule)
        .with_rule(FirstTreasureRule)
        .with_rule(CappedBuyRule::new("Smithy", 4, 5, 3))
        .with_rule(ShortlistBuyRule::big_money())
}

/// Big money plus a few Witches for the attack.
#[must_use]
pub fn big_money_witch(seed: u64) -> RuleChain {
    RuleChain::new("big-money-witch", seed)
        .with_rule(PriorityActionRule)
        .with_rule(FirstTreasureRule)
        .with_rule(CappedBuyRule::new("Witch", 5, 5, 3))
        .with_rule(ShortlistBuyRule::big_money())
}

/// Big money plus Mines to upgrade the treasure base.
#[must_use]
pub fn big_money_miner(seed: u64) -> RuleChain {
    RuleChain::new("big-money-miner", seed)
        .with_rule(MineUpgradeRule)
        .with_rule(RandomActionRule)
        .with_rule(FirstTreasureRule)
        .with_rule(CappedBuyRule::new("Mine", 5, 7, 3))
        .with_rule(ShortlistBuyRule::big_money())
}
