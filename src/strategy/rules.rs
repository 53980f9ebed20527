//! Decision-rule composition.
//!
//! Instead of policy inheritance, a strategy is an ordered chain of
//! rules. Each rule may answer a decision point, end the phase, or
//! delegate to the next rule - the override-and-fall-back pattern
//! without the diamonds.

use crate::cards::CardId;
use crate::core::GameRng;
use crate::game::{GameState, PlayerId};

use super::{ActionChoice, Strategy};

/// A rule's verdict at a decision point.
#[derive(Clone, Debug)]
pub enum Decision<T> {
    /// Answer with this choice.
    Choose(T),
    /// Answer "no choice": the phase ends now.
    Pass,
    /// No opinion; ask the next rule in the chain.
    Next,
}

/// One link in a decision chain. Every method defaults to delegating.
pub trait Rule: Send {
    fn action(
        &mut self,
        me: PlayerId,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Decision<ActionChoice> {
        let _ = (me, state, rng);
        Decision::Next
    }

    fn treasure(&mut self, me: PlayerId, state: &GameState, rng: &mut GameRng) -> Decision<CardId> {
        let _ = (me, state, rng);
        Decision::Next
    }

    fn buy(&mut self, me: PlayerId, state: &GameState, rng: &mut GameRng) -> Decision<CardId> {
        let _ = (me, state, rng);
        Decision::Next
    }
}

/// A strategy assembled from an ordered chain of rules.
///
/// Each decision point walks the chain until a rule chooses or passes; a
/// fully exhausted chain counts as a pass.
pub struct RuleChain {
    name: String,
    rules: Vec<Box<dyn Rule>>,
    rng: GameRng,
}

impl RuleChain {
    /// An empty chain with its own RNG seed.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }
}

impl Strategy for RuleChain {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, me: PlayerId, state: &GameState) -> Option<ActionChoice> {
        for rule in &mut self.rules {
            match rule.action(me, state, &mut self.rng) {
                Decision::Choose(choice) => return Some(choice),
                Decision::Pass => return None,
                Decision::Next => {}
            }
        }
        None
    }

    fn choose_treasure(&mut self, me: PlayerId, state: &GameState) -> Option<CardId> {
        for rule in &mut self.rules {
            match rule.treasure(me, state, &mut self.rng) {
                Decision::Choose(card) => return Some(card),
                Decision::Pass => return None,
                Decision::Next => {}
            }
        }
        None
    }

    fn choose_buy(&mut self, me: PlayerId, state: &GameState) -> Option<CardId> {
        for rule in &mut self.rules {
            match rule.buy(me, state, &mut self.rng) {
                Decision::Choose(card) => return Some(card),
                Decision::Pass => return None,
                Decision::Next => {}
            }
        }
        None
    }
}
