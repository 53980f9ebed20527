//! The strategy contract and the shipped policies.
//!
//! A strategy is consulted by the turn engine at four decision points and
//! answers with a card (plus any effect parameters) or "no choice", which
//! ends the phase early. Strategies only read state; every mutation flows
//! back through the engine applying the chosen card's effect.

pub mod random;
pub mod registry;
pub mod rules;
pub mod samples;

use crate::cards::{CardId, EffectParams};
use crate::game::{GameState, PlayerId};

pub use random::RandomStrategy;
pub use rules::{Decision, Rule, RuleChain};

/// An action pick: the card to play and the parameters its effect needs
/// (what to discard, trash, gain or replay).
#[derive(Clone, Debug)]
pub struct ActionChoice {
    pub card: CardId,
    pub params: EffectParams,
}

impl ActionChoice {
    /// Play a card with default parameters; its effect falls back to its
    /// documented default-target policy.
    #[must_use]
    pub fn plain(card: CardId) -> Self {
        Self {
            card,
            params: EffectParams::default(),
        }
    }

    /// Play a card with explicit parameters.
    #[must_use]
    pub fn with_params(card: CardId, params: EffectParams) -> Self {
        Self { card, params }
    }
}

/// A pluggable play policy.
///
/// Decision methods take `&mut self` so policies can carry their own
/// seeded RNG; they must not mutate match state (they only get
/// `&GameState`). Returning a card that is absent or unaffordable is an
/// invalid move and aborts the match.
pub trait Strategy: Send {
    /// Identifier used in stats and error reports.
    fn name(&self) -> &str;

    /// Pick an action card to play, or `None` to end the action phase.
    fn choose_action(&mut self, me: PlayerId, state: &GameState) -> Option<ActionChoice>;

    /// Pick a treasure to play, or `None` to end the treasure phase.
    fn choose_treasure(&mut self, me: PlayerId, state: &GameState) -> Option<CardId>;

    /// Pick a card to buy, or `None` to end the buy phase.
    fn choose_buy(&mut self, me: PlayerId, state: &GameState) -> Option<CardId>;

    /// Reaction cards to reveal, in the order this policy wants them
    /// considered. Re-invoked each time the engine needs the sequence.
    /// The default reveals nothing.
    fn choose_reactions(&mut self, me: PlayerId, state: &GameState) -> Vec<CardId> {
        let _ = (me, state);
        Vec::new()
    }
}

impl std::fmt::Debug for dyn Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name()).finish()
    }
}
