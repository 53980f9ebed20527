//! The baseline policy: random but legal.

use std::cmp::Reverse;

use crate::cards::{CardId, Tags};
use crate::core::GameRng;
use crate::game::{GameState, PlayerId};

use super::{ActionChoice, Strategy};

/// Plays a random action, the first treasure in hand, and buys the most
/// expensive affordable pile (random tie-break).
///
/// This is the minimal policy the engine is validated against; anything
/// smarter is built out of decision rules instead.
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a baseline policy with its own RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_action(&mut self, me: PlayerId, state: &GameState) -> Option<ActionChoice> {
        let playable: Vec<CardId> = state
            .player(me)
            .hand()
            .iter()
            .copied()
            .filter(|&c| state.catalog().spec(c).is_action())
            .collect();
        self.rng.choose(&playable).copied().map(ActionChoice::plain)
    }

    fn choose_treasure(&mut self, me: PlayerId, state: &GameState) -> Option<CardId> {
        state
            .player(me)
            .hand()
            .iter()
            .copied()
            .find(|&c| state.catalog().spec(c).is_treasure())
    }

    fn choose_buy(&mut self, me: PlayerId, state: &GameState) -> Option<CardId> {
        let money = state.money(me);
        let mut buyable: Vec<CardId> = state
            .supply()
            .piles()
            .iter()
            .copied()
            .filter(|&c| state.supply().remaining(c) > 0 && state.catalog().spec(c).cost <= money)
            .collect();
        // shuffle first so the stable sort breaks cost ties at random
        self.rng.shuffle(&mut buyable);
        buyable.sort_by_key(|&c| Reverse(state.catalog().spec(c).cost));
        buyable.first().copied()
    }

    fn choose_reactions(&mut self, me: PlayerId, state: &GameState) -> Vec<CardId> {
        let mut reactions: Vec<CardId> = state
            .player(me)
            .hand()
            .iter()
            .copied()
            .filter(|&c| state.catalog().spec(c).tags.contains(Tags::REACTION))
            .collect();
        self.rng.shuffle(&mut reactions);
        reactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::sets::base::{COPPER, CURSE};
    use crate::game::state::tests::test_state;

    #[test]
    fn test_no_actions_in_a_starting_hand() {
        let state = test_state(2, 42);
        let mut strategy = RandomStrategy::new(1);
        assert!(strategy.choose_action(PlayerId::new(0), &state).is_none());
    }

    #[test]
    fn test_treasure_comes_from_hand() {
        let state = test_state(2, 42);
        let mut strategy = RandomStrategy::new(1);

        // every starting hand holds at least two Coppers
        let chosen = strategy.choose_treasure(PlayerId::new(0), &state).unwrap();
        assert_eq!(chosen, COPPER);
    }

    #[test]
    fn test_broke_player_still_buys_free_piles() {
        let state = test_state(2, 42);
        let mut strategy = RandomStrategy::new(1);

        // nothing in play yet: 0 money, so only the free piles qualify
        let chosen = strategy.choose_buy(PlayerId::new(0), &state).unwrap();
        assert!(chosen == COPPER || chosen == CURSE);
    }

    #[test]
    fn test_no_reactions_in_base_set() {
        let state = test_state(2, 42);
        let mut strategy = RandomStrategy::new(1);
        assert!(strategy.choose_reactions(PlayerId::new(0), &state).is_empty());
    }
}
