//! Shared match state: supply, players, trash, RNG and progress pointers.

use std::sync::Arc;

use tracing::debug;

use crate::cards::{Catalog, CardId};
use crate::core::GameRng;

use super::player::{Player, PlayerId};
use super::supply::Supply;

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchOutcome {
    /// The supply hit the end-of-game condition.
    SupplyExhausted,
    /// The configured round limit cut the match off.
    RoundLimit,
}

/// Everything a match mutates, observable read-only by strategies.
///
/// Strategies receive `&GameState` at every decision point; all mutation
/// flows through the turn engine and the effect resolver.
#[derive(Debug)]
pub struct GameState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) supply: Supply,
    pub(crate) players: Vec<Player>,
    pub(crate) strategy_names: Vec<String>,
    pub(crate) trash: Vec<CardId>,
    pub(crate) rng: GameRng,
    pub(crate) round: u32,
    pub(crate) current: usize,
    pub(crate) round_limit: Option<u32>,
    pub(crate) outcome: Option<MatchOutcome>,
}

impl GameState {
    /// The card catalog this match plays with.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shared supply.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The strategy identifier of a player.
    #[must_use]
    pub fn strategy_name(&self, id: PlayerId) -> &str {
        &self.strategy_names[id.index()]
    }

    /// The shared trash pile. Cards here are out of every deck for good.
    #[must_use]
    pub fn trash(&self) -> &[CardId] {
        &self.trash
    }

    /// Completed rounds (0-based while the match runs).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// How the match ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Convenience: money available to the given player right now.
    #[must_use]
    pub fn money(&self, id: PlayerId) -> u32 {
        self.player(id).money_available(&self.catalog)
    }

    // === Mutation primitives (effect resolver and engine only) ===

    /// Gain a card from the supply into a player's discard pile.
    ///
    /// Returns false (and changes nothing) if the pile is exhausted -
    /// callers that care must check.
    pub(crate) fn gain_to_discard(&mut self, player: usize, card: CardId) -> bool {
        if !self.supply.decrement(card) {
            return false;
        }
        debug!(player, card = %self.catalog.spec(card).name, "gained card");
        self.players[player].discard_pile.push(card);
        self.players[player].gained_total += 1;
        true
    }

    /// Gain a card from the supply straight into a player's hand.
    pub(crate) fn gain_to_hand(&mut self, player: usize, card: CardId) -> bool {
        if !self.supply.decrement(card) {
            return false;
        }
        debug!(player, card = %self.catalog.spec(card).name, "gained card to hand");
        self.players[player].hand.push(card);
        self.players[player].gained_total += 1;
        true
    }

    /// Move a card that belonged to `player` into the shared trash.
    ///
    /// The card must already be out of the player's containers; this only
    /// records where it ended up.
    pub(crate) fn trash_from(&mut self, player: usize, card: CardId) {
        debug!(player, card = %self.catalog.spec(card).name, "trashed card");
        self.trash.push(card);
        self.players[player].trashed_total += 1;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cards::sets::base::{COPPER, PROVINCE};

    pub(crate) fn test_state(player_count: usize, seed: u64) -> GameState {
        let catalog = Arc::new(Catalog::base_only());
        let variants: Vec<CardId> = catalog.base_cards().to_vec();
        let supply = Supply::new(&catalog, &variants);
        let mut rng = GameRng::new(seed);
        let players: Vec<Player> = (0..player_count).map(|_| Player::starting(&mut rng)).collect();

        GameState {
            catalog,
            supply,
            players,
            strategy_names: (0..player_count).map(|i| format!("test-{i}")).collect(),
            trash: Vec::new(),
            rng,
            round: 0,
            current: 0,
            round_limit: None,
            outcome: None,
        }
    }

    #[test]
    fn test_gain_to_discard() {
        let mut state = test_state(2, 42);
        let before = state.supply.remaining(PROVINCE);

        assert!(state.gain_to_discard(0, PROVINCE));
        assert_eq!(state.supply.remaining(PROVINCE), before - 1);
        assert_eq!(state.players[0].discard_pile.last(), Some(&PROVINCE));
        assert_eq!(state.players[0].gained_total(), 11);
    }

    #[test]
    fn test_gain_from_empty_pile_refused() {
        let mut state = test_state(2, 42);
        for _ in 0..12 {
            assert!(state.gain_to_discard(0, PROVINCE));
        }

        let total = state.players[0].cards_total();
        assert!(!state.gain_to_discard(0, PROVINCE));
        assert_eq!(state.players[0].cards_total(), total);
        assert_eq!(state.supply.remaining(PROVINCE), 0);
    }

    #[test]
    fn test_trash_recorded() {
        let mut state = test_state(2, 42);
        state.trash_from(1, COPPER);

        assert_eq!(state.trash(), &[COPPER]);
        assert_eq!(state.players[1].trashed_total(), 1);
    }
}
