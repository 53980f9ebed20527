//! Per-player deck state: the four card containers and turn counters.

use tracing::{debug, trace};

use crate::cards::sets::base::{COPPER, ESTATE};
use crate::cards::{Catalog, CardId, Scoring, Tags};
use crate::core::GameRng;

/// Player identifier: a 0-based seat in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's cards and turn counters.
///
/// The four containers together are the player's "full deck". Their
/// multiset union only grows (gains) or stays constant (moves, shuffles);
/// trashing and theft are the only subtractions, and both are accounted
/// for in the lifetime counters so conservation stays checkable:
/// `containers == gained - trashed - stolen` at all times.
#[derive(Clone, Debug)]
pub struct Player {
    /// Draw pile; the next card to draw is at the end.
    pub(crate) draw_pile: Vec<CardId>,
    /// Cards in hand (multiset, order irrelevant).
    pub(crate) hand: Vec<CardId>,
    /// Cards played this turn, in play order.
    pub(crate) in_play: Vec<CardId>,
    /// Discard pile (multiset, order irrelevant).
    pub(crate) discard_pile: Vec<CardId>,

    /// Actions remaining this turn.
    pub(crate) actions: u32,
    /// Buys remaining this turn.
    pub(crate) buys: u32,
    /// Money already committed to purchases this turn.
    pub(crate) spent: u32,
    /// Coins granted by conditional effects this turn.
    pub(crate) bonus_coins: u32,

    /// Cards ever gained, including the starting deck.
    pub(crate) gained_total: usize,
    /// Cards this player lost to the trash.
    pub(crate) trashed_total: usize,
    /// Cards stolen from this player by attacks.
    pub(crate) stolen_total: usize,
}

impl Player {
    /// A fresh player: 7 Copper + 3 Estate shuffled, 5 cards drawn.
    #[must_use]
    pub(crate) fn starting(rng: &mut GameRng) -> Self {
        let mut draw_pile = vec![COPPER; 7];
        draw_pile.extend([ESTATE; 3]);
        rng.shuffle(&mut draw_pile);

        let mut player = Self {
            draw_pile,
            hand: Vec::new(),
            in_play: Vec::new(),
            discard_pile: Vec::new(),
            actions: 1,
            buys: 1,
            spent: 0,
            bonus_coins: 0,
            gained_total: 10,
            trashed_total: 0,
            stolen_total: 0,
        };
        for _ in 0..5 {
            player.draw_to_hand(rng);
        }
        player
    }

    // === Read accessors (the strategy-facing surface) ===

    /// Cards currently in hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Cards played this turn.
    #[must_use]
    pub fn in_play(&self) -> &[CardId] {
        &self.in_play
    }

    /// The discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// How many cards are left in the draw pile. The order is hidden.
    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    /// Actions remaining this turn.
    #[must_use]
    pub fn actions(&self) -> u32 {
        self.actions
    }

    /// Buys remaining this turn.
    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    /// Money available to spend: coins contributed by the in-play area
    /// plus any conditional bonus coins, minus what was already spent.
    #[must_use]
    pub fn money_available(&self, catalog: &Catalog) -> u32 {
        let in_play: u32 = self.in_play.iter().map(|&id| catalog.spec(id).money).sum();
        (in_play + self.bonus_coins).saturating_sub(self.spent)
    }

    /// Victory points over the full deck, recomputed on demand.
    ///
    /// Dynamic variants score as a function of the total card count, so
    /// this must never be cached.
    #[must_use]
    pub fn victory_points(&self, catalog: &Catalog) -> i32 {
        let total = self.cards_total();
        self.all_cards()
            .map(|id| match catalog.spec(id).scoring {
                Scoring::Flat(points) => points,
                Scoring::PerTenCards => (total / 10) as i32,
            })
            .sum()
    }

    /// Copies of a specific variant across the full deck.
    #[must_use]
    pub fn card_count(&self, id: CardId) -> usize {
        self.all_cards().filter(|&c| c == id).count()
    }

    /// Total number of cards across the full deck.
    #[must_use]
    pub fn cards_total(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.in_play.len() + self.discard_pile.len()
    }

    /// Cards ever gained, including the starting ten.
    #[must_use]
    pub fn gained_total(&self) -> usize {
        self.gained_total
    }

    /// Cards this player has lost to the trash.
    #[must_use]
    pub fn trashed_total(&self) -> usize {
        self.trashed_total
    }

    /// Cards stolen from this player.
    #[must_use]
    pub fn stolen_total(&self) -> usize {
        self.stolen_total
    }

    /// Whether any card in hand carries the given tag.
    #[must_use]
    pub fn has_in_hand(&self, catalog: &Catalog, tags: Tags) -> bool {
        self.hand.iter().any(|&id| catalog.spec(id).tags.contains(tags))
    }

    /// Iterate over every card in the full deck.
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw_pile
            .iter()
            .chain(&self.hand)
            .chain(&self.in_play)
            .chain(&self.discard_pile)
            .copied()
    }

    // === Mutation (engine-internal) ===

    /// Draw the next card, reshuffling the discard pile into a fresh draw
    /// pile if needed. Returns `None` when both piles are empty - that is
    /// a valid state, not an error.
    pub(crate) fn draw(&mut self, rng: &mut GameRng) -> Option<CardId> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return None;
            }
            debug!(
                discarded = self.discard_pile.len(),
                "draw pile empty, reshuffling discard pile"
            );
            std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
        }
        self.draw_pile.pop()
    }

    /// Draw a card into hand. A failed draw is a no-op.
    pub(crate) fn draw_to_hand(&mut self, rng: &mut GameRng) -> bool {
        match self.draw(rng) {
            Some(card) => {
                trace!(%card, "drew card to hand");
                self.hand.push(card);
                true
            }
            None => {
                debug!("unable to draw: draw and discard piles are both empty");
                false
            }
        }
    }

    /// Remove one copy of a variant from hand. Returns false if absent.
    pub(crate) fn remove_from_hand(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == id) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// End-of-turn cleanup: hand and in-play go to the discard pile, a
    /// fresh 5-card hand is drawn, and the turn counters reset.
    pub(crate) fn cleanup(&mut self, rng: &mut GameRng) {
        self.discard_pile.append(&mut self.hand);
        self.discard_pile.append(&mut self.in_play);
        for _ in 0..5 {
            self.draw_to_hand(rng);
        }
        self.actions = 1;
        self.buys = 1;
        self.spent = 0;
        self.bonus_coins = 0;
    }
}
