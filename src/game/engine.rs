//! The turn engine: phase machine, round loop and match results.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::sets::base::PROVINCE;
use crate::cards::{Catalog, CardId, Tags};
use crate::core::{EngineError, GameConfig, GameRng, Phase};
use crate::strategy::Strategy;

use super::effects::{self, invalid_move};
use super::player::{Player, PlayerId};
use super::state::{GameState, MatchOutcome};
use super::supply::Supply;

/// One simulated match.
///
/// Owns the mutable [`GameState`] and the strategy for each seat. Each
/// player's turn runs the four phases in order - action, treasure, buy,
/// cleanup - consulting the seat's strategy at every decision point and
/// applying the chosen cards' effects.
pub struct Game {
    state: GameState,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Game {
    /// Set up a match: stock the supply, randomize turn order, deal
    /// starting decks and opening hands.
    ///
    /// The supply must include the Province pile (the termination check
    /// depends on it) and there must be at least two strategies.
    pub fn new(
        catalog: Arc<Catalog>,
        supply_variants: Vec<CardId>,
        strategies: Vec<Box<dyn Strategy>>,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        if strategies.len() < 2 {
            return Err(EngineError::Configuration(format!(
                "need at least 2 strategies, got {}",
                strategies.len()
            )));
        }
        if strategies.len() > u8::MAX as usize {
            return Err(EngineError::Configuration(format!(
                "too many players: {}",
                strategies.len()
            )));
        }
        if let Some(&bad) = supply_variants.iter().find(|id| !catalog.contains(**id)) {
            return Err(EngineError::Configuration(format!(
                "supply variant {bad} is not in the catalog"
            )));
        }
        if !supply_variants.contains(&PROVINCE) {
            return Err(EngineError::Configuration(
                "supply must include the Province pile".to_string(),
            ));
        }

        let mut rng = GameRng::new(config.seed);
        let supply = Supply::new(&catalog, &supply_variants);

        let mut strategies = strategies;
        rng.shuffle(&mut strategies);
        let strategy_names: Vec<String> =
            strategies.iter().map(|s| s.name().to_string()).collect();
        let players: Vec<Player> = strategies.iter().map(|_| Player::starting(&mut rng)).collect();

        Ok(Self {
            state: GameState {
                catalog,
                supply,
                players,
                strategy_names,
                trash: Vec::new(),
                rng,
                round: 0,
                current: 0,
                round_limit: config.round_limit,
                outcome: None,
            },
            strategies,
        })
    }

    /// Read-only view of the match state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the match to completion.
    ///
    /// The end-of-game condition is evaluated once per completed round, so
    /// every player gets the same number of turns. An `InvalidMove` aborts
    /// the match; the partially played state stays observable.
    pub fn play(&mut self) -> Result<MatchOutcome, EngineError> {
        loop {
            if let Some(outcome) = self.state.outcome {
                return Ok(outcome);
            }

            self.take_turn()?;

            self.state.current += 1;
            if self.state.current >= self.state.players.len() {
                self.state.current = 0;
                self.state.round += 1;

                if self.state.supply.is_game_over() {
                    info!(round = self.state.round, "supply exhausted, match over");
                    self.state.outcome = Some(MatchOutcome::SupplyExhausted);
                } else if self
                    .state
                    .round_limit
                    .is_some_and(|limit| self.state.round >= limit)
                {
                    info!(round = self.state.round, "round limit reached, forcing termination");
                    self.state.outcome = Some(MatchOutcome::RoundLimit);
                }
            }
        }
    }

    /// The stats record for the current state; idempotent.
    #[must_use]
    pub fn stats(&self) -> MatchStats {
        let points: Vec<i32> = self
            .state
            .players
            .iter()
            .map(|p| p.victory_points(&self.state.catalog))
            .collect();
        let max_points = points.iter().copied().max().unwrap_or(0);

        let players: Vec<PlayerSummary> = points
            .iter()
            .enumerate()
            .map(|(i, &victory_points)| PlayerSummary {
                number: i as u32 + 1,
                strategy: self.state.strategy_names[i].clone(),
                victory_points,
                leading: victory_points == max_points,
            })
            .collect();

        let winners = self.state.is_finished().then(|| {
            players
                .iter()
                .filter(|p| p.leading)
                .map(|p| p.strategy.clone())
                .collect()
        });

        MatchStats {
            max_points,
            players,
            current_round: self.state.round + 1,
            current_player: self.state.current as u32 + 1,
            winners,
        }
    }

    fn take_turn(&mut self) -> Result<(), EngineError> {
        let actor = self.state.current;
        debug!(
            round = self.state.round + 1,
            player = actor + 1,
            strategy = %self.state.strategy_names[actor],
            "turn start"
        );

        {
            let player = &mut self.state.players[actor];
            player.actions = 1;
            player.buys = 1;
            player.spent = 0;
            player.bonus_coins = 0;
        }

        self.action_phase(actor)?;
        self.treasure_phase(actor)?;
        self.buy_phase(actor)?;

        self.state.players[actor].cleanup(&mut self.state.rng);
        debug!(player = actor + 1, "turn done");
        Ok(())
    }

    fn action_phase(&mut self, actor: usize) -> Result<(), EngineError> {
        while self.state.players[actor].actions > 0 {
            let choice = {
                let Game { state, strategies } = self;
                strategies[actor].choose_action(PlayerId::new(actor as u8), state)
            };
            let Some(choice) = choice else {
                debug!("no more actions to play");
                break;
            };

            match self.state.catalog.get(choice.card) {
                None => {
                    return Err(invalid_move(
                        &self.state,
                        actor,
                        Phase::Action,
                        format!("chose {}, which is not in the catalog", choice.card),
                    ))
                }
                Some(spec) if !spec.is_action() => {
                    return Err(invalid_move(
                        &self.state,
                        actor,
                        Phase::Action,
                        format!("{} is not an action card", spec.name),
                    ))
                }
                Some(_) => {}
            }
            if !self.state.players[actor].remove_from_hand(choice.card) {
                return Err(invalid_move(
                    &self.state,
                    actor,
                    Phase::Action,
                    format!(
                        "{} is not in hand",
                        self.state.catalog.spec(choice.card).name
                    ),
                ));
            }

            self.state.players[actor].actions -= 1;
            effects::play_card(&mut self.state, actor, choice.card, &choice.params, Phase::Action)?;
        }
        Ok(())
    }

    fn treasure_phase(&mut self, actor: usize) -> Result<(), EngineError> {
        while self.state.players[actor].has_in_hand(&self.state.catalog, Tags::TREASURE) {
            let choice = {
                let Game { state, strategies } = self;
                strategies[actor].choose_treasure(PlayerId::new(actor as u8), state)
            };
            let Some(card) = choice else {
                debug!("no more treasures to play");
                break;
            };

            match self.state.catalog.get(card) {
                None => {
                    return Err(invalid_move(
                        &self.state,
                        actor,
                        Phase::Treasure,
                        format!("chose {card}, which is not in the catalog"),
                    ))
                }
                Some(spec) if !spec.is_treasure() => {
                    return Err(invalid_move(
                        &self.state,
                        actor,
                        Phase::Treasure,
                        format!("{} is not a treasure card", spec.name),
                    ))
                }
                Some(_) => {}
            }
            if !self.state.players[actor].remove_from_hand(card) {
                return Err(invalid_move(
                    &self.state,
                    actor,
                    Phase::Treasure,
                    format!("{} is not in hand", self.state.catalog.spec(card).name),
                ));
            }

            effects::play_card(
                &mut self.state,
                actor,
                card,
                &crate::cards::EffectParams::default(),
                Phase::Treasure,
            )?;
        }
        Ok(())
    }

    fn buy_phase(&mut self, actor: usize) -> Result<(), EngineError> {
        while self.state.players[actor].buys > 0 {
            let choice = {
                let Game { state, strategies } = self;
                strategies[actor].choose_buy(PlayerId::new(actor as u8), state)
            };
            let Some(card) = choice else {
                debug!("no more cards to buy");
                break;
            };

            self.state.players[actor].buys -= 1;
            effects::buy_card(&mut self.state, actor, card)?;
        }
        Ok(())
    }
}

/// Per-player entry in the stats record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// 1-based seat number in turn order.
    pub number: u32,
    /// Strategy identifier.
    pub strategy: String,
    /// Victory points right now.
    pub victory_points: i32,
    /// Whether this player is tied for the lead.
    pub leading: bool,
}

/// The stats record consumed by reporting collaborators.
///
/// `winners` is present only once the match has finished and lists the
/// strategy identifier of every player tied at `max_points` - ties are
/// reported as multiple winners, never broken arbitrarily.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchStats {
    pub max_points: i32,
    pub players: Vec<PlayerSummary>,
    /// 1-based round in progress (or just finished).
    pub current_round: u32,
    /// 1-based seat of the player to act next.
    pub current_player: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winners: Option<Vec<String>>,
}
