//! Effect resolution - applying card behavior to the match state.
//!
//! The three resolution contexts are distinct: *play* applies a card's
//! bonuses and effect and moves it into the in-play area (it never touches
//! the supply); *gain* moves a card from the supply into a discard pile;
//! *buy* charges the cost and then gains.
//!
//! Exhausted piles, empty decks and empty hands are normal here - the
//! affected step simply does nothing further. A strategy-requested target
//! that is missing from its container is a bug in the decision layer and
//! fails the match with [`EngineError::InvalidMove`].

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::cards::sets::base::{COPPER, CURSE, GOLD, SILVER};
use crate::cards::{CardEffect, CardId, EffectParams};
use crate::core::{EngineError, Phase};

use super::state::GameState;

/// Build the invalid-move error, identifying the offender.
pub(crate) fn invalid_move(
    state: &GameState,
    actor: usize,
    phase: Phase,
    reason: impl Into<String>,
) -> EngineError {
    EngineError::InvalidMove {
        player: actor as u32 + 1,
        strategy: state.strategy_names[actor].clone(),
        phase,
        reason: reason.into(),
    }
}

/// Card name for diagnostics; ids from broken strategies may not resolve.
fn card_label(state: &GameState, id: CardId) -> String {
    match state.catalog.get(id) {
        Some(spec) => spec.name.clone(),
        None => id.to_string(),
    }
}

/// Resolve playing a card the engine already removed from the actor's
/// hand: move it into play, apply its static bonuses, draw its cards,
/// then run its effect.
pub(crate) fn play_card(
    state: &mut GameState,
    actor: usize,
    card: CardId,
    params: &EffectParams,
    phase: Phase,
) -> Result<(), EngineError> {
    resolve_play(state, actor, card, params, phase, true)
}

/// The play protocol. `enter_play` is false only for the second
/// invocation of a replayed card: the physical card is already in the
/// in-play area, so only bonuses and the effect apply again.
fn resolve_play(
    state: &mut GameState,
    actor: usize,
    card: CardId,
    params: &EffectParams,
    phase: Phase,
    enter_play: bool,
) -> Result<(), EngineError> {
    let spec = state.catalog.spec(card);
    let (bonus_actions, bonus_buys, bonus_cards) = (spec.actions, spec.buys, spec.cards);
    let effect = spec.effect;
    debug!(player = actor, card = %spec.name, "playing card");

    if enter_play {
        state.players[actor].in_play.push(card);
    }
    state.players[actor].actions += bonus_actions;
    state.players[actor].buys += bonus_buys;
    for _ in 0..bonus_cards {
        state.players[actor].draw_to_hand(&mut state.rng);
    }

    match effect {
        CardEffect::None => {}

        CardEffect::DiscardForDraws => {
            let count = params.discard.len();
            for &chosen in &params.discard {
                if !state.players[actor].remove_from_hand(chosen) {
                    return Err(invalid_move(
                        state,
                        actor,
                        phase,
                        format!("discard target {} is not in hand", card_label(state, chosen)),
                    ));
                }
                state.players[actor].discard_pile.push(chosen);
            }
            for _ in 0..count {
                state.players[actor].draw_to_hand(&mut state.rng);
            }
        }

        CardEffect::DiscardDrawPile => {
            if !params.keep_deck {
                let mut pile = std::mem::take(&mut state.players[actor].draw_pile);
                debug!(player = actor, cards = pile.len(), "discarding draw pile");
                state.players[actor].discard_pile.append(&mut pile);
            }
        }

        CardEffect::TrashChosen => {
            for &chosen in &params.trash {
                if !state.players[actor].remove_from_hand(chosen) {
                    return Err(invalid_move(
                        state,
                        actor,
                        phase,
                        format!("trash target {} is not in hand", card_label(state, chosen)),
                    ));
                }
                state.trash_from(actor, chosen);
            }
        }

        CardEffect::OthersDraw(count) => {
            for idx in 0..state.players.len() {
                if idx == actor {
                    continue;
                }
                for _ in 0..count {
                    state.players[idx].draw_to_hand(&mut state.rng);
                }
            }
        }

        CardEffect::TrashSelfGain { max_cost } => {
            // trash the card from the in-play area, if it is still there
            if let Some(pos) = state.players[actor].in_play.iter().rposition(|&c| c == card) {
                state.players[actor].in_play.remove(pos);
                state.trash_from(actor, card);
            }
            for &candidate in &params.gain {
                if state.supply.remaining(candidate) > 0
                    && state.catalog.spec(candidate).cost <= max_cost
                {
                    state.gain_to_discard(actor, candidate);
                    break;
                }
            }
        }

        CardEffect::UpgradeTreasure { bonus } => {
            let target = match params.trash.first().copied() {
                Some(chosen) => {
                    if !state.players[actor].remove_from_hand(chosen) {
                        return Err(invalid_move(
                            state,
                            actor,
                            phase,
                            format!("trash target {} is not in hand", card_label(state, chosen)),
                        ));
                    }
                    Some(chosen)
                }
                None => {
                    // auto-pick ignores Gold: there is nothing better to upgrade into
                    let options: Vec<CardId> = state.players[actor]
                        .hand
                        .iter()
                        .copied()
                        .filter(|&c| {
                            let spec = state.catalog.spec(c);
                            spec.is_treasure() && spec.cost < 6
                        })
                        .collect();
                    let picked = state.rng.choose(&options).copied();
                    if let Some(chosen) = picked {
                        state.players[actor].remove_from_hand(chosen);
                    }
                    picked
                }
            };
            let Some(target) = target else { return Ok(()) };

            state.trash_from(actor, target);
            let budget = state.catalog.spec(target).cost + bonus;
            let mut candidates = ranked_gains(state, budget, true);
            if !params.gain.is_empty() {
                candidates.retain(|c| params.gain.contains(c));
            }
            if let Some(&best) = candidates.first() {
                state.gain_to_hand(actor, best);
            }
        }

        CardEffect::TrashCopperForCoins { coins } => {
            if state.players[actor].remove_from_hand(COPPER) {
                state.trash_from(actor, COPPER);
                state.players[actor].bonus_coins += coins;
            } else {
                debug!(player = actor, "no Copper to trash");
            }
        }

        CardEffect::Upgrade { bonus } => {
            let target = match params.trash.first().copied() {
                Some(chosen) => {
                    if !state.players[actor].remove_from_hand(chosen) {
                        return Err(invalid_move(
                            state,
                            actor,
                            phase,
                            format!("trash target {} is not in hand", card_label(state, chosen)),
                        ));
                    }
                    Some(chosen)
                }
                None => {
                    let picked = state.rng.choose(&state.players[actor].hand).copied();
                    if let Some(chosen) = picked {
                        state.players[actor].remove_from_hand(chosen);
                    }
                    picked
                }
            };
            let Some(target) = target else { return Ok(()) };

            state.trash_from(actor, target);
            let budget = state.catalog.spec(target).cost + bonus;
            let candidates = if params.gain.is_empty() {
                ranked_gains(state, budget, false)
            } else {
                params.gain.clone()
            };
            for &candidate in &candidates {
                if state.supply.remaining(candidate) > 0
                    && state.catalog.spec(candidate).cost <= budget
                {
                    state.gain_to_discard(actor, candidate);
                    break;
                }
            }
        }

        CardEffect::RevealTreasures { count } => {
            let mut treasures: SmallVec<[CardId; 2]> = SmallVec::new();
            let mut set_aside: SmallVec<[CardId; 8]> = SmallVec::new();
            while (treasures.len() as u32) < count {
                let Some(revealed) = state.players[actor].draw(&mut state.rng) else {
                    debug!(player = actor, "nothing left to reveal");
                    break;
                };
                debug!(card = %state.catalog.spec(revealed).name, "revealed card");
                if state.catalog.spec(revealed).is_treasure() {
                    treasures.push(revealed);
                } else {
                    set_aside.push(revealed);
                }
            }
            state.players[actor].hand.extend(treasures);
            state.players[actor].discard_pile.extend(set_aside);
        }

        CardEffect::StealTreasures => {
            let priority: SmallVec<[CardId; 3]> = if params.trash.is_empty() {
                smallvec![GOLD, SILVER, COPPER]
            } else {
                SmallVec::from_slice(&params.trash)
            };
            let keep: SmallVec<[CardId; 2]> = if params.gain.is_empty() {
                smallvec![GOLD, SILVER]
            } else {
                SmallVec::from_slice(&params.gain)
            };

            for opponent in 0..state.players.len() {
                if opponent == actor {
                    continue;
                }

                let mut revealed: SmallVec<[CardId; 2]> = SmallVec::new();
                for _ in 0..2 {
                    if let Some(card) = state.players[opponent].draw(&mut state.rng) {
                        revealed.push(card);
                    }
                }

                let mut target = None;
                for &wanted in &priority {
                    if let Some(pos) = revealed.iter().position(|&c| c == wanted) {
                        revealed.remove(pos);
                        target = Some(wanted);
                        break;
                    }
                }
                if target.is_none() {
                    let treasure_positions: SmallVec<[usize; 2]> = revealed
                        .iter()
                        .enumerate()
                        .filter(|&(_, &c)| state.catalog.spec(c).is_treasure())
                        .map(|(i, _)| i)
                        .collect();
                    if let Some(&pos) = state.rng.choose(&treasure_positions) {
                        target = Some(revealed.remove(pos));
                    }
                }

                if let Some(taken) = target {
                    if keep.contains(&taken) {
                        debug!(
                            from = opponent,
                            card = %state.catalog.spec(taken).name,
                            "stole card"
                        );
                        state.players[opponent].stolen_total += 1;
                        state.players[actor].discard_pile.push(taken);
                        state.players[actor].gained_total += 1;
                    } else {
                        state.trash_from(opponent, taken);
                    }
                }

                state.players[opponent].discard_pile.extend(revealed);
            }
        }

        CardEffect::PlayTwice => {
            let target = match params.play {
                Some(chosen) => {
                    if !state.players[actor].remove_from_hand(chosen) {
                        return Err(invalid_move(
                            state,
                            actor,
                            phase,
                            format!("replay target {} is not in hand", card_label(state, chosen)),
                        ));
                    }
                    Some(chosen)
                }
                None => {
                    let options: Vec<CardId> = state.players[actor]
                        .hand
                        .iter()
                        .copied()
                        .filter(|&c| state.catalog.spec(c).is_action())
                        .collect();
                    let picked = state.rng.choose(&options).copied();
                    if let Some(chosen) = picked {
                        state.players[actor].remove_from_hand(chosen);
                    }
                    picked
                }
            };
            let Some(target) = target else { return Ok(()) };
            debug!(card = %state.catalog.spec(target).name, "playing action card twice");

            let first = params.repeats.first().cloned().unwrap_or_default();
            let second = params.repeats.get(1).cloned().unwrap_or_default();
            resolve_play(state, actor, target, &first, phase, true)?;
            // the card is already in play; the second play repeats
            // bonuses and effect only
            resolve_play(state, actor, target, &second, phase, false)?;
        }

        CardEffect::CurseOthers => {
            for idx in 0..state.players.len() {
                if state.supply.remaining(CURSE) == 0 {
                    break;
                }
                if idx == actor {
                    continue;
                }
                state.gain_to_discard(idx, CURSE);
            }
        }

        CardEffect::GainCard { max_cost } => {
            let candidates = if params.gain.is_empty() {
                ranked_gains(state, max_cost, false)
            } else {
                params.gain.clone()
            };
            for &candidate in &candidates {
                if state.supply.remaining(candidate) > 0
                    && state.catalog.spec(candidate).cost <= max_cost
                {
                    state.gain_to_discard(actor, candidate);
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Resolve buying a card: validate affordability and availability, charge
/// the cost, then gain it.
pub(crate) fn buy_card(state: &mut GameState, actor: usize, card: CardId) -> Result<(), EngineError> {
    if !state.catalog.contains(card) {
        return Err(invalid_move(
            state,
            actor,
            Phase::Buy,
            format!("chose {card}, which is not in the catalog"),
        ));
    }
    let cost = state.catalog.spec(card).cost;

    if state.supply.remaining(card) == 0 {
        return Err(invalid_move(
            state,
            actor,
            Phase::Buy,
            format!("the {} pile is empty", state.catalog.spec(card).name),
        ));
    }
    let money = state.players[actor].money_available(&state.catalog);
    if cost > money {
        return Err(invalid_move(
            state,
            actor,
            Phase::Buy,
            format!(
                "cannot afford {}: costs {cost}, has {money}",
                state.catalog.spec(card).name
            ),
        ));
    }

    debug!(player = actor, card = %state.catalog.spec(card).name, cost, "bought card");
    state.players[actor].spent += cost;
    let gained = state.gain_to_discard(actor, card);
    debug_assert!(gained, "validated pile must not be empty");
    Ok(())
}

/// In-supply piles within budget, most expensive first; cost ties keep
/// the supply's input order (stable sort).
fn ranked_gains(state: &GameState, max_cost: u32, treasures_only: bool) -> Vec<CardId> {
    let mut candidates: Vec<CardId> = state
        .supply
        .piles()
        .iter()
        .copied()
        .filter(|&id| state.supply.remaining(id) > 0)
        .filter(|&id| {
            let spec = state.catalog.spec(id);
            spec.cost <= max_cost && (!treasures_only || spec.is_treasure())
        })
        .collect();
    candidates.sort_by_key(|&id| std::cmp::Reverse(state.catalog.spec(id).cost));
    candidates
}
