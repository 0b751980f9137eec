// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Game events logging.
use log::{debug, error, info, trace};

use rhode_core::{GameEvent, Observer};

/// Writes game events to the log.
///
/// Hands, board cards, actions and results are logged at info level, antes,
/// hole cards and street ends at debug level and snapshots at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::HandStarted { hand, button } => {
                info!("Hand {hand} started, button at seat {button}");
            }
            GameEvent::AntePosted {
                seat,
                player_id,
                chips,
            } => {
                debug!("Seat {seat} player {player_id} posts ante {chips}");
            }
            GameEvent::HoleCardDealt {
                seat,
                player_id,
                card,
            } => {
                debug!("Seat {seat} player {player_id} gets {card}");
            }
            GameEvent::BoardCard { street, card } => {
                info!("{street} card {card}");
            }
            GameEvent::Action(record) => {
                info!(
                    "{} seat {} player {} {} {} pot {}",
                    record.street,
                    record.seat,
                    record.player_id,
                    record.action,
                    record.chips,
                    record.pot
                );
            }
            GameEvent::StreetEnded { street, end, pot } => {
                debug!("{street} ended {end:?} with pot {pot}");
            }
            GameEvent::Snapshot(state) => {
                trace!("{} snapshot {state:?}", state.stage);
            }
            GameEvent::HandResolved(result) => {
                for payoff in &result.payoffs {
                    info!(
                        "Hand {} player {} wins {}",
                        result.hand, payoff.player_id, payoff.chips
                    );
                }

                if let Some(value) = &result.value {
                    info!("Hand {} won at showdown with {value}", result.hand);
                }
            }
            GameEvent::HandAborted { hand, error } => {
                error!("Hand {hand} aborted: {error}");
            }
            GameEvent::PlayerBusted { seat, player_id } => {
                info!("Player {player_id} left seat {seat} with no chips");
            }
        }
    }
}
