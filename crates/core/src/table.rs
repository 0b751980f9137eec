// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Table seats.
use crate::{
    error::GameError,
    player::Player,
    poker::PlayerId,
};

/// A table with a fixed number of seats.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Option<Player>>,
}

impl Table {
    /// Creates a table with the given number of empty seats.
    pub fn new(seats: usize) -> Self {
        Self {
            seats: vec![None; seats],
        }
    }

    /// Sits a player at the given seat.
    pub fn seat_player(&mut self, player: Player, seat: usize) -> Result<(), GameError> {
        let seats = self.seats.len();
        if seat >= seats {
            return Err(GameError::InvalidSeat { seat, seats });
        }

        if self.seats[seat].is_some() {
            return Err(GameError::SeatTaken(seat));
        }

        if self.players().any(|(_, p)| p.id == player.id) {
            return Err(GameError::DuplicatePlayer(player.id));
        }

        self.seats[seat] = Some(player);
        Ok(())
    }

    /// The number of seats, including empty ones.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Checks if the table has no seats.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// The player at the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat).and_then(Option::as_ref)
    }

    /// The player at the given seat.
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.seats.get_mut(seat).and_then(Option::as_mut)
    }

    /// The seat of a player.
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players().find(|(_, p)| p.id == id).map(|(seat, _)| seat)
    }

    /// Returns the seated players with their seat index, in seat order.
    pub fn players(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(seat, p)| p.as_ref().map(|p| (seat, p)))
    }

    /// Returns the seated players with their seat index, in seat order.
    pub fn players_mut(&mut self) -> impl Iterator<Item = (usize, &mut Player)> {
        self.seats
            .iter_mut()
            .enumerate()
            .filter_map(|(seat, p)| p.as_mut().map(|p| (seat, p)))
    }

    /// The number of seated players.
    pub fn count_players(&self) -> usize {
        self.players().count()
    }

    /// The number of players still in the hand.
    pub fn count_active(&self) -> usize {
        self.players().filter(|(_, p)| p.is_active).count()
    }

    /// The first occupied seat after `seat`, wrapping around the table.
    pub fn next_occupied(&self, seat: usize) -> Option<usize> {
        let len = self.seats.len();
        (1..=len)
            .map(|offset| (seat + offset) % len)
            .find(|&idx| self.seats[idx].is_some())
    }

    /// Returns the players at the given seats in the same order.
    ///
    /// Empty, repeated or out of range seats are skipped.
    pub fn players_at_mut(&mut self, seats: &[usize]) -> Vec<&mut Player> {
        let mut slots = self.seats.iter_mut().map(Option::as_mut).collect::<Vec<_>>();
        seats
            .iter()
            .filter_map(|&seat| slots.get_mut(seat).and_then(Option::take))
            .collect()
    }

    /// Removes and returns the players with no chips left with their seats.
    pub fn remove_busted(&mut self) -> Vec<(usize, Player)> {
        self.seats
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(Player::is_busted))
            .filter_map(|(seat, slot)| slot.take().map(|p| (seat, p)))
            .collect()
    }
}
