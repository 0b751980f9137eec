// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

use crate::error::GameError;

pub use rhode_cards::{Card, Deck, DeckExhausted, Rank, Suit};
pub use rhode_eval::{HandRank, HandValue};

/// A player identifier, unique at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Checks if this is a zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Converts a signed amount, negative amounts are rejected.
impl TryFrom<i64> for Chips {
    type Error = GameError;

    fn try_from(val: i64) -> Result<Self, Self::Error> {
        u32::try_from(val)
            .map(Chips)
            .map_err(|_| GameError::InvalidAmount(val))
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl ops::Rem<u32> for Chips {
    type Output = Self;

    fn rem(self, rhs: u32) -> Self::Output {
        Self(self.0 % rhs)
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Player folds and leaves the hand.
    Fold,
    /// Player checks, only when there is no bet.
    Check,
    /// Player matches the current bet.
    Call,
    /// Player raises the current bet by the street limit.
    Raise,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "FOLD",
            PlayerAction::Check => "CHECK",
            PlayerAction::Call => "CALL",
            PlayerAction::Raise => "RAISE",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn chips_from_signed() {
        assert_eq!(Chips::try_from(250i64), Ok(Chips(250)));
        assert_eq!(Chips::try_from(0i64), Ok(Chips::ZERO));
        assert_eq!(Chips::try_from(-5i64), Err(GameError::InvalidAmount(-5)));
        assert!(Chips::try_from(i64::MAX).is_err());
    }

    #[test]
    fn chips_arithmetic_saturates() {
        assert_eq!(Chips(5) - Chips(10), Chips::ZERO);
        assert_eq!(Chips(u32::MAX) + Chips(1), Chips(u32::MAX));
        assert_eq!(Chips(41) / 2, Chips(20));
        assert_eq!(Chips(41) % 2, Chips(1));
        assert_eq!([Chips(1), Chips(2), Chips(3)].into_iter().sum::<Chips>(), Chips(6));
    }
}
