// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use rhode_cards::{Card, Rank};

/// A hand category.
///
/// Categories are numbered from 1 for the strongest to 6 for the weakest, the
/// derived order follows the numbering so a smaller category is a stronger
/// hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Three consecutive ranks of the same suit.
    StraightFlush = 1,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Consecutive ranks, the ace plays high or low.
    Straight,
    /// All cards of the same suit.
    Flush,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl HandRank {
    /// Returns all categories from the strongest to the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [StraightFlush, ThreeOfAKind, Straight, Flush, Pair, HighCard].into_iter()
    }

    /// The category number, 1 is the strongest.
    pub fn category(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::StraightFlush => "Straight Flush",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::Pair => "Pair",
            HandRank::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// The value of a hand, a category and the ranks that break ties within it.
///
/// For straights, three of a kind and pairs the tiebreak is the deciding rank,
/// for flushes and high cards it is all the ranks sorted from the highest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Vec<Rank>,
}

impl HandValue {
    /// The smallest number of cards that can make a straight or a flush.
    pub const MIN_DRAW: usize = 3;

    /// Evaluates a hand of up to five cards.
    ///
    /// Panics if the hand is empty or has more than five cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!(
            (1..=5).contains(&cards.len()),
            "hand must have 1 to 5 cards, got {}",
            cards.len()
        );

        let mut ranks = cards.iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = [0u8; 13];
        for r in &ranks {
            counts[*r as usize] += 1;
        }

        let count = |r: &Rank| counts[*r as usize];

        if let Some(trips) = Rank::ranks().rev().find(|r| count(r) >= 3) {
            return HandValue::new(HandRank::ThreeOfAKind, vec![trips]);
        }

        let is_flush = cards.len() >= Self::MIN_DRAW
            && cards.iter().all(|c| c.suit() == cards[0].suit());

        match (straight_high(&ranks), is_flush) {
            (Some(high), true) => return HandValue::new(HandRank::StraightFlush, vec![high]),
            (Some(high), false) => return HandValue::new(HandRank::Straight, vec![high]),
            (None, true) => return HandValue::new(HandRank::Flush, ranks),
            (None, false) => {}
        }

        if let Some(pair) = Rank::ranks().rev().find(|r| count(r) == 2) {
            return HandValue::new(HandRank::Pair, vec![pair]);
        }

        HandValue::new(HandRank::HighCard, ranks)
    }

    fn new(rank: HandRank, tiebreak: Vec<Rank>) -> Self {
        Self { rank, tiebreak }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller category is stronger.
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.rank)?;
        for (idx, r) in self.tiebreak.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, ")")
    }
}

/// Returns the top rank of a straight given ranks sorted from the highest.
fn straight_high(ranks: &[Rank]) -> Option<Rank> {
    if ranks.len() < HandValue::MIN_DRAW || ranks.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    let is_run = |run: &[Rank]| {
        run.windows(2)
            .all(|w| w[0].value() == w[1].value() + 1)
    };

    if is_run(ranks) {
        return Some(ranks[0]);
    }

    // The wheel, with the ace playing below the deuce.
    let low = &ranks[1..];
    if ranks[0] == Rank::Ace && low.last() == Some(&Rank::Deuce) && is_run(low) {
        return Some(low[0]);
    }

    None
}
