// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// Cards are plain values, two cards are equal if they have the same rank and
/// suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card {0:?}, expected rank and suit like \"AH\" or \"TD\"")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let rank = match r.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | '0' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(err()),
        };

        let suit = match c.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric value of this rank, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no ordering in the game, the derived order is only used to
/// store cards in collections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// Error returned when a deal asks for more cards than are left in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough cards in the deck: requested {requested}, left {left}")]
pub struct DeckExhausted {
    /// The number of cards requested.
    pub requested: usize,
    /// The number of cards left in the deck.
    pub left: usize,
}

/// A cards Deck.
///
/// The deck holds all 52 cards in some order and a cursor that counts the
/// cards dealt so far, `cards_left() + cards_used() == Deck::SIZE` holds at
/// all times.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    used: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles all the cards and puts back the dealt ones.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.used = 0;
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.used).copied()?;
        self.used += 1;
        Some(card)
    }

    /// Deals `n` cards from the deck.
    ///
    /// Either all the cards are dealt or, if there are fewer than `n` cards
    /// left, none is and the deck is left unchanged.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckExhausted> {
        let left = self.cards_left();
        if n > left {
            return Err(DeckExhausted { requested: n, left });
        }

        let cards = self.cards[self.used..self.used + n].to_vec();
        self.used += n;
        Ok(cards)
    }

    /// Number of cards that can still be dealt.
    pub fn cards_left(&self) -> usize {
        self.cards.len() - self.used
    }

    /// Number of cards dealt since the last shuffle.
    pub fn cards_used(&self) -> usize {
        self.used
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards_left() == 0
    }

    /// Calls the `f` closure for each k-cards hand that can be made with the
    /// cards left in the deck.
    ///
    /// Panics if k is not 1 <= k <= 3.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=3).contains(&k), "1 <= k <= 3");

        let cards = &self.cards[self.used..];
        let n = cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 3];

        for c1 in 0..n {
            h[0] = cards[c1];

            if k == 1 {
                f(&h[0..k]);
                continue;
            }

            for c2 in (c1 + 1)..n {
                h[1] = cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = cards[c3];
                    f(&h[0..k]);
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, used: 0 }
    }
}
