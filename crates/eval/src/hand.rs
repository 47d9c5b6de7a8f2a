// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Segment hands classification and comparison.
//!
//! A segment hand has 3 cards (front) or 5 cards (middle and back). Each hand
//! is classified into a [HandCategory] and a [Tiebreak] key, together they form
//! a [HandValue] that totally orders hands: first by category and then
//! lexicographically by the tiebreak ranks.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use thirteen_cards::Card;

use crate::error::{EvalError, cards_mask};

/// Hand categories from the lowest to the highest.
///
/// A 3 cards hand is only ever classified as [HighCard](HandCategory::HighCard),
/// [OnePair](HandCategory::OnePair), or [ThreeOfAKind](HandCategory::ThreeOfAKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the lowest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category position in the categories order, 0 for high card.
    #[inline]
    pub fn level(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The ordered ranks that break ties between hands of the same category.
///
/// Ranks are listed by group first (the quads, trips, or pairs ranks from the
/// highest) followed by the kickers from the highest. The ace of a wheel
/// straight counts as 1. Unused positions are zero, so a 3 cards key compares
/// lower than a 5 cards key that starts with the same ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tiebreak([u8; 5]);

impl Tiebreak {
    /// The tiebreak ranks.
    pub fn ranks(&self) -> &[u8] {
        let len = self.0.iter().take_while(|&&r| r != 0).count();
        &self.0[..len]
    }

    /// Sum of the tiebreak ranks.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&r| r as u32).sum()
    }
}

/// A hand strength, hands with the same value tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    /// The hand category.
    pub category: HandCategory,
    /// The key for ordering hands of the same category.
    pub tiebreak: Tiebreak,
}

/// A classified segment hand.
///
/// Equality and ordering only look at the hand [value](ClassifiedHand::value),
/// two hands with different cards but the same ranks tie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedHand {
    value: HandValue,
    cards: Vec<Card>,
}

impl ClassifiedHand {
    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.value.category
    }

    /// The hand tiebreak key.
    pub fn tiebreak(&self) -> Tiebreak {
        self.value.tiebreak
    }

    /// The hand cards ordered by group and rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ClassifiedHand {}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.value.category)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Classifies a 3 or 5 cards hand.
///
/// Returns [EvalError::InvalidHandShape] for other sizes or if a card is
/// repeated. The result doesn't depend on the cards order.
pub fn classify(cards: &[Card]) -> Result<ClassifiedHand, EvalError> {
    let len = cards.len();
    if len != 3 && len != 5 {
        return Err(EvalError::InvalidHandShape {
            len,
            duplicate: None,
        });
    }

    cards_mask(cards).map_err(|e| match e {
        EvalError::DuplicateCard(card) => EvalError::InvalidHandShape {
            len,
            duplicate: Some(card),
        },
        e => e,
    })?;

    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank().value() as usize] += 1;
    }

    // Distinct ranks ordered by multiplicity and then by rank.
    let mut groups = [(0u8, 0u8); 5];
    let mut ngroups = 0;
    for rank in (2..=14).rev() {
        if counts[rank] > 0 {
            groups[ngroups] = (counts[rank], rank as u8);
            ngroups += 1;
        }
    }
    let groups = &mut groups[..ngroups];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let is_five = cards.len() == 5;
    let is_flush = is_five && cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_wheel = is_five && ngroups == 5 && groups[0].1 == 14 && groups[1].1 == 5;
    let is_straight = is_five && ngroups == 5 && (groups[0].1 - groups[4].1 == 4 || is_wheel);

    let (top, second) = (groups[0].0, groups.get(1).map(|g| g.0).unwrap_or(0));
    let category = if is_straight && is_flush {
        HandCategory::StraightFlush
    } else if top == 4 {
        HandCategory::FourOfAKind
    } else if top == 3 && second == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if top == 3 {
        HandCategory::ThreeOfAKind
    } else if top == 2 && second == 2 {
        HandCategory::TwoPair
    } else if top == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    // The wheel ace plays as a 1.
    let order_rank = |rank: u8| if is_wheel && rank == 14 { 1 } else { rank };

    let mut tiebreak = [0u8; 5];
    for (pos, group) in groups.iter().enumerate() {
        tiebreak[pos] = order_rank(group.1);
    }
    if is_wheel {
        tiebreak = [5, 4, 3, 2, 1];
    }

    let mut cards = cards.to_vec();
    cards.sort_by_key(|c| {
        let rank = c.rank().value();
        (
            std::cmp::Reverse(counts[rank as usize]),
            std::cmp::Reverse(order_rank(rank)),
            c.suit(),
        )
    });

    Ok(ClassifiedHand {
        value: HandValue {
            category,
            tiebreak: Tiebreak(tiebreak),
        },
        cards,
    })
}

/// Compares two classified hands by category and then by tiebreak.
///
/// This is a total order. Hands of different lengths compare the same way,
/// which is how the front segment is checked against the middle segment.
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.cmp(b)
}
