// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Whole hand special configurations.
//!
//! A special hand is recognized on the 13 dealt cards, independently of how
//! the player arranged them. The alignment kinds ([ThreeFlushes] and
//! [ThreeStraights]) need the cards to split into a flush or a straight for
//! each segment and are found by searching the segments split.
//!
//! [ThreeFlushes]: SpecialHandKind::ThreeFlushes
//! [ThreeStraights]: SpecialHandKind::ThreeStraights
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use thirteen_cards::{Card, Deck, Suit, subsets};

use crate::{
    arrangement::PlayerArrangement,
    error::{EvalError, cards_mask},
    hand::{HandCategory, classify},
};

/// Special hand kinds from the weakest, [Ordinary](SpecialHandKind::Ordinary)
/// is a hand with no special configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpecialHandKind {
    /// No special configuration.
    Ordinary = 0,
    /// Each segment is a flush, the 3 cards front has a single suit.
    ThreeFlushes,
    /// Each segment is a straight, the front is three consecutive ranks.
    ThreeStraights,
    /// Six pairs, four of a kind counts as two pairs.
    SixPairs,
    /// Five pairs and three of a kind.
    FivePairsAndTriple,
    /// Thirteen distinct ranks from deuce to ace.
    Dragon,
    /// A dragon with all cards of the same suit.
    FlushDragon,
}

impl SpecialHandKind {
    /// Returns all kinds from the weakest.
    pub fn kinds() -> impl DoubleEndedIterator<Item = SpecialHandKind> {
        use SpecialHandKind::*;
        [
            Ordinary,
            ThreeFlushes,
            ThreeStraights,
            SixPairs,
            FivePairsAndTriple,
            Dragon,
            FlushDragon,
        ]
        .into_iter()
    }

    /// Checks if this is a special configuration.
    pub fn is_special(&self) -> bool {
        *self != SpecialHandKind::Ordinary
    }

    /// Checks if the dealt cards make this kind, every hand is
    /// [Ordinary](SpecialHandKind::Ordinary).
    pub fn qualifies(&self, dealt: &[Card]) -> Result<bool, EvalError> {
        check_dealt(dealt)?;
        Ok(self.matches(dealt))
    }

    /// Returns an arrangement with a flush or a straight in each segment for
    /// the alignment kinds, `None` for other kinds or if the cards don't make
    /// this kind.
    pub fn layout(&self, dealt: &[Card]) -> Result<Option<PlayerArrangement>, EvalError> {
        check_dealt(dealt)?;

        let layout = match self {
            SpecialHandKind::ThreeFlushes => three_flushes(dealt),
            SpecialHandKind::ThreeStraights => three_straights(dealt),
            _ => None,
        };

        layout
            .map(|(front, middle, back)| {
                // Put the stronger 5 cards hand in the back.
                let swap = classify(&middle)? > classify(&back)?;
                let (middle, back) = if swap { (back, middle) } else { (middle, back) };
                PlayerArrangement::new(dealt, &front, &middle, &back)
            })
            .transpose()
    }

    fn matches(&self, dealt: &[Card]) -> bool {
        let counts = rank_counts(dealt);
        match self {
            SpecialHandKind::Ordinary => true,
            SpecialHandKind::ThreeFlushes => three_flushes(dealt).is_some(),
            SpecialHandKind::ThreeStraights => three_straights(dealt).is_some(),
            SpecialHandKind::SixPairs => counts.iter().map(|&c| c / 2).sum::<u8>() >= 6,
            SpecialHandKind::FivePairsAndTriple => {
                let pairs = counts.iter().filter(|&&c| c == 2).count();
                let trips = counts.iter().filter(|&&c| c == 3).count();
                pairs == 5 && trips == 1
            }
            SpecialHandKind::Dragon => counts[2..].iter().all(|&c| c == 1),
            SpecialHandKind::FlushDragon => {
                counts[2..].iter().all(|&c| c == 1)
                    && dealt.iter().all(|c| c.suit() == dealt[0].suit())
            }
        }
    }
}

impl fmt::Display for SpecialHandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialHandKind::Ordinary => "Ordinary",
            SpecialHandKind::ThreeFlushes => "Three Flushes",
            SpecialHandKind::ThreeStraights => "Three Straights",
            SpecialHandKind::SixPairs => "Six Pairs",
            SpecialHandKind::FivePairsAndTriple => "Five Pairs and Triple",
            SpecialHandKind::Dragon => "Dragon",
            SpecialHandKind::FlushDragon => "Flush Dragon",
        };

        write!(f, "{name}")
    }
}

/// Detects the strongest special configuration the dealt cards make.
///
/// Returns [Ordinary](SpecialHandKind::Ordinary) if there is none, errors
/// if the dealt hand doesn't have 13 distinct cards.
pub fn detect(dealt: &[Card]) -> Result<SpecialHandKind, EvalError> {
    check_dealt(dealt)?;

    let kind = SpecialHandKind::kinds()
        .rev()
        .find(|kind| kind.matches(dealt))
        .unwrap_or(SpecialHandKind::Ordinary);

    if kind.is_special() {
        debug!("Detected special hand {kind}");
    }

    Ok(kind)
}

fn check_dealt(dealt: &[Card]) -> Result<(), EvalError> {
    if dealt.len() != Deck::HAND_SIZE {
        return Err(EvalError::DealtSize(dealt.len()));
    }

    cards_mask(dealt).map(|_| ())
}

fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank().value() as usize] += 1;
    }
    counts
}

type Layout = (Vec<Card>, Vec<Card>, Vec<Card>);

/// Splits the cards into single suited 3, 5, and 5 cards groups.
fn three_flushes(dealt: &[Card]) -> Option<Layout> {
    let mut counts = [0usize; 4];
    for card in dealt {
        counts[card.suit() as usize] += 1;
    }

    // Try each suits assignment for the front, middle, and back.
    for fs in Suit::suits() {
        for ms in Suit::suits() {
            for bs in Suit::suits() {
                let mut sizes = [0usize; 4];
                sizes[fs as usize] += 3;
                sizes[ms as usize] += 5;
                sizes[bs as usize] += 5;

                if sizes != counts {
                    continue;
                }

                let mut pools = Suit::suits()
                    .map(|s| {
                        dealt
                            .iter()
                            .copied()
                            .filter(|c| c.suit() == s)
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>();

                let mut take = |suit: Suit, size: usize| {
                    let pool = &mut pools[suit as usize];
                    pool.split_off(pool.len() - size)
                };

                let front = take(fs, 3);
                let middle = take(ms, 5);
                let back = take(bs, 5);
                return Some((front, middle, back));
            }
        }
    }

    None
}

/// Checks if three cards have consecutive ranks, with ace high or low.
fn is_three_run(cards: &[Card]) -> bool {
    let mut ranks = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
    ranks.sort_unstable();
    ranks.dedup();
    ranks.len() == 3 && (ranks[2] - ranks[0] == 2 || ranks == [2, 3, 14])
}

fn is_five_run(cards: &[Card]) -> bool {
    classify(cards)
        .map(|h| {
            matches!(
                h.category(),
                HandCategory::Straight | HandCategory::StraightFlush
            )
        })
        .unwrap_or(false)
}

/// Searches a split of the cards into three straights.
fn three_straights(dealt: &[Card]) -> Option<Layout> {
    let n = dealt.len();
    let mut found = None;

    subsets::for_each_ksubset(n, 5, 0, subsets::nck(n, 5), |back_idx| {
        if found.is_some() {
            return;
        }

        let back = back_idx.iter().map(|&i| dealt[i]).collect::<Vec<_>>();
        if !is_five_run(&back) {
            return;
        }

        let rest = (0..n)
            .filter(|i| !back_idx.contains(i))
            .map(|i| dealt[i])
            .collect::<Vec<_>>();

        subsets::for_each_ksubset(rest.len(), 5, 0, subsets::nck(rest.len(), 5), |mid_idx| {
            if found.is_some() {
                return;
            }

            let middle = mid_idx.iter().map(|&i| rest[i]).collect::<Vec<_>>();
            let front = (0..rest.len())
                .filter(|i| !mid_idx.contains(i))
                .map(|i| rest[i])
                .collect::<Vec<_>>();

            if is_five_run(&middle) && is_three_run(&front) {
                found = Some((front, middle, back.clone()));
            }
        });
    });

    found
}
