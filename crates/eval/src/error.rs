// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Structural errors.
use thirteen_cards::Card;

use crate::{arrangement::Segment, special::SpecialHandKind};

/// Error returned when the caller passes cards that break an input contract.
///
/// Game outcomes like a foul arrangement are not errors, see
/// [Validity](crate::Validity).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A hand to classify doesn't have 3 or 5 distinct cards.
    #[error("invalid hand shape: expected 3 or 5 distinct cards, got {len}")]
    InvalidHandShape {
        /// The number of cards passed.
        len: usize,
        /// The first repeated card.
        duplicate: Option<Card>,
    },
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A segment has the wrong number of cards.
    #[error("{segment} segment must have {expected} cards, got {actual}")]
    SegmentLength {
        /// The segment.
        segment: Segment,
        /// The segment size.
        expected: usize,
        /// The number of cards passed.
        actual: usize,
    },
    /// A dealt hand doesn't have 13 cards.
    #[error("a dealt hand must have 13 cards, got {0}")]
    DealtSize(usize),
    /// A segment card that is not in the dealt hand.
    #[error("card {0} is not part of the dealt hand")]
    ForeignCard(Card),
    /// A declared special hand the dealt cards don't make.
    #[error("dealt hand does not qualify for {0}")]
    UnqualifiedSpecial(SpecialHandKind),
    /// A round with less than two players.
    #[error("a round needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),
    /// Scoring rules with a multiplier or points out of range.
    #[error("invalid scoring rules: {0}")]
    InvalidRules(String),
}

/// Checks cards for duplicates and returns their cards mask.
pub(crate) fn cards_mask(cards: &[Card]) -> Result<u64, EvalError> {
    cards.iter().try_fold(0u64, |mask, card| {
        if mask & card.mask() != 0 {
            Err(EvalError::DuplicateCard(*card))
        } else {
            Ok(mask | card.mask())
        }
    })
}
