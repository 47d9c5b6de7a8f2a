// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Thirteen Water hand evaluation.
//!
//! Each player is dealt 13 cards and arranges them into a 3 cards front, a 5
//! cards middle, and a 5 cards back whose strengths must not decrease from
//! front to back. This crate classifies and compares segment hands:
//!
//! ```
//! # use thirteen_eval::*;
//! let trips = classify(&parse_cards("QS QD QC").unwrap()).unwrap();
//! let two_pair = classify(&parse_cards("JS JD 4C 4H 2S").unwrap()).unwrap();
//! assert_eq!(trips.category(), HandCategory::ThreeOfAKind);
//! assert!(trips > two_pair);
//! ```
//!
//! validates arrangements and detects special hands:
//!
//! ```
//! # use thirteen_eval::*;
//! let res = validate(
//!     &parse_cards("QS QD QC").unwrap(),
//!     &parse_cards("9S 9D 2C 4H 6S").unwrap(),
//!     &parse_cards("AH KH QH JH TH").unwrap(),
//! );
//! assert_eq!(res, Ok(Validity::Foul(Foul::FrontOverMiddle)));
//!
//! let dealt = parse_cards("AS KH QD JC TS 9H 8D 7C 6S 5H 4D 3C 2S").unwrap();
//! assert_eq!(detect(&dealt), Ok(SpecialHandKind::Dragon));
//! ```
//!
//! scores a round between 2 to 4 players with configurable [ScoringRules], and
//! searches the best arrangements for a dealt hand:
//!
//! ```
//! # use thirteen_eval::*;
//! let dealt = parse_cards("2S 5H 9D JC KS 3H 7D TC QS AH 4D 8C 8S").unwrap();
//! let res = suggest(&dealt, 3).unwrap();
//! assert!(res.complete);
//! assert!(res.arrangements.iter().all(|r| r.hands.validity == Validity::Legal));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod arrangement;
mod error;
mod hand;
mod optimizer;
mod scoring;
mod special;

pub use arrangement::{ClassifiedArrangement, Foul, PlayerArrangement, Segment, Validity, validate};
pub use error::EvalError;
pub use hand::{ClassifiedHand, HandCategory, HandValue, Tiebreak, classify, compare};
#[cfg(feature = "parallel")]
pub use optimizer::par_suggest;
pub use optimizer::{
    ArrangementScore, RankedArrangement, SuggestOptions, Suggestion, greedy, suggest,
    suggest_with,
};
pub use scoring::{
    PairOutcome, PairResult, PlayerHand, RoundResult, ScoringRules, SegmentBonus,
    SegmentOutcome, SpecialPoints, Winner, score,
};
pub use special::{SpecialHandKind, detect};

// Reexport cards types.
pub use thirteen_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
