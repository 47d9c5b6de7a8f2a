// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Thirteen Water cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use thirteen_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! a [Deck] type for shuffling and dealing 13 cards hands:
//!
//! ```
//! # use thirteen_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hands = deck.deal_hands(4);
//! assert_eq!(hands.len(), 4);
//! assert!(hands.iter().all(|h| h.len() == 13));
//! assert!(deck.is_empty());
//! ```
//!
//! and the [subsets] module to enumerate k-subsets of a hand by index, for
//! example all the 5 cards back segments of a 13 cards hand:
//!
//! ```
//! # use thirteen_cards::subsets;
//! let mut counter = 0;
//! subsets::for_each_ksubset(13, 5, 0, subsets::nck(13, 5), |idx| {
//!     assert_eq!(idx.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1287);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};

pub mod subsets;
