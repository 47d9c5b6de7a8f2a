// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Player arrangements and the segments order rule.
use serde::{Deserialize, Serialize};
use std::fmt;

use thirteen_cards::{Card, Deck};

use crate::{
    error::{EvalError, cards_mask},
    hand::{ClassifiedHand, HandValue, classify},
};

/// One of the three segments a dealt hand is arranged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// The 3 cards segment.
    Front,
    /// The first 5 cards segment.
    Middle,
    /// The last 5 cards segment.
    Back,
}

impl Segment {
    /// Returns all segments from the front.
    pub fn segments() -> impl DoubleEndedIterator<Item = Segment> {
        [Segment::Front, Segment::Middle, Segment::Back].into_iter()
    }

    /// The number of cards in this segment.
    pub const fn size(&self) -> usize {
        match self {
            Segment::Front => 3,
            Segment::Middle | Segment::Back => 5,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Front => "front",
            Segment::Middle => "middle",
            Segment::Back => "back",
        };

        write!(f, "{name}")
    }
}

/// The segment boundary a foul arrangement breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foul {
    /// The front hand beats the middle hand.
    FrontOverMiddle,
    /// The middle hand beats the back hand.
    MiddleOverBack,
}

/// The outcome of checking the segments order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validity {
    /// Front <= middle <= back.
    Legal,
    /// The segments are misarranged.
    Foul(Foul),
}

impl Validity {
    /// Checks if this is a foul.
    pub fn is_foul(&self) -> bool {
        matches!(self, Validity::Foul(_))
    }
}

/// Checks the segments values order, ties between adjacent segments are legal.
pub(crate) fn check_order(front: HandValue, middle: HandValue, back: HandValue) -> Validity {
    if front > middle {
        Validity::Foul(Foul::FrontOverMiddle)
    } else if middle > back {
        Validity::Foul(Foul::MiddleOverBack)
    } else {
        Validity::Legal
    }
}

fn check_size(segment: Segment, cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() != segment.size() {
        Err(EvalError::SegmentLength {
            segment,
            expected: segment.size(),
            actual: cards.len(),
        })
    } else {
        Ok(())
    }
}

/// Checks that the front, middle, and back segments are in non-decreasing
/// strength order.
///
/// A misarranged hand is a [Validity::Foul] not an error, errors are returned
/// for segments of the wrong size or repeated cards.
pub fn validate(front: &[Card], middle: &[Card], back: &[Card]) -> Result<Validity, EvalError> {
    check_size(Segment::Front, front)?;
    check_size(Segment::Middle, middle)?;
    check_size(Segment::Back, back)?;

    let cards = [front, middle, back].concat();
    cards_mask(&cards)?;

    let (front, middle, back) = (classify(front)?, classify(middle)?, classify(back)?);
    Ok(check_order(front.value(), middle.value(), back.value()))
}

/// A player 13 dealt cards arranged into the three segments.
///
/// The segments always partition the dealt cards exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerArrangement {
    dealt: Vec<Card>,
    front: Vec<Card>,
    middle: Vec<Card>,
    back: Vec<Card>,
}

impl PlayerArrangement {
    /// Creates an arrangement checking that the segments partition the dealt cards.
    pub fn new(
        dealt: &[Card],
        front: &[Card],
        middle: &[Card],
        back: &[Card],
    ) -> Result<Self, EvalError> {
        if dealt.len() != Deck::HAND_SIZE {
            return Err(EvalError::DealtSize(dealt.len()));
        }

        let dealt_mask = cards_mask(dealt)?;

        check_size(Segment::Front, front)?;
        check_size(Segment::Middle, middle)?;
        check_size(Segment::Back, back)?;

        let segments = [front, middle, back].concat();
        if let Some(card) = segments.iter().find(|c| dealt_mask & c.mask() == 0) {
            return Err(EvalError::ForeignCard(*card));
        }

        // 13 distinct cards from the dealt hand are the dealt hand.
        cards_mask(&segments)?;

        Ok(Self {
            dealt: dealt.to_vec(),
            front: front.to_vec(),
            middle: middle.to_vec(),
            back: back.to_vec(),
        })
    }

    /// Creates an arrangement whose dealt cards are the segments cards.
    pub fn from_segments(front: &[Card], middle: &[Card], back: &[Card]) -> Result<Self, EvalError> {
        let dealt = [front, middle, back].concat();
        Self::new(&dealt, front, middle, back)
    }

    /// The dealt cards.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// The front segment cards.
    pub fn front(&self) -> &[Card] {
        &self.front
    }

    /// The middle segment cards.
    pub fn middle(&self) -> &[Card] {
        &self.middle
    }

    /// The back segment cards.
    pub fn back(&self) -> &[Card] {
        &self.back
    }

    /// The cards for the given segment.
    pub fn segment(&self, segment: Segment) -> &[Card] {
        match segment {
            Segment::Front => &self.front,
            Segment::Middle => &self.middle,
            Segment::Back => &self.back,
        }
    }

    /// Classifies the segments and checks their order.
    pub fn classify(&self) -> Result<ClassifiedArrangement, EvalError> {
        let front = classify(&self.front)?;
        let middle = classify(&self.middle)?;
        let back = classify(&self.back)?;
        let validity = check_order(front.value(), middle.value(), back.value());

        Ok(ClassifiedArrangement {
            front,
            middle,
            back,
            validity,
        })
    }

    /// Checks the segments order.
    pub fn validate(&self) -> Result<Validity, EvalError> {
        self.classify().map(|c| c.validity)
    }
}

impl fmt::Display for PlayerArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in Segment::segments() {
            if segment != Segment::Front {
                write!(f, " | ")?;
            }

            let cards = self.segment(segment);
            for (idx, card) in cards.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{card}")?;
            }
        }

        Ok(())
    }
}

/// An arrangement with its segments classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedArrangement {
    /// The front hand.
    pub front: ClassifiedHand,
    /// The middle hand.
    pub middle: ClassifiedHand,
    /// The back hand.
    pub back: ClassifiedHand,
    /// The segments order check.
    pub validity: Validity,
}

impl ClassifiedArrangement {
    /// The hand for a segment.
    pub fn hand(&self, segment: Segment) -> &ClassifiedHand {
        match segment {
            Segment::Front => &self.front,
            Segment::Middle => &self.middle,
            Segment::Back => &self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thirteen_cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn legal_arrangement() {
        let res = validate(
            &cards("2S 2D 7C"),
            &cards("9S 9D 9C 4H 4S"),
            &cards("AH KH QH JH TH"),
        );
        assert_eq!(res, Ok(Validity::Legal));
    }

    #[test]
    fn front_over_middle_is_foul() {
        // Front trips against a middle pair, with a royal flush back.
        let res = validate(
            &cards("QS QD QC"),
            &cards("9S 9D 2C 4H 6S"),
            &cards("AH KH QH JH TH"),
        );
        assert_eq!(res, Ok(Validity::Foul(Foul::FrontOverMiddle)));

        let res = validate(
            &cards("QS QD 3C"),
            &cards("QH QC 2C 4H 6S"),
            &cards("AH KH JH TH 9H"),
        );
        assert_eq!(res, Ok(Validity::Legal));

        let res = validate(
            &cards("QS QD AC"),
            &cards("QH QC KC 4H 6S"),
            &cards("AH KH JH TH 8H"),
        );
        assert_eq!(res, Ok(Validity::Foul(Foul::FrontOverMiddle)));
    }

    #[test]
    fn middle_over_back_is_foul() {
        let res = validate(
            &cards("2S 3D 5C"),
            &cards("AH KH JH TH 8H"),
            &cards("KS KD 9C 4S 6S"),
        );
        assert_eq!(res, Ok(Validity::Foul(Foul::MiddleOverBack)));
    }

    #[test]
    fn equal_segments_are_legal() {
        let res = validate(
            &cards("2S 3D 4C"),
            &cards("KS KD 5C 3C 2C"),
            &cards("KH KC 5D 3H 2D"),
        );
        assert_eq!(res, Ok(Validity::Legal));
    }

    #[test]
    fn structural_errors() {
        let res = validate(
            &cards("2S 3D"),
            &cards("KS KD 5C 3C 2C"),
            &cards("KH KC 5D 3H 2D"),
        );
        assert_eq!(
            res,
            Err(EvalError::SegmentLength {
                segment: Segment::Front,
                expected: 3,
                actual: 2
            })
        );

        let res = validate(
            &cards("2S 3D 5C"),
            &cards("KS KD 5C 3C 2C"),
            &cards("KH KC 5D 3H 2D"),
        );
        assert_eq!(res, Err(EvalError::DuplicateCard("5C".parse().unwrap())));
    }

    #[test]
    fn player_arrangement() {
        let front = cards("2S 3D 4C");
        let middle = cards("KS KD 5C 3C 2C");
        let back = cards("AH AC 5D 3H 2D");
        let dealt = [back.clone(), front.clone(), middle.clone()].concat();

        let arr = PlayerArrangement::new(&dealt, &front, &middle, &back).unwrap();
        assert_eq!(arr.dealt().len(), 13);
        assert_eq!(arr.segment(Segment::Middle), middle.as_slice());
        assert_eq!(arr.validate(), Ok(Validity::Legal));
        assert_eq!(arr.to_string(), "2S 3D 4C | KS KD 5C 3C 2C | AH AC 5D 3H 2D");

        let classified = arr.classify().unwrap();
        assert_eq!(
            classified.hand(Segment::Back).category(),
            crate::HandCategory::OnePair
        );

        let same = PlayerArrangement::from_segments(&front, &middle, &back).unwrap();
        assert_eq!(same.front(), arr.front());
    }

    #[test]
    fn player_arrangement_errors() {
        let front = cards("2S 3D 4C");
        let middle = cards("KS KD 5C 3C 2C");
        let back = cards("AH AC 5D 3H 2D");
        let dealt = [front.clone(), middle.clone(), back.clone()].concat();

        assert_eq!(
            PlayerArrangement::new(&dealt[1..], &front, &middle, &back),
            Err(EvalError::DealtSize(12))
        );

        let foreign = cards("2S 3D 9C");
        assert_eq!(
            PlayerArrangement::new(&dealt, &foreign, &middle, &back),
            Err(EvalError::ForeignCard("9C".parse().unwrap()))
        );

        let repeated = cards("2S 3D 2S");
        assert_eq!(
            PlayerArrangement::new(&dealt, &repeated, &middle, &back),
            Err(EvalError::DuplicateCard("2S".parse().unwrap()))
        );

        let mut dup_dealt = dealt.clone();
        dup_dealt[12] = dup_dealt[0];
        assert_eq!(
            PlayerArrangement::new(&dup_dealt, &front, &middle, &back),
            Err(EvalError::DuplicateCard("2S".parse().unwrap()))
        );
    }
}
