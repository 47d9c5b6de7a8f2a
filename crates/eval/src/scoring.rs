// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Round scoring.
//!
//! Every pair of players is scored independently and the pair delta is added
//! to the first player and subtracted from the second, so a round is always
//! zero sum. The bonus and special hands points are house rules and are
//! configured with [ScoringRules].
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    arrangement::{ClassifiedArrangement, PlayerArrangement, Segment},
    error::EvalError,
    hand::HandCategory,
    special::{SpecialHandKind, detect},
};

/// Extra points paid when a segment is won with at least the given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBonus {
    /// The segment this bonus applies to.
    pub segment: Segment,
    /// The lowest winning category that gets the bonus.
    pub category: HandCategory,
    /// The points added to the segment base point.
    pub points: i32,
}

/// Points paid by a special hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialPoints {
    /// The special hand kind.
    pub kind: SpecialHandKind,
    /// The points won against each weaker hand.
    pub points: i32,
}

/// House rules for scoring a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Multiplies a pair delta when a player wins all three segments.
    pub scoop_multiplier: i32,
    /// Segment win bonuses, the largest matching bonus is paid.
    pub segment_bonuses: Vec<SegmentBonus>,
    /// Special hands points.
    pub special_points: Vec<SpecialPoints>,
    /// A foul loses all three segments as a scoop.
    pub foul_is_scoop: bool,
    /// With three or more players, multiplies again the pair deltas of a
    /// player who scoops every opponent, 1 disables it.
    pub sweep_multiplier: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        use HandCategory::*;
        use Segment::*;

        let bonus = |segment, category, points| SegmentBonus {
            segment,
            category,
            points,
        };

        let special = |kind, points| SpecialPoints { kind, points };

        Self {
            scoop_multiplier: 2,
            segment_bonuses: vec![
                bonus(Front, ThreeOfAKind, 2),
                bonus(Middle, FullHouse, 1),
                bonus(Middle, FourOfAKind, 7),
                bonus(Middle, StraightFlush, 9),
                bonus(Back, FourOfAKind, 3),
                bonus(Back, StraightFlush, 4),
            ],
            special_points: vec![
                special(SpecialHandKind::ThreeFlushes, 3),
                special(SpecialHandKind::ThreeStraights, 3),
                special(SpecialHandKind::SixPairs, 3),
                special(SpecialHandKind::FivePairsAndTriple, 5),
                special(SpecialHandKind::Dragon, 13),
                special(SpecialHandKind::FlushDragon, 26),
            ],
            foul_is_scoop: true,
            sweep_multiplier: 1,
        }
    }
}

impl ScoringRules {
    /// Largest scoop or sweep multiplier.
    pub const MAX_MULTIPLIER: i32 = 10;

    /// Largest bonus or special hand points.
    pub const MAX_POINTS: i32 = 1000;

    /// Checks that multipliers are in `1..=MAX_MULTIPLIER` and points in
    /// `0..=MAX_POINTS`, which keeps every delta of a round in range.
    pub fn check(&self) -> Result<(), EvalError> {
        let multipliers = [
            ("scoop multiplier", self.scoop_multiplier),
            ("sweep multiplier", self.sweep_multiplier),
        ];

        for (name, value) in multipliers {
            if !(1..=Self::MAX_MULTIPLIER).contains(&value) {
                return Err(EvalError::InvalidRules(format!(
                    "{name} {value} not in 1..={}",
                    Self::MAX_MULTIPLIER
                )));
            }
        }

        let points = self
            .segment_bonuses
            .iter()
            .map(|b| b.points)
            .chain(self.special_points.iter().map(|sp| sp.points));

        for value in points {
            if !(0..=Self::MAX_POINTS).contains(&value) {
                return Err(EvalError::InvalidRules(format!(
                    "points {value} not in 0..={}",
                    Self::MAX_POINTS
                )));
            }
        }

        Ok(())
    }

    /// Rules with no bonuses where each segment is worth one point.
    pub fn plain() -> Self {
        Self {
            segment_bonuses: Vec::new(),
            ..Self::default()
        }
    }

    /// The points for winning a segment with a hand of the given category.
    pub fn segment_points(&self, segment: Segment, category: HandCategory) -> i32 {
        let bonus = self
            .segment_bonuses
            .iter()
            .filter(|b| b.segment == segment && b.category <= category)
            .map(|b| b.points)
            .max()
            .unwrap_or(0);
        1 + bonus
    }

    /// The points a special hand wins, zero if it has no entry.
    pub fn points_for(&self, kind: SpecialHandKind) -> i32 {
        self.special_points
            .iter()
            .find(|sp| sp.kind == kind)
            .map(|sp| sp.points)
            .unwrap_or(0)
    }
}

/// A player input for scoring.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    /// The player arrangement.
    pub arrangement: PlayerArrangement,
    /// The special hand the player declared, or ordinary to play the segments.
    pub special: SpecialHandKind,
}

impl PlayerHand {
    /// A player that plays the segments.
    pub fn ordinary(arrangement: PlayerArrangement) -> Self {
        Self {
            arrangement,
            special: SpecialHandKind::Ordinary,
        }
    }

    /// A player that declares the strongest special hand the dealt cards make.
    pub fn with_detected_special(arrangement: PlayerArrangement) -> Result<Self, EvalError> {
        let special = detect(arrangement.dealt())?;
        Ok(Self {
            arrangement,
            special,
        })
    }
}

/// Which player of a pair won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The first player.
    First,
    /// The second player.
    Second,
    /// Nobody.
    Tie,
}

/// A segment comparison between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOutcome {
    /// The segment winner.
    pub winner: Winner,
    /// The segment points from the first player perspective.
    pub points: i32,
}

/// How a pair of players was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    /// At least one player has a special hand.
    Special {
        /// The first player special hand.
        first: SpecialHandKind,
        /// The second player special hand.
        second: SpecialHandKind,
    },
    /// Segment by segment comparison.
    Segments {
        /// The front segments outcome.
        front: SegmentOutcome,
        /// The middle segments outcome.
        middle: SegmentOutcome,
        /// The back segments outcome.
        back: SegmentOutcome,
        /// The player who won all three segments.
        scoop: Option<Winner>,
        /// The first player fouled.
        first_foul: bool,
        /// The second player fouled.
        second_foul: bool,
    },
}

/// The score between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    /// The first player index.
    pub first: usize,
    /// The second player index, always greater than first.
    pub second: usize,
    /// The pair outcome.
    pub outcome: PairOutcome,
    /// The points the first player wins from the second, negative if it loses.
    pub delta: i32,
}

/// A round score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The result for each pair of players.
    pub pairs: Vec<PairResult>,
    /// The players who scooped every opponent and had their deltas multiplied.
    pub sweeps: Vec<usize>,
    /// Each player net points for the round.
    pub net: Vec<i32>,
}

impl RoundResult {
    /// A player net points, None if there is no such player.
    pub fn net(&self, player: usize) -> Option<i32> {
        self.net.get(player).copied()
    }

    /// The points `player` won from `opponent`, None if they are not a pair.
    pub fn delta(&self, player: usize, opponent: usize) -> Option<i32> {
        self.pairs.iter().find_map(|p| {
            if p.first == player && p.second == opponent {
                Some(p.delta)
            } else if p.first == opponent && p.second == player {
                Some(-p.delta)
            } else {
                None
            }
        })
    }
}

/// Scores a round.
///
/// Each player must be a legal [PlayerArrangement], a declared special hand
/// must be made by the player dealt cards or [EvalError::UnqualifiedSpecial]
/// is returned. Fouls are scored as a loss of all segments. Rules that fail
/// [ScoringRules::check] return [EvalError::InvalidRules].
pub fn score(players: &[PlayerHand], rules: &ScoringRules) -> Result<RoundResult, EvalError> {
    if players.len() < 2 {
        return Err(EvalError::NotEnoughPlayers(players.len()));
    }

    rules.check()?;

    for player in players {
        if player.special.is_special() && !player.special.qualifies(player.arrangement.dealt())? {
            return Err(EvalError::UnqualifiedSpecial(player.special));
        }
    }

    let classified = players
        .iter()
        .map(|p| p.arrangement.classify())
        .collect::<Result<Vec<_>, _>>()?;

    let mut pairs = Vec::with_capacity(players.len() * (players.len() - 1) / 2);
    for first in 0..players.len() {
        for second in (first + 1)..players.len() {
            let (outcome, delta) = score_pair(
                (players[first].special, &classified[first]),
                (players[second].special, &classified[second]),
                rules,
            );

            trace!("Pair {first}-{second} {outcome:?} delta {delta}");

            pairs.push(PairResult {
                first,
                second,
                outcome,
                delta,
            });
        }
    }

    let sweeps = apply_sweeps(players.len(), &mut pairs, rules);

    let mut net = vec![0; players.len()];
    for pair in &pairs {
        net[pair.first] += pair.delta;
        net[pair.second] -= pair.delta;
    }

    debug!("Round scored net {net:?} sweeps {sweeps:?}");

    Ok(RoundResult { pairs, sweeps, net })
}

fn score_pair(
    (first_special, first): (SpecialHandKind, &ClassifiedArrangement),
    (second_special, second): (SpecialHandKind, &ClassifiedArrangement),
    rules: &ScoringRules,
) -> (PairOutcome, i32) {
    if first_special.is_special() || second_special.is_special() {
        let delta = match first_special.cmp(&second_special) {
            std::cmp::Ordering::Greater => rules.points_for(first_special),
            std::cmp::Ordering::Less => -rules.points_for(second_special),
            std::cmp::Ordering::Equal => 0,
        };

        let outcome = PairOutcome::Special {
            first: first_special,
            second: second_special,
        };

        return (outcome, delta);
    }

    let first_foul = first.validity.is_foul();
    let second_foul = second.validity.is_foul();

    let compare_segment = |segment: Segment| {
        let (a, b) = (first.hand(segment), second.hand(segment));
        let winner = match (first_foul, second_foul) {
            (true, true) => Winner::Tie,
            (true, false) => Winner::Second,
            (false, true) => Winner::First,
            (false, false) => match a.cmp(b) {
                std::cmp::Ordering::Greater => Winner::First,
                std::cmp::Ordering::Less => Winner::Second,
                std::cmp::Ordering::Equal => Winner::Tie,
            },
        };

        let points = match winner {
            Winner::First => rules.segment_points(segment, a.category()),
            Winner::Second => -rules.segment_points(segment, b.category()),
            Winner::Tie => 0,
        };

        SegmentOutcome { winner, points }
    };

    let (front, middle, back) = (
        compare_segment(Segment::Front),
        compare_segment(Segment::Middle),
        compare_segment(Segment::Back),
    );

    let scoop = [front.winner, middle.winner, back.winner]
        .into_iter()
        .reduce(|acc, w| if acc == w { acc } else { Winner::Tie })
        .filter(|w| *w != Winner::Tie)
        .filter(|_| rules.foul_is_scoop || !(first_foul || second_foul));

    let mut delta = front.points + middle.points + back.points;
    if scoop.is_some() {
        delta *= rules.scoop_multiplier;
    }

    let outcome = PairOutcome::Segments {
        front,
        middle,
        back,
        scoop,
        first_foul,
        second_foul,
    };

    (outcome, delta)
}

/// Multiplies the deltas of players who scooped all their opponents.
fn apply_sweeps(num_players: usize, pairs: &mut [PairResult], rules: &ScoringRules) -> Vec<usize> {
    if num_players < 3 || rules.sweep_multiplier == 1 {
        return Vec::new();
    }

    let scooped = |pair: &PairResult, player: usize| {
        let side = if pair.first == player {
            Winner::First
        } else {
            Winner::Second
        };

        matches!(pair.outcome, PairOutcome::Segments { scoop: Some(w), .. } if w == side)
    };

    let sweeps = (0..num_players)
        .filter(|&player| {
            pairs
                .iter()
                .filter(|p| p.first == player || p.second == player)
                .all(|p| scooped(p, player))
        })
        .collect::<Vec<_>>();

    for &player in &sweeps {
        for pair in pairs
            .iter_mut()
            .filter(|p| p.first == player || p.second == player)
        {
            pair.delta *= rules.sweep_multiplier;
        }
    }

    sweeps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{prelude::*, rngs::SmallRng};
    use thirteen_cards::{Card, Deck, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn player(front: &str, middle: &str, back: &str) -> PlayerHand {
        let arr =
            PlayerArrangement::from_segments(&cards(front), &cards(middle), &cards(back)).unwrap();
        PlayerHand::ordinary(arr)
    }

    fn strong() -> PlayerHand {
        // Pair, full house, and four of a kind.
        player("QS QD 2C", "9S 9D 9C 4H 4S", "KS KD KC KH 3D")
    }

    fn weak() -> PlayerHand {
        // High card, two pair, and flush.
        player("AH 7D 5C", "JH JC 8D 8C 6S", "2H 5H 8H TH QH")
    }

    #[test]
    fn scoop_doubles_delta() {
        let res = score(&[strong(), weak()], &ScoringRules::plain()).unwrap();
        assert_eq!(res.pairs.len(), 1);

        let pair = res.pairs[0];
        assert_eq!(pair.delta, 6);
        assert!(matches!(
            pair.outcome,
            PairOutcome::Segments {
                scoop: Some(Winner::First),
                ..
            }
        ));
        assert_eq!(res.net, vec![6, -6]);
    }

    #[test]
    fn scoop_with_bonuses() {
        let res = score(&[weak(), strong()], &ScoringRules::default()).unwrap();
        let PairOutcome::Segments {
            front,
            middle,
            back,
            scoop,
            ..
        } = res.pairs[0].outcome
        else {
            panic!("Expected segments outcome");
        };

        assert_eq!(front.points, -1);
        // Middle full house and back four of a kind bonuses.
        assert_eq!(middle.points, -2);
        assert_eq!(back.points, -4);
        assert_eq!(scoop, Some(Winner::Second));
        assert_eq!(res.net, vec![-14, 14]);
        assert_eq!(res.delta(1, 0), Some(14));
        assert_eq!(res.delta(0, 1), Some(-14));
        assert_eq!(res.delta(0, 2), None);
    }

    #[test]
    fn split_segments() {
        let p1 = player("AS KD 2C", "3S 3D 6C 8H TS", "KS KH 5C 5H 9S");
        let p2 = player("2S 3D 4C", "7S 7D 9C JH QS", "AH AC 6S 6D 8C");
        let res = score(&[p1, p2], &ScoringRules::plain()).unwrap();

        let PairOutcome::Segments {
            front,
            middle,
            back,
            scoop,
            ..
        } = res.pairs[0].outcome
        else {
            panic!("Expected segments outcome");
        };

        assert_eq!(front.winner, Winner::First);
        assert_eq!(middle.winner, Winner::Second);
        assert_eq!(back.winner, Winner::Second);
        assert_eq!(scoop, None);
        assert_eq!(res.net, vec![-1, 1]);
    }

    #[test]
    fn tied_segments() {
        let p1 = player("2S 3D 5C", "KS KD 7C 4H 2H", "AS AD 9C 8H 6S");
        let p2 = player("2D 3C 5H", "KH KC 7D 4S 2C", "AH AC 9D 8S 6D");
        let res = score(&[p1, p2], &ScoringRules::default()).unwrap();
        assert_eq!(res.net, vec![0, 0]);
    }

    #[test]
    fn foul_loses_all_segments() {
        // Front trips over a middle pair.
        let foul = player("QS QD QC", "9S 9D 2C 4H 6S", "AH KH JH TH 8H");
        let res = score(&[foul, weak()], &ScoringRules::plain()).unwrap();
        let PairOutcome::Segments {
            scoop, first_foul, ..
        } = res.pairs[0].outcome
        else {
            panic!("Expected segments outcome");
        };
        assert!(first_foul);
        assert_eq!(scoop, Some(Winner::Second));
        assert_eq!(res.net, vec![-6, 6]);

        let rules = ScoringRules {
            foul_is_scoop: false,
            ..ScoringRules::plain()
        };
        let foul = player("QS QD QC", "9S 9D 2C 4H 6S", "AH KH JH TH 8H");
        let res = score(&[foul, weak()], &rules).unwrap();
        assert_eq!(res.net, vec![-3, 3]);

        // Two fouls tie.
        let f1 = player("QS QD QC", "9S 9D 2C 4H 6S", "AH KH JH TH 8H");
        let f2 = player("AS AD AC", "2S 3D 5C 7H 8S", "KS KD 4C 6H 9D");
        let res = score(&[f1, f2], &ScoringRules::default()).unwrap();
        assert_eq!(res.net, vec![0, 0]);
    }

    #[test]
    fn special_hands_override_segments() {
        let six_pairs = cards("2S 2H 5D 5C 7S 7H 9D 9C JS JH KD KC AS");
        let arr = PlayerArrangement::from_segments(&six_pairs[..3], &six_pairs[3..8], &six_pairs[8..])
            .unwrap();
        let special = PlayerHand::with_detected_special(arr).unwrap();
        assert_eq!(special.special, SpecialHandKind::SixPairs);

        let res = score(&[strong(), special.clone()], &ScoringRules::default()).unwrap();
        assert_eq!(res.net, vec![-3, 3]);
        assert!(matches!(res.pairs[0].outcome, PairOutcome::Special { .. }));

        let dragon = cards("2S 3H 4D 5C 6S 7H 8D 9C TS JH QD KC AS");
        let arr =
            PlayerArrangement::from_segments(&dragon[..3], &dragon[3..8], &dragon[8..]).unwrap();
        let dragon = PlayerHand::with_detected_special(arr).unwrap();
        assert_eq!(dragon.special, SpecialHandKind::Dragon);

        let res = score(&[special.clone(), dragon.clone()], &ScoringRules::default()).unwrap();
        assert_eq!(res.net, vec![-13, 13]);

        // Same kind draws.
        let res = score(&[special.clone(), special], &ScoringRules::default()).unwrap();
        assert_eq!(res.net, vec![0, 0]);
    }

    #[test]
    fn unqualified_special() {
        let mut p = strong();
        p.special = SpecialHandKind::Dragon;
        assert_eq!(
            score(&[p, weak()], &ScoringRules::default()).unwrap_err(),
            EvalError::UnqualifiedSpecial(SpecialHandKind::Dragon)
        );
    }

    #[test]
    fn not_enough_players() {
        assert_eq!(
            score(&[strong()], &ScoringRules::default()).unwrap_err(),
            EvalError::NotEnoughPlayers(1)
        );
    }

    #[test]
    fn sweep_multiplies_deltas() {
        let p0 = player("AS AD AC", "2H 3H 4H 5H 6H", "9S TS JS QS KS");
        let p1 = player("2S 3D 5C", "7D 8C 9D JC QD", "KD KC 4D 6C 8D");
        let p2 = player("2C 3S 4S", "6S 7S 9C TC JH", "QC QH 5D 7H 8H");
        let players = [p0, p1, p2];

        let res = score(&players, &ScoringRules::default()).unwrap();
        assert!(res.sweeps.is_empty());
        assert_eq!(res.delta(0, 1), Some(36));
        assert_eq!(res.delta(0, 2), Some(36));
        assert_eq!(res.delta(1, 2), Some(6));
        assert_eq!(res.net, vec![72, -30, -42]);

        let rules = ScoringRules {
            sweep_multiplier: 2,
            ..ScoringRules::default()
        };
        let res = score(&players, &rules).unwrap();
        assert_eq!(res.sweeps, vec![0]);
        assert_eq!(res.net, vec![144, -66, -78]);
    }

    #[test]
    fn rounds_are_zero_sum() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let rules = ScoringRules {
            sweep_multiplier: 3,
            ..ScoringRules::default()
        };

        for round in 0..200 {
            let num_players = 2 + round % 3;
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let players = deck
                .deal_hands(num_players)
                .into_iter()
                .map(|hand| {
                    let arr =
                        PlayerArrangement::new(&hand, &hand[..3], &hand[3..8], &hand[8..]).unwrap();
                    PlayerHand::with_detected_special(arr).unwrap()
                })
                .collect::<Vec<_>>();

            let res = score(&players, &rules).unwrap();
            assert_eq!(res.net.iter().sum::<i32>(), 0);
            assert_eq!(res.pairs.len(), num_players * (num_players - 1) / 2);
            if num_players == 2 {
                assert_eq!(res.net(0).map(|n| -n), res.net(1));
            }
            assert_eq!(res.net(num_players), None);
        }
    }

    #[test]
    fn rules_from_json() {
        let rules: ScoringRules = serde_json::from_str(
            r#"{
                "scoop_multiplier": 3,
                "segment_bonuses": [
                    { "segment": "Back", "category": "Flush", "points": 1 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(rules.scoop_multiplier, 3);
        assert_eq!(rules.segment_points(Segment::Back, HandCategory::FullHouse), 2);
        assert_eq!(rules.segment_points(Segment::Middle, HandCategory::FullHouse), 1);
        assert_eq!(rules.points_for(SpecialHandKind::Dragon), 13);
        assert!(rules.foul_is_scoop);
    }

    #[test]
    fn rules_out_of_range() {
        let players = [strong(), weak()];
        assert!(ScoringRules::default().check().is_ok());

        let rules: ScoringRules =
            serde_json::from_str(r#"{ "scoop_multiplier": 2147483647 }"#).unwrap();
        assert!(matches!(
            score(&players, &rules),
            Err(EvalError::InvalidRules(_))
        ));

        for sweep_multiplier in [0, -2, ScoringRules::MAX_MULTIPLIER + 1] {
            let rules = ScoringRules {
                sweep_multiplier,
                ..ScoringRules::default()
            };
            assert!(matches!(rules.check(), Err(EvalError::InvalidRules(_))));
        }

        let rules = ScoringRules {
            segment_bonuses: vec![SegmentBonus {
                segment: Segment::Back,
                category: HandCategory::HighCard,
                points: i32::MAX,
            }],
            ..ScoringRules::default()
        };
        assert!(matches!(
            score(&players, &rules),
            Err(EvalError::InvalidRules(_))
        ));

        let rules = ScoringRules {
            special_points: vec![SpecialPoints {
                kind: SpecialHandKind::Dragon,
                points: -5,
            }],
            ..ScoringRules::default()
        };
        assert!(matches!(rules.check(), Err(EvalError::InvalidRules(_))));

        // The largest rules still score.
        let rules = ScoringRules {
            scoop_multiplier: ScoringRules::MAX_MULTIPLIER,
            ..ScoringRules::default()
        };
        let res = score(&players, &rules).unwrap();
        assert_eq!(res.net(0).map(|n| -n), res.net(1));
        assert!(res.net(0).is_some_and(|n| n > 0));
    }

    #[test]
    fn default_bonuses() {
        let rules = ScoringRules::default();
        assert_eq!(rules.segment_points(Segment::Front, HandCategory::OnePair), 1);
        assert_eq!(rules.segment_points(Segment::Front, HandCategory::ThreeOfAKind), 3);
        assert_eq!(rules.segment_points(Segment::Middle, HandCategory::FullHouse), 2);
        assert_eq!(rules.segment_points(Segment::Middle, HandCategory::FourOfAKind), 8);
        assert_eq!(rules.segment_points(Segment::Middle, HandCategory::StraightFlush), 10);
        assert_eq!(rules.segment_points(Segment::Back, HandCategory::FullHouse), 1);
        assert_eq!(rules.segment_points(Segment::Back, HandCategory::StraightFlush), 5);
        assert_eq!(rules.points_for(SpecialHandKind::Ordinary), 0);
    }
}
