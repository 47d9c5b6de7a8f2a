// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Arrangement search.
//!
//! The optimizer goes through all the 72,072 ways of splitting 13 cards into a
//! 5 cards back, a 5 cards middle, and a 3 cards front, discards the fouls, and
//! ranks the legal arrangements with a heuristic score that weights each
//! segment category, preferring strong back segments.
//!
//! All 5 and 3 cards subsets are classified once and looked up by their bit
//! mask over the dealt cards positions, so the search itself doesn't allocate.
//! With the `parallel` feature [par_suggest] splits the back segments among
//! tasks and returns the same result as [suggest].
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, collections::BinaryHeap};

use thirteen_cards::{Card, Deck, subsets};

use crate::{
    arrangement::{ClassifiedArrangement, PlayerArrangement, Validity, check_order},
    error::{EvalError, cards_mask},
    hand::{ClassifiedHand, HandValue, classify},
};

/// Mask with a bit for each of the 13 dealt cards.
const FULL_MASK: u16 = (1 << Deck::HAND_SIZE) - 1;

/// Options for the arrangement search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOptions {
    /// The front, middle, and back weights for the segment category.
    pub weights: [u32; 3],
    /// Maximum number of partitions to examine, None for all.
    pub budget: Option<usize>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            weights: [1, 2, 3],
            budget: None,
        }
    }
}

impl SuggestOptions {
    /// The heuristic score of a classified arrangement.
    pub fn score(&self, hands: &ClassifiedArrangement) -> ArrangementScore {
        self.score_values(hands.front.value(), hands.middle.value(), hands.back.value())
    }

    fn score_values(&self, front: HandValue, middle: HandValue, back: HandValue) -> ArrangementScore {
        let [wf, wm, wb] = self.weights;
        ArrangementScore {
            weighted: wf * front.category.level()
                + wm * middle.category.level()
                + wb * back.category.level(),
            ranks: front.tiebreak.sum() + middle.tiebreak.sum() + back.tiebreak.sum(),
        }
    }
}

/// The heuristic score of an arrangement, higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArrangementScore {
    /// Sum of the weighted segment categories.
    pub weighted: u32,
    /// Sum of the segments tiebreak ranks.
    pub ranks: u32,
}

/// A legal arrangement with its score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedArrangement {
    /// The arrangement.
    pub arrangement: PlayerArrangement,
    /// The classified segments.
    pub hands: ClassifiedArrangement,
    /// The arrangement score.
    pub score: ArrangementScore,
}

/// The result of an arrangement search.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// The best legal arrangements from the best.
    pub arrangements: Vec<RankedArrangement>,
    /// All partitions were examined, false if the search budget ran out and a
    /// better arrangement may exist.
    pub complete: bool,
    /// The number of partitions examined.
    pub examined: usize,
}

impl Suggestion {
    /// The best arrangement if any.
    pub fn best(&self) -> Option<&PlayerArrangement> {
        self.arrangements.first().map(|r| &r.arrangement)
    }
}

/// Returns up to k legal arrangements for the dealt cards from the best.
pub fn suggest(dealt: &[Card], k: usize) -> Result<Suggestion, EvalError> {
    suggest_with(dealt, k, &SuggestOptions::default())
}

/// Returns up to k legal arrangements using the given options.
///
/// If the budget runs out before all partitions are examined the result is
/// not complete and includes the [greedy] arrangement.
pub fn suggest_with(
    dealt: &[Card],
    k: usize,
    options: &SuggestOptions,
) -> Result<Suggestion, EvalError> {
    let tables = Tables::new(dealt)?;
    if k == 0 {
        return Ok(Suggestion {
            arrangements: Vec::new(),
            complete: true,
            examined: 0,
        });
    }

    let mut search = tables.search(0, subsets::nck(Deck::HAND_SIZE, 5), k, options);

    if !search.complete {
        if let Some(greedy) = tables.greedy(options) {
            if search.top.iter().all(|Reverse(c)| c.masks != greedy.masks) {
                search.push(greedy, k);
            }
        }
    }

    debug!(
        "Examined {} partitions, {} legal, complete {}",
        search.examined, search.legal, search.complete
    );

    let candidates = search.top.into_iter().map(|Reverse(c)| c).collect();
    Ok(Suggestion {
        arrangements: tables.ranked(candidates, k, options)?,
        complete: search.complete,
        examined: search.examined,
    })
}

/// Parallel arrangement search with `num_tasks` tasks.
///
/// Returns the same arrangements as [suggest].
#[cfg(feature = "parallel")]
pub fn par_suggest(dealt: &[Card], k: usize, num_tasks: usize) -> Result<Suggestion, EvalError> {
    assert!(num_tasks > 0);

    let tables = Tables::new(dealt)?;
    let options = SuggestOptions::default();
    let ranges = subsets::split_ranges(Deck::HAND_SIZE, 5, num_tasks);

    // Per task results merged after all tasks are done.
    let mut results = (0..num_tasks).map(|_| None).collect::<Vec<_>>();
    std::thread::scope(|s| {
        for (slot, &(nth, count)) in results.iter_mut().zip(&ranges) {
            let tables = &tables;
            let options = &options;
            s.spawn(move || {
                *slot = Some(tables.search(nth, count, k, options));
            });
        }
    });

    let mut candidates = Vec::new();
    let mut examined = 0;
    for search in results.into_iter().flatten() {
        examined += search.examined;
        candidates.extend(search.top.into_iter().map(|Reverse(c)| c));
    }

    debug!("Examined {examined} partitions with {num_tasks} tasks");

    Ok(Suggestion {
        arrangements: tables.ranked(candidates, k, &options)?,
        complete: true,
        examined,
    })
}

/// Returns the arrangement with the strongest back and the strongest middle
/// from the remaining cards, None if it is a foul.
pub fn greedy(dealt: &[Card]) -> Result<Option<PlayerArrangement>, EvalError> {
    let tables = Tables::new(dealt)?;
    let options = SuggestOptions::default();
    tables
        .greedy(&options)
        .map(|c| tables.arrangement(&c).map(|(arr, _)| arr))
        .transpose()
}

/// A legal partition ordered by score, then by back, middle, and front hand
/// values, then by lower masks so ties resolve the same in any search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    score: ArrangementScore,
    back: HandValue,
    middle: HandValue,
    front: HandValue,
    masks: Reverse<(u16, u16)>,
}

impl Candidate {
    fn back_mask(&self) -> u16 {
        self.masks.0.0
    }

    fn middle_mask(&self) -> u16 {
        self.masks.0.1
    }

    fn front_mask(&self) -> u16 {
        FULL_MASK ^ self.back_mask() ^ self.middle_mask()
    }
}

/// A partial search result.
struct Search {
    /// Min heap with the best candidates.
    top: BinaryHeap<Reverse<Candidate>>,
    examined: usize,
    legal: usize,
    complete: bool,
}

impl Search {
    fn push(&mut self, candidate: Candidate, k: usize) {
        if self.top.len() < k {
            self.top.push(Reverse(candidate));
        } else if self.top.peek().is_some_and(|Reverse(min)| candidate > *min) {
            self.top.pop();
            self.top.push(Reverse(candidate));
        }
    }
}

/// Classified subsets of the dealt cards keyed by positions mask.
struct Tables<'a> {
    dealt: &'a [Card],
    fives: AHashMap<u16, ClassifiedHand>,
    threes: AHashMap<u16, ClassifiedHand>,
}

impl<'a> Tables<'a> {
    fn new(dealt: &'a [Card]) -> Result<Self, EvalError> {
        if dealt.len() != Deck::HAND_SIZE {
            return Err(EvalError::DealtSize(dealt.len()));
        }

        cards_mask(dealt)?;

        Ok(Self {
            dealt,
            fives: Self::classify_subsets(dealt, 5)?,
            threes: Self::classify_subsets(dealt, 3)?,
        })
    }

    fn classify_subsets(dealt: &[Card], k: usize) -> Result<AHashMap<u16, ClassifiedHand>, EvalError> {
        let n = dealt.len();
        let mut subsets = Vec::with_capacity(subsets::nck(n, k));
        subsets::for_each_ksubset(n, k, 0, subsets::nck(n, k), |idx| {
            let cards = idx.iter().map(|&i| dealt[i]).collect::<Vec<_>>();
            subsets.push((positions_mask(idx), cards));
        });

        subsets
            .into_iter()
            .map(|(mask, cards)| Ok((mask, classify(&cards)?)))
            .collect()
    }

    /// Examines the partitions for count back segments starting from the nth
    /// and keeps the best k legal candidates.
    fn search(&self, nth: usize, count: usize, k: usize, options: &SuggestOptions) -> Search {
        let mut search = Search {
            top: BinaryHeap::with_capacity(k + 1),
            examined: 0,
            legal: 0,
            complete: true,
        };

        let n = self.dealt.len();
        subsets::for_each_ksubset(n, 5, nth, count, |back_idx| {
            if !search.complete {
                return;
            }

            let back_mask = positions_mask(back_idx);
            let back = self.fives[&back_mask].value();

            // The 8 positions left for the middle and the front.
            let mut rest = [0usize; 8];
            for (slot, pos) in rest
                .iter_mut()
                .zip((0..n).filter(|&pos| back_mask & (1 << pos) == 0))
            {
                *slot = pos;
            }

            subsets::for_each_ksubset(8, 5, 0, subsets::nck(8, 5), |mid_idx| {
                if !search.complete {
                    return;
                }

                if options.budget.is_some_and(|b| search.examined >= b) {
                    search.complete = false;
                    return;
                }

                search.examined += 1;

                let middle_mask = mid_idx.iter().fold(0u16, |m, &i| m | (1 << rest[i]));
                let front_mask = FULL_MASK ^ back_mask ^ middle_mask;
                let middle = self.fives[&middle_mask].value();
                let front = self.threes[&front_mask].value();

                if check_order(front, middle, back) != Validity::Legal {
                    return;
                }

                search.legal += 1;
                let candidate = Candidate {
                    score: options.score_values(front, middle, back),
                    back,
                    middle,
                    front,
                    masks: Reverse((back_mask, middle_mask)),
                };

                search.push(candidate, k);
            });
        });

        search
    }

    /// The strongest back, then the strongest middle of the rest.
    fn greedy(&self, options: &SuggestOptions) -> Option<Candidate> {
        let back_mask = strongest(self.fives.iter())?;
        let middle_mask = strongest(self.fives.iter().filter(|(m, _)| *m & back_mask == 0))?;
        let front_mask = FULL_MASK ^ back_mask ^ middle_mask;

        let (front, middle, back) = (
            self.threes[&front_mask].value(),
            self.fives[&middle_mask].value(),
            self.fives[&back_mask].value(),
        );

        if check_order(front, middle, back).is_foul() {
            return None;
        }

        Some(Candidate {
            score: options.score_values(front, middle, back),
            back,
            middle,
            front,
            masks: Reverse((back_mask, middle_mask)),
        })
    }

    fn arrangement(
        &self,
        candidate: &Candidate,
    ) -> Result<(PlayerArrangement, ClassifiedArrangement), EvalError> {
        let front = self.threes[&candidate.front_mask()].clone();
        let middle = self.fives[&candidate.middle_mask()].clone();
        let back = self.fives[&candidate.back_mask()].clone();

        let arrangement =
            PlayerArrangement::new(self.dealt, front.cards(), middle.cards(), back.cards())?;

        let hands = ClassifiedArrangement {
            front,
            middle,
            back,
            validity: Validity::Legal,
        };

        Ok((arrangement, hands))
    }

    /// Sorts the candidates from the best and builds the first k arrangements.
    fn ranked(
        &self,
        mut candidates: Vec<Candidate>,
        k: usize,
        options: &SuggestOptions,
    ) -> Result<Vec<RankedArrangement>, EvalError> {
        candidates.sort_unstable_by(|a, b| b.cmp(a));
        candidates.truncate(k);

        candidates
            .iter()
            .map(|c| {
                let (arrangement, hands) = self.arrangement(c)?;
                Ok(RankedArrangement {
                    score: options.score(&hands),
                    arrangement,
                    hands,
                })
            })
            .collect()
    }
}

/// The mask of the strongest hand, the lower mask on ties.
fn strongest<'h>(hands: impl Iterator<Item = (&'h u16, &'h ClassifiedHand)>) -> Option<u16> {
    hands
        .map(|(&mask, hand)| (hand.value(), Reverse(mask)))
        .max()
        .map(|(_, Reverse(mask))| mask)
}

fn positions_mask(positions: &[usize]) -> u16 {
    positions.iter().fold(0u16, |m, &p| m | (1 << p))
}
