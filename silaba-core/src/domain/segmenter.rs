//! Weighted optimal segmentation.
//!
//! For a sequence of `n` symbols the segmenter fills two tables indexed
//! `0..=n`, walking backwards from the terminal position `n`:
//!
//! - `best_score[i]`: the largest total weight of any partition of the suffix
//!   starting at `i`, or `None` when that suffix cannot be partitioned
//! - `chosen_length[i]`: the length of the first unit of that partition
//!
//! Each position only reads strictly larger positions, so a single backward
//! pass is enough. Among candidates with equal totals the earliest entry of
//! [`UnitPattern::ALL`] wins.

use crate::domain::alphabet::SoundClass;
use crate::domain::lexer::{classes, Symbol};
use crate::domain::pattern::{UnitPattern, Weight};
use crate::error::Unsegmentable;
use smallvec::SmallVec;

/// A unit that could start at a given position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitCandidate {
    /// Matched shape
    pub pattern: UnitPattern,
    /// Number of symbols covered
    pub length: usize,
    /// Weight of the shape
    pub weight: Weight,
}

impl From<UnitPattern> for UnitCandidate {
    fn from(pattern: UnitPattern) -> Self {
        Self {
            pattern,
            length: pattern.length(),
            weight: pattern.weight(),
        }
    }
}

/// Candidates anchored at one position, in preference order
pub type Candidates = SmallVec<[UnitCandidate; 7]>;

/// Lists every candidate that fits at `start`, in preference order
pub fn candidates(classes: &[SoundClass], start: usize) -> Candidates {
    UnitPattern::ALL
        .into_iter()
        .filter(|pattern| pattern.matches_at(classes, start))
        .map(UnitCandidate::from)
        .collect()
}

/// Filled dynamic-programming tables for one input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpState {
    best_score: Vec<Option<Weight>>,
    chosen_length: Vec<Option<usize>>,
}

impl DpState {
    fn new(n: usize) -> Self {
        let mut best_score = vec![None; n + 1];
        best_score[n] = Some(0);
        Self {
            best_score,
            chosen_length: vec![None; n + 1],
        }
    }

    /// Number of symbols the tables were built for
    pub fn len(&self) -> usize {
        self.best_score.len() - 1
    }

    /// Check if the tables describe empty input
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Best suffix scores, indexed `0..=n`
    pub fn best_score(&self) -> &[Option<Weight>] {
        &self.best_score
    }

    /// Chosen unit lengths, indexed `0..=n`
    pub fn chosen_length(&self) -> &[Option<usize>] {
        &self.chosen_length
    }

    /// Score of the best partition of the suffix at `position`
    pub fn score_at(&self, position: usize) -> Option<Weight> {
        self.best_score.get(position).copied().flatten()
    }

    /// Length of the unit chosen at `position`
    pub fn length_at(&self, position: usize) -> Option<usize> {
        self.chosen_length.get(position).copied().flatten()
    }

    /// Total weight of the optimal partition of the whole input
    pub fn total_score(&self) -> Option<Weight> {
        self.score_at(0)
    }

    /// Check if the whole input can be partitioned
    pub fn is_segmentable(&self) -> bool {
        self.total_score().is_some()
    }
}

/// Segments a symbol sequence into the maximum-weight partition
pub fn segment(symbols: &[Symbol]) -> Result<DpState, Unsegmentable> {
    segment_classes(&classes(symbols))
}

/// Segments a bare class sequence
pub fn segment_classes(classes: &[SoundClass]) -> Result<DpState, Unsegmentable> {
    let n = classes.len();
    let mut state = DpState::new(n);

    for i in (0..n).rev() {
        let mut best: Option<(Weight, usize)> = None;
        for candidate in candidates(classes, i) {
            let next = i + candidate.length;
            // matches_at already bounds the candidate to the input
            let Some(rest) = state.best_score[next] else {
                continue;
            };
            let total = candidate.weight + rest;
            if best.map_or(true, |(score, _)| total > score) {
                best = Some((total, candidate.length));
            }
        }
        if let Some((score, length)) = best {
            state.best_score[i] = Some(score);
            state.chosen_length[i] = Some(length);
            log::trace!("position {i}: length {length}, score {score}");
        }
    }

    match state.total_score() {
        Some(total) => {
            log::debug!("segmented {n} symbols, total score {total}");
            Ok(state)
        }
        None => {
            log::debug!("no partition for {n} symbols");
            Err(Unsegmentable)
        }
    }
}
