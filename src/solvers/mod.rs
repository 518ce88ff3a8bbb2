//! Strategies that align a reading to a word.
//!
//! Each strategy handles the words it understands and returns nothing for the rest.
//! Strategies with a higher priority are more trustworthy; see [`crate::FuriganaBusinessLogic`]
//! for how their answers are arbitrated.

mod equal_length;
mod kana_reading;
mod kanji_reading;
mod no_consecutive_kanji;
mod repeated_kanji;
mod single_character;
mod single_kanji;

pub use self::{
    equal_length::EqualLengthSolver, kana_reading::KanaReadingSolver,
    kanji_reading::KanjiReadingSolver, no_consecutive_kanji::NoConsecutiveKanjiSolver,
    repeated_kanji::RepeatedKanjiSolver, single_character::SingleCharacterSolver,
    single_kanji::SingleKanjiSolver,
};
use crate::{
    kana,
    resources::FuriganaResourceSet,
    segmentation::Segment,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// A strategy for aligning a reading to a word.
pub trait FuriganaSolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Rank of the strategy, higher is more trustworthy.
    fn priority(&self) -> i32;

    /// Returns every alignment this strategy finds consistent, or nothing if it doesn't apply.
    fn solve(&self, resources: &FuriganaResourceSet, vocab: &VocabEntry)
        -> Vec<FuriganaSolution>;
}

/// The default strategies, ordered by descending priority.
pub fn default_solvers() -> Vec<Box<dyn FuriganaSolver>> {
    vec![
        Box::new(KanaReadingSolver),
        Box::new(SingleCharacterSolver),
        Box::new(KanjiReadingSolver::new(false)),
        Box::new(NoConsecutiveKanjiSolver),
        Box::new(RepeatedKanjiSolver),
        Box::new(KanjiReadingSolver::new(true)),
        Box::new(SingleKanjiSolver),
        Box::new(EqualLengthSolver),
    ]
}

/// A reading split into characters, with a hiragana copy for comparisons.
/// Positions are character indices, and both copies always have the same length.
#[derive(Debug, Clone)]
pub(crate) struct Reading {
    chars: Vec<char>,
    hiragana: Vec<char>,
}

impl Reading {
    pub fn new(reading: &str) -> Self {
        let chars = reading.chars().collect::<Vec<_>>();
        let hiragana = chars.iter().copied().map(kana::hiragana_char).collect();
        Self { chars, hiragana }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The reading as written between `start` and `end`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// The reading in hiragana between `start` and `end`.
    pub fn hiragana(&self, start: usize, end: usize) -> String {
        self.hiragana[start..end].iter().collect()
    }

    /// Checks whether `literal` is read as written starting at `start`.
    pub fn matches_literal(&self, start: usize, literal: &str) -> bool {
        let len = literal.chars().count();
        start + len <= self.len() && kana::kana_equivalent(literal, &self.slice(start, start + len))
    }

    /// A kanji's reading can't begin with a small kana or a long vowel mark.
    pub fn can_start_kanji_reading(&self, start: usize) -> bool {
        self.chars
            .get(start)
            .is_some_and(|&c| !kana::is_small_kana(c))
    }
}

/// Part for a literal segment read as written at `start`.
pub(crate) fn literal_part(reading: &Reading, segment: &Segment<'_>, start: usize) -> FuriganaPart {
    FuriganaPart::new(
        reading.slice(start, start + segment.len),
        segment.start,
        segment.end(),
    )
}

/// Builds solutions from the collected parts, dropping duplicates.
pub(crate) fn into_solutions(
    vocab: &VocabEntry,
    alignments: Vec<Vec<FuriganaPart>>,
) -> Vec<FuriganaSolution> {
    let mut solutions: Vec<FuriganaSolution> = vec![];
    for parts in alignments {
        let solution = FuriganaSolution::new(vocab.clone(), parts);
        if !solutions.contains(&solution) {
            solutions.push(solution);
        }
    }
    solutions
}
