use crate::kana;
use std::fmt::Display;

/// A word written with kanji along with its reading.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VocabEntry {
    kanji_form: String,
    reading: String,
}

impl VocabEntry {
    pub fn new(kanji_form: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            kanji_form: kanji_form.into(),
            reading: reading.into(),
        }
    }

    pub fn kanji_form(&self) -> &str {
        &self.kanji_form
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// Returns true if either the kanji form or the reading is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.kanji_form.trim().is_empty() || self.reading.trim().is_empty()
    }
}

/// A reading assigned to an inclusive range of characters of a kanji form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuriganaPart {
    /// The reading of the characters.
    pub value: String,
    /// Index of the first character covered, counted in characters.
    pub min_index: usize,
    /// Index of the last character covered.
    pub max_index: usize,
}

impl FuriganaPart {
    pub fn new(value: impl Into<String>, min_index: usize, max_index: usize) -> Self {
        Self {
            value: value.into(),
            min_index,
            max_index,
        }
    }

    /// A part covering a single character.
    pub fn single(value: impl Into<String>, index: usize) -> Self {
        Self::new(value, index, index)
    }

    pub fn len(&self) -> usize {
        self.max_index + 1 - self.min_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An alignment of a word's reading to its characters.
///
/// The parts are sorted and tile the whole kanji form. Characters that are not kanji
/// are covered by literal parts; adjacent literal parts are always merged, so equal
/// alignments compare equal regardless of how they were produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuriganaSolution {
    vocab: VocabEntry,
    parts: Vec<FuriganaPart>,
}

impl FuriganaSolution {
    /// Creates a solution from parts tiling the kanji form of `vocab`.
    ///
    /// # Panics
    /// In debug builds, if the parts do not tile the kanji form.
    pub fn new(vocab: VocabEntry, mut parts: Vec<FuriganaPart>) -> Self {
        parts.sort_by_key(|p| (p.min_index, p.max_index));
        let chars = vocab.kanji_form.chars().collect::<Vec<_>>();
        let is_literal = |part: &FuriganaPart| {
            chars
                .get(part.min_index..=part.max_index)
                .is_some_and(|cs| !cs.iter().copied().any(kana::is_kanji))
        };

        let mut merged: Vec<FuriganaPart> = Vec::with_capacity(parts.len());
        for part in parts {
            match merged.last_mut() {
                Some(last)
                    if last.max_index + 1 == part.min_index
                        && is_literal(last)
                        && is_literal(&part) =>
                {
                    last.value.push_str(&part.value);
                    last.max_index = part.max_index;
                }
                _ => merged.push(part),
            }
        }

        let solution = Self {
            vocab,
            parts: merged,
        };
        debug_assert!(
            solution.tiles(),
            "furigana parts must tile the kanji form: {solution:?}"
        );
        solution
    }

    pub fn vocab(&self) -> &VocabEntry {
        &self.vocab
    }

    pub fn parts(&self) -> &[FuriganaPart] {
        &self.parts
    }

    /// Returns the characters of the kanji form covered by `part`.
    pub fn text_of(&self, part: &FuriganaPart) -> String {
        self.vocab
            .kanji_form
            .chars()
            .skip(part.min_index)
            .take(part.len())
            .collect()
    }

    /// Returns the part covering the character at `index`.
    pub fn part_at(&self, index: usize) -> Option<&FuriganaPart> {
        self.parts
            .iter()
            .find(|p| p.min_index <= index && index <= p.max_index)
    }

    /// Returns a copy of this solution for `vocab` where the part covering `index`
    /// has its value replaced.
    pub(crate) fn with_part_value(&self, vocab: VocabEntry, index: usize, value: String) -> Self {
        let parts = self
            .parts
            .iter()
            .map(|p| {
                if p.min_index <= index && index <= p.max_index {
                    FuriganaPart::new(value.clone(), p.min_index, p.max_index)
                } else {
                    p.clone()
                }
            })
            .collect();
        Self::new(vocab, parts)
    }

    /// Checks that the parts tile the kanji form and that their values spell out the reading.
    pub fn is_valid(&self) -> bool {
        let reading = self
            .parts
            .iter()
            .map(|p| p.value.as_str())
            .collect::<String>();
        self.tiles() && reading == self.vocab.reading
    }

    fn tiles(&self) -> bool {
        let mut next = 0;
        for part in &self.parts {
            if part.min_index != next || part.max_index < part.min_index {
                return false;
            }
            next = part.max_index + 1;
        }
        next == self.vocab.kanji_form.chars().count()
    }
}

/// Prints the word with its furigana in brackets, e.g. `[難|むずか]しい`.
impl Display for FuriganaSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            let text = self.text_of(part);
            if kana::kana_equivalent(&text, &part.value) {
                // no need for furigana here
                write!(f, "{text}")?;
            } else {
                write!(f, "[{}|{}]", text, part.value)?;
            }
        }
        Ok(())
    }
}

/// The distinct solutions found for a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuriganaSolutionSet {
    vocab: VocabEntry,
    solutions: Vec<FuriganaSolution>,
}

/// What a solution set says about its word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// No consistent alignment was found.
    Unsolvable,
    /// Exactly one alignment was found.
    Solved(&'a FuriganaSolution),
    /// Several alignments are consistent, none of them can be trusted.
    Ambiguous(usize),
}

impl FuriganaSolutionSet {
    pub fn new(vocab: VocabEntry) -> Self {
        Self {
            vocab,
            solutions: vec![],
        }
    }

    pub fn vocab(&self) -> &VocabEntry {
        &self.vocab
    }

    /// Adds the solution unless an equal one is already present. Returns true if it was added.
    pub fn add(&mut self, solution: FuriganaSolution) -> bool {
        if self.solutions.contains(&solution) {
            false
        } else {
            self.solutions.push(solution);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuriganaSolution> {
        self.solutions.iter()
    }

    /// Returns the solution if there is exactly one.
    pub fn single(&self) -> Option<&FuriganaSolution> {
        match self.solutions.as_slice() {
            [solution] => Some(solution),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Outcome<'_> {
        match self.solutions.as_slice() {
            [] => Outcome::Unsolvable,
            [solution] => Outcome::Solved(solution),
            solutions => Outcome::Ambiguous(solutions.len()),
        }
    }
}

impl Extend<FuriganaSolution> for FuriganaSolutionSet {
    fn extend<T: IntoIterator<Item = FuriganaSolution>>(&mut self, iter: T) {
        for solution in iter {
            self.add(solution);
        }
    }
}

impl<'a> IntoIterator for &'a FuriganaSolutionSet {
    type Item = &'a FuriganaSolution;
    type IntoIter = std::slice::Iter<'a, FuriganaSolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for FuriganaSolutionSet {
    type Item = FuriganaSolution;
    type IntoIter = std::vec::IntoIter<FuriganaSolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}
