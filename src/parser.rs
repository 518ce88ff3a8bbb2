//! Text format for solutions.
//!
//! A solution is written as segments separated by `;`. A segment is either a bare literal
//! fragment of the kanji form, or `index|furigana` / `min-max|furigana` assigning furigana
//! to the inclusive range of characters. Characters not mentioned are read as written:
//! `0|むずか;しい` and `0|むずか` both describe 難しい read as むずかしい.

use crate::solution::{FuriganaPart, FuriganaSolution, VocabEntry};
use thiserror::Error;

pub const MULTI_VALUE_SEPARATOR: char = ';';
pub const ASSOCIATION_SEPARATOR: char = '|';
pub const RANGE_SEPARATOR: char = '-';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolutionParseError {
    #[error("segment '{0}' contains more than one furigana separator")]
    TooManyFields(String),
    #[error("no furigana given for '{0}'")]
    MissingFurigana(String),
    #[error("invalid index '{0}'")]
    InvalidIndex(String),
    #[error("range '{0}' has more than two bounds")]
    TooManyRangeBounds(String),
    #[error("range {min}-{max} ends before it starts")]
    InvertedRange { min: usize, max: usize },
    #[error("index {index} is out of bounds for a word of {len} characters")]
    OutOfBounds { index: usize, len: usize },
    #[error("part starting at {0} overlaps the previous part")]
    Overlap(usize),
    #[error("literal '{literal}' does not match the word at index {index}")]
    LiteralMismatch { literal: String, index: usize },
}

impl FuriganaSolution {
    /// Parses a solution for `vocab`, returning None if the text can't be interpreted.
    pub fn parse(text: &str, vocab: &VocabEntry) -> Option<Self> {
        Self::try_parse(text, vocab).ok()
    }

    /// Parses a solution for `vocab`, describing what went wrong on failure.
    pub fn try_parse(text: &str, vocab: &VocabEntry) -> Result<Self, SolutionParseError> {
        let chars = vocab.kanji_form().chars().collect::<Vec<_>>();
        let mut parts = vec![];
        let mut cursor = 0;

        if !text.is_empty() {
            for segment in text.split(MULTI_VALUE_SEPARATOR) {
                let part = match segment
                    .split(ASSOCIATION_SEPARATOR)
                    .collect::<Vec<_>>()
                    .as_slice()
                {
                    [literal] => parse_literal(literal, &chars, cursor)?,
                    [range, furigana] => parse_part(range, furigana, chars.len())?,
                    _ => return Err(SolutionParseError::TooManyFields(segment.to_string())),
                };
                if part.min_index < cursor {
                    return Err(SolutionParseError::Overlap(part.min_index));
                }
                if part.min_index > cursor {
                    parts.push(literal_part(&chars, cursor, part.min_index - 1));
                }
                cursor = part.max_index + 1;
                parts.push(part);
            }
        }
        if cursor < chars.len() {
            parts.push(literal_part(&chars, cursor, chars.len() - 1));
        }

        Ok(FuriganaSolution::new(vocab.clone(), parts))
    }

    /// Writes the solution in the format read by [`FuriganaSolution::parse`].
    pub fn serialize(&self) -> String {
        let mut segments = vec![];
        for part in self.parts() {
            let text = self.text_of(part);
            if part.value == text {
                if !text.contains(&[MULTI_VALUE_SEPARATOR, ASSOCIATION_SEPARATOR][..]) {
                    segments.push(text);
                }
                // otherwise leave it out, parsing fills it back in
            } else if part.min_index == part.max_index {
                segments.push(format!(
                    "{}{ASSOCIATION_SEPARATOR}{}",
                    part.min_index, part.value
                ));
            } else {
                segments.push(format!(
                    "{}{RANGE_SEPARATOR}{}{ASSOCIATION_SEPARATOR}{}",
                    part.min_index, part.max_index, part.value
                ));
            }
        }
        let separator = MULTI_VALUE_SEPARATOR.to_string();
        segments.join(separator.as_str())
    }
}

fn parse_literal(
    literal: &str,
    chars: &[char],
    cursor: usize,
) -> Result<FuriganaPart, SolutionParseError> {
    let len = literal.chars().count();
    let matches = len > 0
        && chars
            .get(cursor..cursor + len)
            .is_some_and(|cs| cs.iter().copied().eq(literal.chars()));
    if !matches {
        return Err(SolutionParseError::LiteralMismatch {
            literal: literal.to_string(),
            index: cursor,
        });
    }
    Ok(FuriganaPart::new(literal, cursor, cursor + len - 1))
}

fn parse_part(
    range: &str,
    furigana: &str,
    len: usize,
) -> Result<FuriganaPart, SolutionParseError> {
    if furigana.is_empty() {
        return Err(SolutionParseError::MissingFurigana(range.to_string()));
    }
    let bounds = range.split(RANGE_SEPARATOR).collect::<Vec<_>>();
    let (min_index, max_index) = match bounds.as_slice() {
        [index] => {
            let index = parse_index(index)?;
            (index, index)
        }
        [min, max] => (parse_index(min)?, parse_index(max)?),
        _ => return Err(SolutionParseError::TooManyRangeBounds(range.to_string())),
    };
    if min_index > max_index {
        return Err(SolutionParseError::InvertedRange {
            min: min_index,
            max: max_index,
        });
    }
    if max_index >= len {
        return Err(SolutionParseError::OutOfBounds {
            index: max_index,
            len,
        });
    }
    Ok(FuriganaPart::new(furigana, min_index, max_index))
}

fn parse_index(index: &str) -> Result<usize, SolutionParseError> {
    index
        .trim()
        .parse()
        .map_err(|_| SolutionParseError::InvalidIndex(index.to_string()))
}

fn literal_part(chars: &[char], min_index: usize, max_index: usize) -> FuriganaPart {
    let text = chars[min_index..=max_index].iter().collect::<String>();
    FuriganaPart::new(text, min_index, max_index)
}
