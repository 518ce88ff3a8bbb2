//! Dictionary data consulted while solving.

use crate::solution::{FuriganaPart, FuriganaSolution, VocabEntry};
use std::collections::HashMap;
use thiserror::Error;

/// A kanji and its dictionary readings.
///
/// Readings are marked the way Kanjidic does it: a leading `-` for readings only used as
/// a suffix, a trailing `-` for readings only used as a prefix, and a `.` between
/// a conjugating stem and its okurigana.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kanji {
    character: char,
    readings: Vec<String>,
    readings_with_nanori: Vec<String>,
}

impl Kanji {
    pub fn new<I, S>(character: char, readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let readings = readings.into_iter().map(Into::into).collect::<Vec<_>>();
        Self {
            character,
            readings_with_nanori: readings.clone(),
            readings,
        }
    }

    /// Adds readings only used in names.
    pub fn with_nanori<I, S>(mut self, nanori: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readings_with_nanori
            .extend(nanori.into_iter().map(Into::into));
        self
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    pub fn readings_with_nanori(&self) -> &[String] {
        &self.readings_with_nanori
    }
}

/// A reading of a special expression along with how it is distributed over
/// the expression's characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialReading {
    reading: String,
    solution: FuriganaSolution,
}

impl SpecialReading {
    pub fn new(reading: impl Into<String>, solution: FuriganaSolution) -> Self {
        Self {
            reading: reading.into(),
            solution,
        }
    }

    /// A reading attributed to the expression as a whole.
    pub fn whole(text: &str, reading: impl Into<String>) -> Self {
        let reading = reading.into();
        let len = text.chars().count();
        let parts = if len == 0 {
            vec![]
        } else {
            vec![FuriganaPart::new(reading.clone(), 0, len - 1)]
        };
        let solution = FuriganaSolution::new(VocabEntry::new(text, reading.clone()), parts);
        Self { reading, solution }
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn solution(&self) -> &FuriganaSolution {
        &self.solution
    }
}

/// A compound of several characters with readings that can't be derived from its kanji,
/// such as 発条.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialExpression {
    text: String,
    readings: Vec<SpecialReading>,
}

impl SpecialExpression {
    pub fn new(text: impl Into<String>, readings: Vec<SpecialReading>) -> Self {
        Self {
            text: text.into(),
            readings,
        }
    }

    /// An expression whose readings are each attributed to the expression as a whole.
    pub fn with_readings<I, S>(text: impl Into<String>, readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let text = text.into();
        let readings = readings
            .into_iter()
            .map(|r| SpecialReading::whole(&text, r))
            .collect();
        Self { text, readings }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn readings(&self) -> &[SpecialReading] {
        &self.readings
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("special expression '{0}' must contain at least two characters")]
    ExpressionTooShort(String),
    #[error("reading '{reading}' of special expression '{text}' does not align with its template")]
    TemplateMismatch { text: String, reading: String },
}

/// Lookup tables for kanji and special expressions.
/// Built once and shared read-only between solves.
#[derive(Debug, Clone, Default)]
pub struct FuriganaResourceSet {
    kanji: HashMap<char, Kanji>,
    expressions: HashMap<String, SpecialExpression>,
    longest_expression: usize,
}

impl FuriganaResourceSet {
    pub fn builder() -> FuriganaResourceSetBuilder {
        FuriganaResourceSetBuilder::default()
    }

    pub fn kanji(&self, character: char) -> Option<&Kanji> {
        self.kanji.get(&character)
    }

    pub fn expression(&self, text: &str) -> Option<&SpecialExpression> {
        self.expressions.get(text)
    }

    /// The number of characters in the longest special expression.
    pub fn longest_expression(&self) -> usize {
        self.longest_expression
    }
}

#[derive(Debug, Default)]
pub struct FuriganaResourceSetBuilder {
    set: FuriganaResourceSet,
}

impl FuriganaResourceSetBuilder {
    /// Adds a kanji, replacing any earlier record for the same character.
    pub fn kanji(mut self, kanji: Kanji) -> Self {
        self.set.kanji.insert(kanji.character, kanji);
        self
    }

    /// Adds a special expression after checking that its reading templates fit it.
    pub fn expression(mut self, expression: SpecialExpression) -> Result<Self, ResourceError> {
        let len = expression.char_count();
        if len < 2 {
            return Err(ResourceError::ExpressionTooShort(expression.text));
        }
        for special in &expression.readings {
            let vocab = special.solution.vocab();
            if vocab.kanji_form() != expression.text
                || vocab.reading() != special.reading
                || !special.solution.is_valid()
            {
                return Err(ResourceError::TemplateMismatch {
                    text: expression.text.clone(),
                    reading: special.reading.clone(),
                });
            }
        }
        self.set.longest_expression = self.set.longest_expression.max(len);
        self.set
            .expressions
            .insert(expression.text.clone(), expression);
        Ok(self)
    }

    pub fn build(self) -> FuriganaResourceSet {
        tracing::debug!(
            kanji = self.set.kanji.len(),
            expressions = self.set.expressions.len(),
            "built furigana resource set"
        );
        self.set
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn looks_up_kanji_and_expressions() {
        let set = FuriganaResourceSet::builder()
            .kanji(Kanji::new('仕', ["シ", "ジ", "つか.える"]).with_nanori(["し"]))
            .expression(SpecialExpression::with_readings("発条", ["ぜんまい", "ばね"]))
            .unwrap()
            .build();

        let kanji = set.kanji('仕').unwrap();
        assert_eq!(kanji.readings().len(), 3);
        assert_eq!(kanji.readings_with_nanori().len(), 4);
        assert!(set.kanji('掛').is_none());

        let expression = set.expression("発条").unwrap();
        assert_eq!(expression.readings()[1].reading(), "ばね");
        assert_eq!(
            expression.readings()[0].solution().parts(),
            &[FuriganaPart::new("ぜんまい", 0, 1)]
        );
        assert_eq!(set.longest_expression(), 2);
    }

    #[test]
    fn rejects_single_character_expressions() {
        let result = FuriganaResourceSet::builder()
            .expression(SpecialExpression::with_readings("発", ["はつ"]));
        assert_eq!(
            result.unwrap_err(),
            ResourceError::ExpressionTooShort("発".to_string())
        );
    }

    #[test]
    fn rejects_mismatched_templates() {
        let template = FuriganaSolution::new(
            VocabEntry::new("大人", "おとな"),
            vec![FuriganaPart::new("おとな", 0, 1)],
        );
        let expression = SpecialExpression::new(
            "大人",
            vec![SpecialReading::new("たいじん", template)],
        );
        let result = FuriganaResourceSet::builder().expression(expression);
        assert!(matches!(
            result,
            Err(ResourceError::TemplateMismatch { .. })
        ));
    }
}
