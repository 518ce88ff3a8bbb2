use super::FuriganaSolver;
use crate::{
    resources::FuriganaResourceSet,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Solves single character words: the character takes the whole reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCharacterSolver;

impl FuriganaSolver for SingleCharacterSolver {
    fn name(&self) -> &'static str {
        "single character"
    }

    fn priority(&self) -> i32 {
        4
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        if vocab.kanji_form().chars().count() != 1 || vocab.reading().is_empty() {
            return vec![];
        }
        let parts = vec![FuriganaPart::single(vocab.reading(), 0)];
        vec![FuriganaSolution::new(vocab.clone(), parts)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(word: &str, reading: &str) -> Vec<FuriganaSolution> {
        let vocab = VocabEntry::new(word, reading);
        SingleCharacterSolver.solve(&FuriganaResourceSet::default(), &vocab)
    }

    #[test]
    fn absorbs_whole_reading() {
        let solutions = solve(" ", "  ");
        println!("{solutions:?}");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].parts(), &[FuriganaPart::single("  ", 0)]);
        assert_eq!(solutions[0].to_string(), "[ |  ]");

        let solutions = solve("一", "いち");
        assert_eq!(solutions[0].to_string(), "[一|いち]");
    }

    #[test]
    fn needs_exactly_one_character() {
        assert!(solve("  ", "   ").is_empty());
        assert!(solve("", "").is_empty());
        assert!(solve("一", "").is_empty());
    }
}
