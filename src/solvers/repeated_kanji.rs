use super::{FuriganaSolver, Reading};
use crate::{
    kana::{self, REPEATER},
    reading::voice,
    resources::FuriganaResourceSet,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Solves a kanji followed by its repetition, such as 時々 read as ときどき.
///
/// The reading is split in two halves, the second of which must repeat the first, possibly voiced.
/// Readings with an odd number of characters are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedKanjiSolver;

impl FuriganaSolver for RepeatedKanjiSolver {
    fn name(&self) -> &'static str {
        "repeated kanji"
    }

    fn priority(&self) -> i32 {
        3
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let chars = vocab.kanji_form().chars().collect::<Vec<_>>();
        let [first, second] = chars.as_slice() else {
            return vec![];
        };
        let repeats_first = second == first || *second == REPEATER;
        if !kana::is_kanji(*first) || *first == REPEATER || !repeats_first {
            return vec![];
        }

        let reading = Reading::new(vocab.reading());
        let len = reading.len();
        if len == 0 || len % 2 != 0 {
            return vec![];
        }
        let half = len / 2;
        let first_half = reading.hiragana(0, half);
        let second_half = reading.hiragana(half, len);
        let repeats = first_half == second_half || voice(&first_half).contains(&second_half);
        if !repeats || !reading.can_start_kanji_reading(half) {
            return vec![];
        }

        let parts = vec![
            FuriganaPart::single(reading.slice(0, half), 0),
            FuriganaPart::single(reading.slice(half, len), 1),
        ];
        vec![FuriganaSolution::new(vocab.clone(), parts)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(word: &str, reading: &str) -> Vec<String> {
        RepeatedKanjiSolver
            .solve(&FuriganaResourceSet::default(), &VocabEntry::new(word, reading))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn splits_repetitions() {
        assert_eq!(solve("時々", "ときどき"), vec!["[時|とき][々|どき]"]);
        assert_eq!(solve("人々", "ひとびと"), vec!["[人|ひと][々|びと]"]);
        assert_eq!(solve("段段", "だんだん"), vec!["[段|だん][段|だん]"]);
    }

    #[test]
    fn ignores_uneven_readings() {
        assert!(solve("日々", "ひび").len() == 1);
        assert!(solve("日々", "にちにちに").is_empty());
        assert!(solve("久々", "ひさしぶり").is_empty());
    }

    #[test]
    fn needs_a_repetition() {
        assert!(solve("花火", "はなはな").is_empty());
        assert!(solve("々々", "ああ").is_empty());
        assert!(solve("時々く", "ときどきく").is_empty());
    }
}
