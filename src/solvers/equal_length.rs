use super::{FuriganaSolver, Reading};
use crate::{
    kana,
    resources::FuriganaResourceSet,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Last resort for words as long as their reading: each kanji takes the kana at its own position.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualLengthSolver;

impl FuriganaSolver for EqualLengthSolver {
    fn name(&self) -> &'static str {
        "equal length"
    }

    fn priority(&self) -> i32 {
        0
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let chars = vocab.kanji_form().chars().collect::<Vec<_>>();
        let reading = Reading::new(vocab.reading());
        if chars.len() != reading.len() || !chars.iter().copied().any(kana::is_kanji) {
            return vec![];
        }

        let mut parts = Vec::with_capacity(chars.len());
        for (idx, &c) in chars.iter().enumerate() {
            let read = reading.slice(idx, idx + 1);
            let consistent = if kana::is_kanji(c) {
                reading.can_start_kanji_reading(idx)
            } else {
                kana::kana_equivalent(&c.to_string(), &read)
            };
            if !consistent {
                return vec![];
            }
            parts.push(FuriganaPart::single(read, idx));
        }
        vec![FuriganaSolution::new(vocab.clone(), parts)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(word: &str, reading: &str) -> Vec<String> {
        EqualLengthSolver
            .solve(&FuriganaResourceSet::default(), &VocabEntry::new(word, reading))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn aligns_positionally() {
        assert_eq!(solve("蚊帳", "かや"), vec!["[蚊|か][帳|や]"]);
        assert_eq!(solve("歯医者", "はいしゃ").len(), 0);
        assert_eq!(solve("絵の具", "えのぐ"), vec!["[絵|え]の[具|ぐ]"]);
    }

    #[test]
    fn rejects_inconsistent_positions() {
        assert!(solve("絵の具", "えがぐ").is_empty());
        assert!(solve("切手", "きっ").is_empty());
        assert!(solve("すき", "すき").is_empty());
    }
}
