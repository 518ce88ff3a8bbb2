use super::FuriganaSolver;
use crate::{
    kana,
    resources::FuriganaResourceSet,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Solves words without kanji that are read as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaReadingSolver;

impl FuriganaSolver for KanaReadingSolver {
    fn name(&self) -> &'static str {
        "kana reading"
    }

    fn priority(&self) -> i32 {
        4
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let word = vocab.kanji_form();
        if word.chars().any(kana::is_kanji) || !kana::kana_equivalent(word, vocab.reading()) {
            return vec![];
        }
        let len = word.chars().count();
        let parts = if len == 0 {
            vec![]
        } else {
            vec![FuriganaPart::new(vocab.reading(), 0, len - 1)]
        };
        vec![FuriganaSolution::new(vocab.clone(), parts)]
    }
}
