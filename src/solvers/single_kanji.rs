use super::{literal_part, FuriganaSolver, Reading};
use crate::{
    resources::FuriganaResourceSet,
    segmentation::CoarseSegmentation,
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Solves words with a single run of kanji: once the kana around the run are matched,
/// the run takes whatever is left of the reading as a whole, as in `[大人|おとな]しい`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleKanjiSolver;

impl FuriganaSolver for SingleKanjiSolver {
    fn name(&self) -> &'static str {
        "single kanji"
    }

    fn priority(&self) -> i32 {
        1
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let segments = CoarseSegmentation::new(vocab.kanji_form()).collect::<Vec<_>>();
        let mut kanji_runs = segments.iter().filter(|s| s.is_kanji());
        let (Some(run), None) = (kanji_runs.next(), kanji_runs.next()) else {
            return vec![];
        };

        let reading = Reading::new(vocab.reading());
        let before = segments.iter().take_while(|s| !s.is_kanji()).collect::<Vec<_>>();
        let after = segments
            .iter()
            .skip_while(|s| !s.is_kanji())
            .skip(1)
            .collect::<Vec<_>>();
        let before_len = before.iter().map(|s| s.len).sum::<usize>();
        let after_len = after.iter().map(|s| s.len).sum::<usize>();
        let Some(run_end) = reading.len().checked_sub(after_len) else {
            return vec![];
        };
        if run_end <= before_len || !reading.can_start_kanji_reading(before_len) {
            return vec![];
        }

        let mut parts = vec![];
        let mut position = 0;
        for segment in &before {
            if !reading.matches_literal(position, segment.text) {
                return vec![];
            }
            parts.push(literal_part(&reading, segment, position));
            position += segment.len;
        }
        parts.push(FuriganaPart::new(
            reading.slice(before_len, run_end),
            run.start,
            run.end(),
        ));
        position = run_end;
        for segment in &after {
            if !reading.matches_literal(position, segment.text) {
                return vec![];
            }
            parts.push(literal_part(&reading, segment, position));
            position += segment.len;
        }

        vec![FuriganaSolution::new(vocab.clone(), parts)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(word: &str, reading: &str) -> Vec<String> {
        SingleKanjiSolver
            .solve(&FuriganaResourceSet::default(), &VocabEntry::new(word, reading))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn run_absorbs_the_rest() {
        assert_eq!(solve("難しい", "むずかしい"), vec!["[難|むずか]しい"]);
        assert_eq!(solve("大人しい", "おとなしい"), vec!["[大人|おとな]しい"]);
        assert_eq!(solve("お巡りさん", "おまわりさん"), vec!["お[巡|まわ]りさん"]);
        assert_eq!(solve("大人", "おとな"), vec!["[大人|おとな]"]);
    }

    #[test]
    fn kana_must_match() {
        assert!(solve("難しい", "むずかしく").is_empty());
        assert!(solve("お巡りさん", "ごまわりさん").is_empty());
        assert!(solve("難しい", "しい").is_empty());
    }

    #[test]
    fn needs_a_single_run() {
        assert!(solve("物の怪", "もののけ").is_empty());
        assert!(solve("すき", "すき").is_empty());
    }
}
