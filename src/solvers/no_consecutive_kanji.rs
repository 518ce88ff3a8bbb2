use super::{into_solutions, literal_part, FuriganaSolver, Reading};
use crate::{
    resources::FuriganaResourceSet,
    segmentation::{CoarseSegmentation, Segment},
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
};

/// Solves words where every kanji stands alone between kana, such as 物の怪.
///
/// Each kanji takes at least one character of the reading and everything else must be read
/// as written. Every way of doing so is returned, so words like 物の怪 read as もののけ
/// come out ambiguous.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConsecutiveKanjiSolver;

impl FuriganaSolver for NoConsecutiveKanjiSolver {
    fn name(&self) -> &'static str {
        "no consecutive kanji"
    }

    fn priority(&self) -> i32 {
        3
    }

    fn solve(&self, _: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let segments = CoarseSegmentation::new(vocab.kanji_form()).collect::<Vec<_>>();
        let has_kanji = segments.iter().any(Segment::is_kanji);
        let has_consecutive_kanji = segments.iter().any(|s| s.is_kanji() && s.len > 1);
        if !has_kanji || has_consecutive_kanji {
            return vec![];
        }

        let reading = Reading::new(vocab.reading());
        let mut alignments = vec![];
        align(&segments, &reading, 0, &mut vec![], &mut alignments);
        into_solutions(vocab, alignments)
    }
}

// recursively explores the ways to assign the rest of the reading to the rest of the segments
fn align(
    segments: &[Segment<'_>],
    reading: &Reading,
    position: usize,
    parts: &mut Vec<FuriganaPart>,
    alignments: &mut Vec<Vec<FuriganaPart>>,
) {
    let Some((segment, rest)) = segments.split_first() else {
        if position == reading.len() {
            alignments.push(parts.clone());
        }
        return;
    };

    if !segment.is_kanji() {
        if reading.matches_literal(position, segment.text) {
            parts.push(literal_part(reading, segment, position));
            align(rest, reading, position + segment.len, parts, alignments);
            parts.pop();
        }
        return;
    }

    if !reading.can_start_kanji_reading(position) {
        return;
    }
    // every remaining segment needs at least one character per character of its own
    let reserved = rest.iter().map(|s| s.len).sum::<usize>();
    let Some(last_end) = reading.len().checked_sub(reserved) else {
        return;
    };
    for end in position + 1..=last_end {
        parts.push(FuriganaPart::single(
            reading.slice(position, end),
            segment.start,
        ));
        align(rest, reading, end, parts, alignments);
        parts.pop();
    }
}
