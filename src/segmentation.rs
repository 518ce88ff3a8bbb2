//! Contains an iterator that segments a word into runs of kanji and runs of everything else.

use crate::kana;

/// Segment of a word along with its position, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    /// Index of the first character of the segment in the word.
    pub start: usize,
    /// Number of characters in the segment.
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Kanji,
    Literal,
}

impl Segment<'_> {
    /// Index of the last character of the segment.
    pub fn end(&self) -> usize {
        self.start + self.len - 1
    }

    pub fn is_kanji(&self) -> bool {
        self.kind == SegmentKind::Kanji
    }
}

/// Iterator over a word's sequences of kanji and sequences of other characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoarseSegmentation<'a> {
    rest: &'a str,
    position: usize,
}

impl<'a> CoarseSegmentation<'a> {
    pub fn new(word: &'a str) -> Self {
        Self {
            rest: word,
            position: 0,
        }
    }
}

impl<'a> Iterator for CoarseSegmentation<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.rest.chars().next()?;
        let kind = classify_char(next);
        // collect all characters of the same class into the same segment
        let idx = self
            .rest
            .find(|c| classify_char(c) != kind)
            .unwrap_or(self.rest.len());
        let text = &self.rest[..idx];
        self.rest = &self.rest[idx..];

        let len = text.chars().count();
        let segment = Segment {
            kind,
            text,
            start: self.position,
            len,
        };
        self.position += len;
        Some(segment)
    }
}

fn classify_char(c: char) -> SegmentKind {
    if kana::is_kanji(c) {
        SegmentKind::Kanji
    } else {
        SegmentKind::Literal
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(word: &str) -> Vec<(SegmentKind, &str, usize)> {
        CoarseSegmentation::new(word)
            .map(|s| (s.kind, s.text, s.start))
            .collect()
    }

    #[test]
    fn segments_word() {
        let segments = kinds("物の怪");
        println!("{segments:?}");
        assert_eq!(
            segments,
            vec![
                (SegmentKind::Kanji, "物", 0),
                (SegmentKind::Literal, "の", 1),
                (SegmentKind::Kanji, "怪", 2),
            ]
        );
    }

    #[test]
    fn segments_word_repeats() {
        let segments = kinds("物物のの怪々のの");
        println!("{segments:?}");
        assert_eq!(
            segments,
            vec![
                (SegmentKind::Kanji, "物物", 0),
                (SegmentKind::Literal, "のの", 2),
                (SegmentKind::Kanji, "怪々", 4),
                (SegmentKind::Literal, "のの", 6),
            ]
        );
    }

    #[test]
    fn segments_single_character_words() {
        let mut cs = CoarseSegmentation::new("一");
        let segment = cs.next().unwrap();
        assert_eq!(segment.kind, SegmentKind::Kanji);
        assert_eq!((segment.start, segment.end()), (0, 0));
        assert!(cs.next().is_none());
    }

    #[test]
    fn segments_mixed() {
        let segments = kinds("CDプレイヤー用");
        assert_eq!(
            segments,
            vec![
                (SegmentKind::Literal, "CDプレイヤー", 0),
                (SegmentKind::Kanji, "用", 7),
            ]
        );
    }

    #[test]
    fn empty_word_has_no_segments() {
        assert!(CoarseSegmentation::new("").next().is_none());
    }
}
