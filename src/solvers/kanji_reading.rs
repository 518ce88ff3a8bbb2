use super::{into_solutions, literal_part, FuriganaSolver, Reading};
use crate::{
    combiner::combine_reading_choices,
    kana::{self, REPEATER},
    reading::potential_kanji_readings,
    resources::{FuriganaResourceSet, Kanji, SpecialExpression},
    segmentation::{CoarseSegmentation, Segment},
    solution::{FuriganaPart, FuriganaSolution, VocabEntry},
    special::potential_special_readings,
};
use std::collections::BTreeSet;

/// Solves words using the dictionary readings of their kanji and special expressions.
///
/// Every kanji of the word must be in the dictionary. Runs of kanji are cut into units,
/// single kanji or special expressions, and the readings of the units are combined
/// against the part of the reading the run can take. When a run can be read with
/// special expressions, readings that don't use them are not considered.
#[derive(Debug, Clone, Copy)]
pub struct KanjiReadingSolver {
    use_nanori: bool,
}

impl KanjiReadingSolver {
    /// With `use_nanori`, readings only used in names are considered as well.
    pub fn new(use_nanori: bool) -> Self {
        Self { use_nanori }
    }
}

impl FuriganaSolver for KanjiReadingSolver {
    fn name(&self) -> &'static str {
        if self.use_nanori {
            "kanji reading with nanori"
        } else {
            "kanji reading"
        }
    }

    fn priority(&self) -> i32 {
        // name readings are a long shot
        if self.use_nanori {
            2
        } else {
            3
        }
    }

    fn solve(&self, resources: &FuriganaResourceSet, vocab: &VocabEntry) -> Vec<FuriganaSolution> {
        let chars = vocab.kanji_form().chars().collect::<Vec<_>>();
        if !chars.iter().copied().any(kana::is_kanji) {
            return vec![];
        }

        let word = Word {
            resources,
            chars,
            reading: Reading::new(vocab.reading()),
            use_nanori: self.use_nanori,
        };
        let segments = CoarseSegmentation::new(vocab.kanji_form()).collect::<Vec<_>>();
        let mut alignments = vec![];
        word.read_segments(&segments, 0, &mut vec![], &mut alignments);
        into_solutions(vocab, alignments)
    }
}

struct Word<'a> {
    resources: &'a FuriganaResourceSet,
    chars: Vec<char>,
    reading: Reading,
    use_nanori: bool,
}

/// Part of a kanji run that is read as one.
#[derive(Debug, Clone, Copy)]
enum Unit<'a> {
    Kanji { index: usize, kanji: &'a Kanji },
    Expression { start: usize, expression: &'a SpecialExpression },
}

/// A potential reading of a unit along with how it is spread over the unit's characters.
#[derive(Debug, Clone)]
struct Candidate {
    /// The reading in hiragana.
    reading: String,
    /// The first and last character and the number of reading characters of each part.
    spans: Vec<(usize, usize, usize)>,
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.reading
    }
}

impl<'a> Word<'a> {
    // recursively explores the ways to assign the rest of the reading to the rest of the segments
    fn read_segments(
        &self,
        segments: &[Segment<'_>],
        position: usize,
        parts: &mut Vec<FuriganaPart>,
        alignments: &mut Vec<Vec<FuriganaPart>>,
    ) {
        let Some((segment, rest)) = segments.split_first() else {
            if position == self.reading.len() {
                alignments.push(parts.clone());
            }
            return;
        };

        if !segment.is_kanji() {
            if self.reading.matches_literal(position, segment.text) {
                parts.push(literal_part(&self.reading, segment, position));
                self.read_segments(rest, position + segment.len, parts, alignments);
                parts.pop();
            }
            return;
        }

        let admissible = self.admissible_readings(position, rest.first());
        for run_parts in self.read_run(segment, position, &admissible) {
            let consumed = run_parts
                .iter()
                .map(|p| p.value.chars().count())
                .sum::<usize>();
            let parts_len = parts.len();
            parts.extend(run_parts);
            self.read_segments(rest, position + consumed, parts, alignments);
            parts.truncate(parts_len);
        }
    }

    // the readings a kanji run starting at `position` can take
    // so that the literal after it still matches
    fn admissible_readings(&self, position: usize, next: Option<&Segment<'_>>) -> BTreeSet<String> {
        let len = self.reading.len();
        match next {
            None if position < len => BTreeSet::from([self.reading.hiragana(position, len)]),
            None => BTreeSet::new(),
            Some(literal) => (position + 1..=len.saturating_sub(literal.len))
                .filter(|&end| self.reading.matches_literal(end, literal.text))
                .map(|end| self.reading.hiragana(position, end))
                .collect(),
        }
    }

    fn read_run(
        &self,
        run: &Segment<'_>,
        position: usize,
        admissible: &BTreeSet<String>,
    ) -> Vec<Vec<FuriganaPart>> {
        if admissible.is_empty() {
            return vec![];
        }
        let mut cuts = vec![];
        self.cut(run.start, run.start + run.len, &mut vec![], &mut cuts);
        let (with_expressions, plain): (Vec<_>, Vec<_>) = cuts
            .into_iter()
            .partition(|cut| cut.iter().any(|u| matches!(u, Unit::Expression { .. })));

        for cuts in [with_expressions, plain] {
            let readings = cuts
                .iter()
                .flat_map(|cut| self.read_cut(cut, position, admissible))
                .collect::<Vec<_>>();
            if !readings.is_empty() {
                return readings;
            }
        }
        vec![]
    }

    // collects every way to cut the characters between `start` and `end` into units
    fn cut(
        &self,
        start: usize,
        end: usize,
        units: &mut Vec<Unit<'a>>,
        cuts: &mut Vec<Vec<Unit<'a>>>,
    ) {
        if start == end {
            cuts.push(units.clone());
            return;
        }

        let longest = self.resources.longest_expression().min(end - start);
        for len in 2..=longest {
            let text = self.chars[start..start + len].iter().collect::<String>();
            if let Some(expression) = self.resources.expression(&text) {
                units.push(Unit::Expression { start, expression });
                self.cut(start + len, end, units, cuts);
                units.pop();
            }
        }

        if let Some(kanji) = self.kanji_at(start) {
            units.push(Unit::Kanji {
                index: start,
                kanji,
            });
            self.cut(start + 1, end, units, cuts);
            units.pop();
        }
    }

    // 々 reads like the kanji before it
    fn kanji_at(&self, index: usize) -> Option<&'a Kanji> {
        let c = self.chars[..=index]
            .iter()
            .rev()
            .copied()
            .find(|&c| c != REPEATER)?;
        self.resources.kanji(c)
    }

    fn read_cut(
        &self,
        cut: &[Unit<'a>],
        position: usize,
        admissible: &BTreeSet<String>,
    ) -> Vec<Vec<FuriganaPart>> {
        let candidates = cut
            .iter()
            .map(|unit| self.candidates(unit))
            .collect::<Vec<_>>();

        combine_reading_choices(&candidates, admissible)
            .into_iter()
            .map(|combination| {
                let mut parts = vec![];
                let mut offset = position;
                for (unit_candidates, &choice) in candidates.iter().zip(&combination.choices) {
                    for &(min_index, max_index, len) in &unit_candidates[choice].spans {
                        let value = self.reading.slice(offset, offset + len);
                        parts.push(FuriganaPart::new(value, min_index, max_index));
                        offset += len;
                    }
                }
                parts
            })
            .collect()
    }

    fn candidates(&self, unit: &Unit<'a>) -> Vec<Candidate> {
        let last = self.chars.len() - 1;
        match *unit {
            Unit::Kanji { index, kanji } => {
                potential_kanji_readings(kanji, index == 0, index == last, self.use_nanori)
                    .into_iter()
                    .map(|reading| {
                        let len = reading.chars().count();
                        Candidate {
                            reading,
                            spans: vec![(index, index, len)],
                        }
                    })
                    .collect()
            }
            Unit::Expression { start, expression } => {
                let end = start + expression.text().chars().count() - 1;
                potential_special_readings(expression, start == 0, end == last)
                    .into_iter()
                    .filter(|special| !special.reading().is_empty())
                    .map(|special| Candidate {
                        reading: kana::to_hiragana(special.reading()),
                        spans: special
                            .solution()
                            .parts()
                            .iter()
                            .map(|p| {
                                (
                                    start + p.min_index,
                                    start + p.max_index,
                                    p.value.chars().count(),
                                )
                            })
                            .collect(),
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::resources::SpecialExpression;

    fn solve(resources: &FuriganaResourceSet, word: &str, reading: &str) -> Vec<String> {
        KanjiReadingSolver::new(false)
            .solve(resources, &VocabEntry::new(word, reading))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn zenmai_jikake() -> FuriganaResourceSet {
        FuriganaResourceSet::builder()
            .kanji(Kanji::new('仕', ["シ", "ジ", "つか.える"]))
            .kanji(Kanji::new('掛', ["カイ", "ケイ", "か.ける", "か.かる", "かかり", "-が.け"]))
            .expression(SpecialExpression::with_readings("発条", ["ぜんまい", "ばね"]))
            .unwrap()
            .build()
    }

    #[test]
    fn uses_special_expressions() {
        let resources = zenmai_jikake();
        let solutions = solve(&resources, "発条仕掛け", "ぜんまいじかけ");
        println!("{solutions:?}");
        assert_eq!(solutions, vec!["[発条|ぜんまい][仕|じ][掛|か]け"]);

        let solutions = solve(&resources, "発条仕掛け", "ばねじかけ");
        assert_eq!(solutions, vec!["[発条|ばね][仕|じ][掛|か]け"]);
    }

    #[test]
    fn needs_every_kanji() {
        let resources = zenmai_jikake();
        assert!(solve(&resources, "発条仕掛け", "はつじょうじかけ").is_empty());
        assert!(solve(&FuriganaResourceSet::default(), "難しい", "むずかしい").is_empty());
    }

    #[test]
    fn handles_okurigana() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('好', ["コウ", "この.む", "す.く", "よ.い", "い.い"]))
            .kanji(Kanji::new('嫌', ["ケン", "ゲン", "きら.う", "きら.い", "いや"]))
            .build();
        let solutions = solve(&resources, "好き嫌い", "すききらい");
        println!("{solutions:?}");
        assert_eq!(solutions, vec!["[好|す]き[嫌|きら]い"]);
    }

    #[test]
    fn handles_rendaku() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('花', ["カ", "ケ", "はな"]))
            .kanji(Kanji::new('火', ["カ", "ひ", "-び", "ほ-"]))
            .build();
        let solutions = solve(&resources, "花火", "はなび");
        assert_eq!(solutions, vec!["[花|はな][火|び]"]);
    }

    #[test]
    fn handles_gemination() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('学', ["ガク", "まな.ぶ"]))
            .kanji(Kanji::new('校', ["コウ", "キョウ"]))
            .build();
        let solutions = solve(&resources, "学校", "がっこう");
        assert_eq!(solutions, vec!["[学|がっ][校|こう]"]);
    }

    #[test]
    fn handles_repeater() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('時', ["ジ", "とき", "-どき"]))
            .build();
        let solutions = solve(&resources, "時々", "ときどき");
        println!("{solutions:?}");
        assert_eq!(solutions, vec!["[時|とき][々|どき]"]);
    }

    #[test]
    fn katakana_reading_keeps_its_script() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('学', ["ガク"]))
            .kanji(Kanji::new('校', ["コウ"]))
            .build();
        let solutions = solve(&resources, "学校", "ガッコウ");
        assert_eq!(solutions, vec!["[学|ガッ][校|コウ]"]);
    }

    #[test]
    fn matches_readings_with_long_vowel_marks() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('頁', ["ケツ", "ページ"]))
            .build();
        assert_eq!(solve(&resources, "頁", "ページ"), vec!["[頁|ページ]"]);
        assert_eq!(solve(&resources, "頁", "ぺーじ"), vec!["[頁|ぺーじ]"]);
    }

    #[test]
    fn nanori_only_on_request() {
        let resources = FuriganaResourceSet::builder()
            .kanji(Kanji::new('大', ["ダイ", "タイ", "おお-"]))
            .kanji(Kanji::new('介', ["カイ"]).with_nanori(["すけ"]))
            .build();
        assert!(solve(&resources, "大介", "だいすけ").is_empty());
        let solutions = KanjiReadingSolver::new(true)
            .solve(&resources, &VocabEntry::new("大介", "だいすけ"));
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].to_string(), "[大|だい][介|すけ]");
    }
}
