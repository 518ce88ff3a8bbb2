//! Expands the dictionary readings of a kanji into every form it can take inside a word.

use crate::{kana, resources::Kanji, tables};
use std::collections::HashSet;

/// Returns every reading `kanji` can plausibly have at its position in a word.
///
/// Suffix-only readings are skipped for the first character and prefix-only readings
/// for the last one. Readings with okurigana contribute their stem, the stem extended by part
/// of the okurigana and the masu-stem for godan verbs. On top of that, readings may end in
/// a small tsu unless the kanji is the last character, and may start voiced unless it is
/// the first one.
pub fn potential_kanji_readings(
    kanji: &Kanji,
    is_first_char: bool,
    is_last_char: bool,
    use_nanori: bool,
) -> Vec<String> {
    let base = if use_nanori {
        kanji.readings_with_nanori()
    } else {
        kanji.readings()
    };

    let mut readings = vec![];
    for marked in base {
        if is_first_char && marked.starts_with('-') {
            // suffix-only reading can't open a word
            continue;
        }
        if is_last_char && marked.ends_with('-') {
            // prefix-only reading can't close a word
            continue;
        }

        let cleaned = marked.replace('-', "");
        match cleaned.split('.').collect::<Vec<_>>().as_slice() {
            [reading] => readings.push(kana::to_hiragana(reading)),
            [stem, okurigana] => {
                let stem = kana::to_hiragana(stem);
                let okurigana = kana::to_hiragana(okurigana).chars().collect::<Vec<_>>();
                readings.push(stem.clone());
                // part of the okurigana may be written with the kanji itself
                for len in 1..okurigana.len() {
                    let mut reading = stem.clone();
                    reading.extend(&okurigana[..len]);
                    readings.push(reading);
                }
                if let Some((&last, init)) = okurigana.split_last() {
                    if let Some(masu_stem) = tables::godan_masu_stem(last) {
                        let mut reading = stem.clone();
                        reading.extend(init);
                        reading.push(masu_stem);
                        readings.push(reading);
                    }
                }
            }
            _ => {
                tracing::debug!(
                    kanji = %kanji.character(),
                    reading = %marked,
                    "skipping reading with more than one okurigana separator"
                );
            }
        }
    }

    if !is_last_char {
        let geminated = readings
            .iter()
            .filter_map(|r| geminate(r))
            .collect::<Vec<_>>();
        readings.extend(geminated);
    }
    if !is_first_char {
        let voiced = readings
            .iter()
            .flat_map(|r| voice(r))
            .collect::<Vec<_>>();
        readings.extend(voiced);
    }

    let mut seen = HashSet::new();
    readings.retain(|r| !r.is_empty() && seen.insert(r.clone()));
    readings
}

/// Replaces the final character with a small tsu if it can be geminated.
pub(crate) fn geminate(reading: &str) -> Option<String> {
    let last = reading.chars().last()?;
    if !tables::is_gemination_final(last) {
        return None;
    }
    let mut geminated = reading[..reading.len() - last.len_utf8()].to_string();
    geminated.push(tables::SMALL_TSU);
    Some(geminated)
}

/// Returns one variant per voiced counterpart of the first character.
pub(crate) fn voice(reading: &str) -> Vec<String> {
    let Some(first) = reading.chars().next() else {
        return vec![];
    };
    let rest = &reading[first.len_utf8()..];
    tables::rendaku_variants(first)
        .iter()
        .map(|voiced| format!("{voiced}{rest}"))
        .collect()
}
