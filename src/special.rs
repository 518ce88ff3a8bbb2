//! Expands the curated readings of special expressions the same way kanji readings are expanded.

use crate::{
    reading::{geminate, voice},
    resources::{SpecialExpression, SpecialReading},
    solution::VocabEntry,
};

/// Returns the readings of `expression` along with their geminated and voiced variants.
///
/// Only the ends of a reading mutate: the part covering the last character when geminating,
/// the part covering the first character when voicing. The boundaries between parts stay
/// as curated.
pub fn potential_special_readings(
    expression: &SpecialExpression,
    is_first_char: bool,
    is_last_char: bool,
) -> Vec<SpecialReading> {
    let mut readings = expression.readings().to_vec();
    let last_index = expression.text().chars().count().saturating_sub(1);

    if !is_last_char {
        let geminated = readings
            .iter()
            .filter_map(|r| geminate_special(r, last_index))
            .collect::<Vec<_>>();
        readings.extend(geminated);
    }
    if !is_first_char {
        let voiced = readings
            .iter()
            .flat_map(voice_special)
            .collect::<Vec<_>>();
        readings.extend(voiced);
    }

    let mut unique: Vec<SpecialReading> = Vec::with_capacity(readings.len());
    for reading in readings {
        if !unique.contains(&reading) {
            unique.push(reading);
        }
    }
    unique
}

fn geminate_special(special: &SpecialReading, last_index: usize) -> Option<SpecialReading> {
    let reading = geminate(special.reading())?;
    let template = special.solution();
    let value = geminate(&template.part_at(last_index)?.value)?;
    let vocab = VocabEntry::new(template.vocab().kanji_form(), reading.clone());
    let solution = template.with_part_value(vocab, last_index, value);
    Some(SpecialReading::new(reading, solution))
}

fn voice_special(special: &SpecialReading) -> Vec<SpecialReading> {
    let template = special.solution();
    let Some(first_part) = template.part_at(0) else {
        return vec![];
    };
    voice(special.reading())
        .into_iter()
        .zip(voice(&first_part.value))
        .map(|(reading, value)| {
            let vocab = VocabEntry::new(template.vocab().kanji_form(), reading.clone());
            SpecialReading::new(reading, template.with_part_value(vocab, 0, value))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::solution::{FuriganaPart, FuriganaSolution};

    fn readings_of(specials: &[SpecialReading]) -> Vec<&str> {
        specials.iter().map(SpecialReading::reading).collect()
    }

    #[test]
    fn keeps_base_readings_in_isolation() {
        let expression = SpecialExpression::with_readings("発条", ["ぜんまい", "ばね"]);
        let readings = potential_special_readings(&expression, true, true);
        assert_eq!(readings_of(&readings), vec!["ぜんまい", "ばね"]);
    }

    #[test]
    fn mutates_both_ends() {
        let expression = SpecialExpression::with_readings("一日", ["ついたち"]);
        let readings = potential_special_readings(&expression, false, false);
        println!("{:?}", readings_of(&readings));
        assert_eq!(
            readings_of(&readings),
            vec![
                "ついたち",
                "ついたっ",
                "づいたち",
                "ずいたち",
                "づいたっ",
                "ずいたっ"
            ]
        );
        let geminated = &readings[1];
        assert_eq!(
            geminated.solution().parts(),
            &[FuriganaPart::new("ついたっ", 0, 1)]
        );
        assert_eq!(geminated.solution().vocab().reading(), "ついたっ");
    }

    #[test]
    fn position_limits_mutations() {
        let expression = SpecialExpression::with_readings("一日", ["ついたち"]);

        let last = potential_special_readings(&expression, false, true);
        println!("{:?}", readings_of(&last));
        assert_eq!(readings_of(&last), vec!["ついたち", "づいたち", "ずいたち"]);

        let first = potential_special_readings(&expression, true, false);
        assert_eq!(readings_of(&first), vec!["ついたち", "ついたっ"]);

        let alone = potential_special_readings(&expression, true, true);
        assert_eq!(readings_of(&alone), vec!["ついたち"]);
    }

    #[test]
    fn keeps_internal_boundaries() {
        let vocab = VocabEntry::new("今朝", "けさ");
        let template = FuriganaSolution::new(
            vocab,
            vec![FuriganaPart::single("け", 0), FuriganaPart::single("さ", 1)],
        );
        let expression =
            SpecialExpression::new("今朝", vec![SpecialReading::new("けさ", template)]);

        let readings = potential_special_readings(&expression, false, true);
        assert_eq!(readings_of(&readings), vec!["けさ", "げさ"]);
        assert_eq!(
            readings[1].solution().parts(),
            &[FuriganaPart::single("げ", 0), FuriganaPart::single("さ", 1)]
        );
        assert!(readings[1].solution().is_valid());
        // the template itself is untouched
        assert_eq!(expression.readings()[0].solution().parts()[0].value, "け");
    }
}
