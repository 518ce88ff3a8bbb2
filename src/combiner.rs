//! Combines per-unit reading candidates into full readings.

use std::{collections::BTreeSet, ops::Bound};

/// One candidate picked for each unit and the resulting reading.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    pub text: String,
    /// The index of the candidate picked for each unit.
    pub choices: Vec<usize>,
}

/// Returns the distinct concatenations of one candidate per unit that are in `admissible`.
pub fn combine_readings<S: AsRef<str>>(
    readings: &[Vec<S>],
    admissible: &BTreeSet<String>,
) -> Vec<String> {
    let mut texts = combine_reading_choices(readings, admissible)
        .into_iter()
        .map(|c| c.text)
        .collect::<Vec<_>>();
    texts.sort();
    texts.dedup();
    texts
}

/// Like [`combine_readings`], but keeps track of which candidate was picked for each unit.
///
/// Branches are abandoned as soon as no admissible reading starts with the reading built so far,
/// so the work done depends on the number of live prefixes rather than on the size of the product.
pub fn combine_reading_choices<S: AsRef<str>>(
    readings: &[Vec<S>],
    admissible: &BTreeSet<String>,
) -> Vec<Combination> {
    let mut combinations = vec![];
    if readings.is_empty() {
        if admissible.contains("") {
            combinations.push(Combination {
                text: String::new(),
                choices: vec![],
            });
        }
        return combinations;
    }
    combine_inner(
        readings,
        admissible,
        &mut String::new(),
        &mut vec![],
        &mut combinations,
    );
    combinations
}

fn combine_inner<S: AsRef<str>>(
    readings: &[Vec<S>],
    admissible: &BTreeSet<String>,
    prefix: &mut String,
    choices: &mut Vec<usize>,
    combinations: &mut Vec<Combination>,
) {
    let Some((unit, rest)) = readings.split_first() else {
        return;
    };
    for (idx, candidate) in unit.iter().enumerate() {
        let prefix_len = prefix.len();
        prefix.push_str(candidate.as_ref());
        choices.push(idx);

        if rest.is_empty() {
            if admissible.contains(prefix.as_str()) {
                combinations.push(Combination {
                    text: prefix.clone(),
                    choices: choices.clone(),
                });
            }
        } else if is_live_prefix(admissible, prefix) {
            combine_inner(rest, admissible, prefix, choices, combinations);
        }

        prefix.truncate(prefix_len);
        choices.pop();
    }
}

// the strings starting with `prefix` are contiguous in the set,
// beginning at the first one not less than it
fn is_live_prefix(admissible: &BTreeSet<String>, prefix: &str) -> bool {
    admissible
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .next()
        .is_some_and(|s| s.starts_with(prefix))
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn combines_admissible_readings() {
        let readings = vec![strings(&["じ", "し"]), strings(&["か", "かけ", "が"])];
        let admissible = set(&["じ", "じか", "じかけ"]);
        let combined = combine_readings(&readings, &admissible);
        println!("{combined:?}");
        assert_eq!(combined, strings(&["じか", "じかけ"]));
    }

    #[test]
    fn never_returns_inadmissible_values() {
        let readings = vec![
            strings(&["あ", "い", "う"]),
            strings(&["か", "き"]),
            strings(&["さ", "し"]),
        ];
        let admissible = set(&["あかさ", "いきし", "うくす", "あか"]);
        let combined = combine_readings(&readings, &admissible);
        assert_eq!(combined, strings(&["あかさ", "いきし"]));
        assert!(combined.iter().all(|c| admissible.contains(c)));
    }

    #[test]
    fn tracks_choices() {
        let readings = vec![strings(&["ぜんまい", "ばね"]), strings(&["し", "じ"])];
        let admissible = set(&["ぜんまいじ"]);
        let combinations = combine_reading_choices(&readings, &admissible);
        assert_eq!(
            combinations,
            vec![Combination {
                text: "ぜんまいじ".to_string(),
                choices: vec![0, 1],
            }]
        );
    }

    #[test]
    fn empty_unit_has_no_combinations() {
        let readings = vec![strings(&["あ"]), vec![]];
        assert!(combine_readings(&readings, &set(&["あ"])).is_empty());
    }

    #[test]
    fn live_prefixes() {
        let admissible = set(&["あいう", "かき"]);
        assert!(is_live_prefix(&admissible, "あ"));
        assert!(is_live_prefix(&admissible, "あいう"));
        assert!(!is_live_prefix(&admissible, "あう"));
        assert!(!is_live_prefix(&admissible, "さ"));
    }
}
