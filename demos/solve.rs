//! Solves a few words and prints what was found.
//! Run with `RUST_LOG=furigana_align=trace` to see how the strategies are arbitrated.

use furigana_align::{
    FuriganaBusinessLogic, FuriganaResourceSet, FuriganaSolution, Kanji, Outcome,
    SpecialExpression, VocabEntry,
};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let resources = FuriganaResourceSet::builder()
        .kanji(Kanji::new('好', ["コウ", "この.む", "す.く", "よ.い", "い.い"]))
        .kanji(Kanji::new('嫌', ["ケン", "ゲン", "きら.う", "きら.い", "いや"]))
        .kanji(Kanji::new('仕', ["シ", "ジ", "つか.える"]))
        .kanji(Kanji::new('掛', ["カイ", "ケイ", "か.ける", "か.かる", "かかり"]))
        .kanji(Kanji::new('時', ["ジ", "とき", "-どき"]))
        .expression(SpecialExpression::with_readings("発条", ["ぜんまい", "ばね"]))?
        .build();
    let logic = Arc::new(FuriganaBusinessLogic::new(Arc::new(resources)));

    let words = [
        ("難しい", "むずかしい"),
        ("好き嫌い", "すききらい"),
        ("発条仕掛け", "ぜんまいじかけ"),
        ("時々", "ときどき"),
        ("大人しい", "おとなしい"),
        ("歯医者", "はいしゃ"),
    ];
    let entries = words
        .into_iter()
        .map(|(word, reading)| VocabEntry::new(word, reading))
        .collect::<Vec<_>>();

    for solutions in logic.solve_range(entries) {
        let vocab = solutions.vocab();
        match solutions.outcome() {
            Outcome::Solved(solution) => {
                println!(
                    "{} ({}): {solution} {}",
                    vocab.kanji_form(),
                    vocab.reading(),
                    solution.serialize()
                );
            }
            Outcome::Ambiguous(count) => {
                println!("{} ({}): {count} candidates", vocab.kanji_form(), vocab.reading());
                for solution in &solutions {
                    println!("  {solution}");
                }
            }
            Outcome::Unsolvable => {
                println!("{} ({}): no solution", vocab.kanji_form(), vocab.reading());
            }
        }
    }

    let vocab = VocabEntry::new("好き嫌い", "すききらい");
    let parsed = FuriganaSolution::try_parse("0|す;2|きら", &vocab)?;
    println!("parsed {parsed}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
