//! Character classification and kana normalization.

use wana_kana::utils::{is_char_hiragana, is_char_katakana};

const UNICODE_KANA_TABLE_DISTANCE: u32 = 0x60;

/// The kanji repetition mark, read like the kanji before it.
pub const REPEATER: char = '々';

/// Hiragana, including the long vowel mark.
pub fn is_hiragana(c: char) -> bool {
    is_char_hiragana(c)
}

pub fn is_katakana(c: char) -> bool {
    is_char_katakana(c)
}

pub fn is_kana(c: char) -> bool {
    (is_hiragana(c) || is_katakana(c)) && !is_kanji(c)
}

/// Returns true for characters that take furigana.
// ヶ and 〆 are kana-like glyphs read as words of their own, so they are grouped with kanji here
pub fn is_kanji(c: char) -> bool {
    (0x4E00..=0x9FFF).contains(&(c as u32))
        || (0x3400..=0x4DBF).contains(&(c as u32))
        || matches!(c, REPEATER | '〆' | 'ヶ')
}

pub fn is_small_kana(c: char) -> bool {
    matches!(
        hiragana_char(c),
        'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'っ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ' | 'ー'
    )
}

/// Converts a single katakana character to hiragana, leaving everything else untouched.
pub fn hiragana_char(c: char) -> char {
    let code = c as u32;
    if (0x30A1..=0x30F6).contains(&code) {
        char::from_u32(code - UNICODE_KANA_TABLE_DISTANCE).unwrap_or(c)
    } else {
        c
    }
}

/// Normalizes kana to hiragana one character at a time. The long vowel mark is kept as is,
/// so dictionary readings and word readings are normalized the same way.
pub fn to_hiragana(kana: &str) -> String {
    kana.chars().map(hiragana_char).collect()
}

/// Checks whether the strings are equivalent if ignoring the difference between hiragana
/// and katakana.
/// A long vowel mark matches the vowel it extends.
pub fn kana_equivalent(left: &str, right: &str) -> bool {
    if left.chars().count() != right.chars().count() {
        return false;
    }
    let mut previous: Option<char> = None;
    for (left, right) in left.chars().zip(right.chars()) {
        let left = hiragana_char(left);
        let right = hiragana_char(right);
        let equivalent = left == right
            || (left == 'ー' && previous.is_some_and(|p| is_extension(p, right)))
            || (right == 'ー' && previous.is_some_and(|p| is_extension(p, left)));
        if !equivalent {
            return false;
        }
        previous = Some(if left == 'ー' { right } else { left });
    }
    true
}

// checks if the next char can be an "extension" of the previous char
// the same way ー is used for katakana.
fn is_extension(previous: char, next: char) -> bool {
    // find the comma on each line
    matches!(
        (previous, next),
        ('あ' | 'か' | 'さ' | 'た' | 'な' | 'は' | 'ま' | 'や' | 'ら' | 'わ', 'あ')
            | ('い' | 'き' | 'し' | 'ち' | 'に' | 'ひ' | 'み' | 'り', 'い')
            | ('う' | 'く' | 'す' | 'つ' | 'ぬ' | 'ふ' | 'む' | 'ゆ' | 'る', 'う')
            | ('え' | 'け' | 'せ' | 'て' | 'ね' | 'へ' | 'め' | 'れ', 'え' | 'い')
            | ('お' | 'こ' | 'そ' | 'と' | 'の' | 'ほ' | 'も' | 'よ' | 'ろ', 'お' | 'う')
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_characters() {
        assert!(is_kanji('難'));
        assert!(is_kanji('々'));
        assert!(is_kanji('ヶ'));
        assert!(!is_kana('ヶ'));
        assert!(is_kana('ひ'));
        assert!(is_kana('カ'));
        assert!(!is_kanji(' '));
        assert!(!is_kana(' '));
    }

    #[test]
    fn converts_katakana_per_char() {
        assert_eq!(hiragana_char('カ'), 'か');
        assert_eq!(hiragana_char('ッ'), 'っ');
        assert_eq!(hiragana_char('か'), 'か');
        assert_eq!(hiragana_char('ー'), 'ー');
        assert_eq!(to_hiragana("コウ"), "こう");
        assert_eq!(to_hiragana("きら"), "きら");
        assert_eq!(to_hiragana("ラーメン"), "らーめん");
        assert!(is_kana('ー'));
    }

    #[test]
    fn kana_insensitive() {
        assert!(kana_equivalent("はなれる", "ハナレル"));
        assert!(kana_equivalent("", ""));
        assert!(!kana_equivalent("はな", "はなれ"));
        assert!(!kana_equivalent(" ", "  "));
    }

    #[test]
    fn long_vowel_mark() {
        assert!(kana_equivalent("らーめん", "らあめん"));
        assert!(kana_equivalent("コーヒー", "こうひい"));
        assert!(!kana_equivalent("ー", "あ"));
    }
}
