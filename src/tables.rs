//! Fixed phonological lookup data used when expanding readings.
//!
//! All tables are keyed on hiragana; readings are normalized before they get here.

/// The small tsu that replaces a geminated final.
pub const SMALL_TSU: char = 'っ';

/// Returns true if a reading ending in `c` can have its final mora contracted to `っ`
/// when followed by another kanji, e.g. がく + こう -> がっこう.
pub fn is_gemination_final(c: char) -> bool {
    matches!(c, 'き' | 'く' | 'ち' | 'つ')
}

/// Returns the voiced counterparts of `c` when it starts a non-initial element of a compound.
/// Returns an empty slice for characters that are never voiced.
pub fn rendaku_variants(c: char) -> &'static [char] {
    match c {
        // ka
        'か' => &['が'],
        'き' => &['ぎ'],
        'く' => &['ぐ'],
        'け' => &['げ'],
        'こ' => &['ご'],
        // sa
        'さ' => &['ざ'],
        'し' => &['じ'],
        'す' => &['ず'],
        'せ' => &['ぜ'],
        'そ' => &['ぞ'],
        // ta, ぢ and づ are commonly written じ and ず
        'た' => &['だ'],
        'ち' => &['ぢ', 'じ'],
        'つ' => &['づ', 'ず'],
        'て' => &['で'],
        'と' => &['ど'],
        // ha
        'は' => &['ば', 'ぱ'],
        'ひ' => &['び', 'ぴ'],
        'ふ' => &['ぶ', 'ぷ'],
        'へ' => &['べ', 'ぺ'],
        'ほ' => &['ぼ', 'ぽ'],
        _ => &[],
    }
}

/// Maps the dictionary-form ending of a godan verb to its masu-stem ending, e.g. む -> み.
pub fn godan_masu_stem(c: char) -> Option<char> {
    let stem = match c {
        'う' => 'い',
        'く' => 'き',
        'ぐ' => 'ぎ',
        'す' => 'し',
        'つ' => 'ち',
        'ぬ' => 'に',
        'ぶ' => 'び',
        'む' => 'み',
        'る' => 'り',
        _ => return None,
    };
    Some(stem)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn voices_ha_row_both_ways() {
        assert_eq!(rendaku_variants('は'), &['ば', 'ぱ']);
        assert_eq!(rendaku_variants('ち'), &['ぢ', 'じ']);
    }

    #[test]
    fn missing_entries_do_not_mutate() {
        assert!(rendaku_variants('あ').is_empty());
        assert!(rendaku_variants('が').is_empty());
        assert!(!is_gemination_final('ん'));
        assert_eq!(godan_masu_stem('い'), None);
    }

    #[test]
    fn maps_masu_stems() {
        assert_eq!(godan_masu_stem('く'), Some('き'));
        assert_eq!(godan_masu_stem('る'), Some('り'));
    }
}
