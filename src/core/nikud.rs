// File: src/core/nikud.rs

/// Vowel points and cantillation marks, as inclusive scalar ranges.
const NIKUD_RANGES: &[(u32, u32)] = &[
    (0x0591, 0x05BD), // accents and vowel points
    (0x05BF, 0x05BF), // rafe
    (0x05C1, 0x05C2), // shin and sin dots
    (0x05C4, 0x05C5), // upper and lower dots
    (0x05C7, 0x05C7), // qamats qatan
];

/// Printed-Hebrew punctuation with no counterpart in an unpointed ancient text.
const ANCIENT_PUNCTUATION: &[char] = &[
    '\u{05BE}', // maqaf
    '\u{05C3}', // sof pasuq
    '\u{05C0}', // paseq
    '\u{05C6}', // nun hafukha
];

const HEBREW_LETTERS: std::ops::RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

pub fn is_nikud(c: char) -> bool {
    let code = c as u32;
    NIKUD_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

pub fn is_ancient_punctuation(c: char) -> bool {
    ANCIENT_PUNCTUATION.contains(&c)
}

/// True for the 22 consonants and the 5 final forms.
pub fn is_hebrew_letter(c: char) -> bool {
    HEBREW_LETTERS.contains(&c)
}

/// Removes vowel points, cantillation marks and ancient punctuation.
/// Every other character, Hebrew or not, is kept as is.
pub fn strip_nikud(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_nikud(c) && !is_ancient_punctuation(c))
        .collect()
}

/// Reduces a dictionary headword to its bare letters.
///
/// Runs of Hebrew letters are concatenated, dropping anything between them
/// (spaces, digits, sense markers). Text with no Hebrew letter at all comes
/// back stripped and trimmed.
pub fn clean_hebrew_word(text: &str) -> String {
    let stripped = strip_nikud(text);
    let letters: String = stripped.chars().filter(|&c| is_hebrew_letter(c)).collect();
    if letters.is_empty() {
        stripped.trim().to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_genesis_opening() {
        let pointed = "בְּרֵאשִׁית בָּרָא אֱלֹהִים";
        assert_eq!(strip_nikud(pointed), "בראשית ברא אלהים");
    }

    #[test]
    fn drops_maqaf_and_sof_pasuq() {
        assert_eq!(strip_nikud("וְאֵת־הָאָרֶץ׃"), "ואתהארץ");
    }

    #[test]
    fn keeps_non_hebrew_characters() {
        assert_eq!(strip_nikud("Gen 1:1 אב"), "Gen 1:1 אב");
        assert_eq!(strip_nikud(""), "");
    }

    #[test]
    fn stripping_twice_changes_nothing() {
        let once = strip_nikud("שָׁלוֹם עֲלֵיכֶם");
        assert_eq!(strip_nikud(&once), once);
    }

    #[test]
    fn classifies_marks() {
        assert!(is_nikud('\u{05B8}'));
        assert!(is_nikud('\u{05C7}'));
        assert!(!is_nikud('\u{05BE}'));
        assert!(is_ancient_punctuation('\u{05BE}'));
        assert!(!is_nikud('א'));
    }

    #[test]
    fn cleans_headwords() {
        assert_eq!(clean_hebrew_word("אָב"), "אב");
        assert_eq!(clean_hebrew_word("בֵּית אֵל"), "ביתאל");
        assert_eq!(clean_hebrew_word("  1a  "), "1a");
        assert_eq!(clean_hebrew_word(""), "");
    }
}
