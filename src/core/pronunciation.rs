// File: src/core/pronunciation.rs
//! Reconstructed Pre-Exilic (c. 1000-600 BCE) pronunciation for text-to-speech.
//!
//! The output is a plausible approximation for a speech synthesizer, not a
//! scholarly transliteration. Conventions: no letter acts as a true vowel yet,
//! `ו` is /w/, and consonants are never spirantized.
//!
//! Words are pronounced in two passes. Known words come from
//! [`PRONUNCIATION_PATTERNS`]. Whatever is left is spelled consonant by
//! consonant from the sound table, with one vowel inserted between adjacent
//! letters according to [`VOWEL_RULES`].

use crate::core::alphabet::fold_final;
use crate::core::converter::PaleoConverter;
use crate::core::nikud::strip_nikud;
use crate::core::types::ScriptMode;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::ops::Range;

/// Hand-authored pronunciations of known consonantal words.
/// Keys are compared with final forms folded, so Paleo input matches too.
pub const PRONUNCIATION_PATTERNS: &[(&str, &str)] = &[
    ("בראשית", "ba-ra-sheet"), // in the beginning
    ("ברא", "ba-ra"),          // he created
    ("אלהים", "eh-lo-heem"),   // God
    ("את", "eht"),             // object marker
    ("השמים", "ha-sha-ma-yim"), // the heavens
    ("ואת", "wa-eht"),
    ("הארץ", "ha-ah-rets"), // the earth
    ("והארץ", "wa-ha-ah-rets"),
    ("היתה", "ha-ya-tah"),
    ("תהו", "to-hu"), // formless
    ("ובהו", "wa-vo-hu"),
    ("וחשך", "wa-cho-shek"),
    ("על", "ahl"),
    ("פני", "pa-nay"),
    ("תהום", "ta-hohm"), // the deep
    ("ורוח", "wa-ru-ach"),
    ("מרחפת", "ma-ra-che-fet"),
    ("ויאמר", "wa-yo-mer"), // and he said
    ("יהי", "ya-hee"),
    ("אור", "ohr"), // light
    ("וירא", "wa-yar"),
    ("כי", "kee"),
    ("טוב", "tohv"),
    ("ויבדל", "wa-yav-dehl"),
    ("בין", "bayn"),
    ("ויקרא", "wa-yiq-ra"),
    ("לילה", "lay-lah"),
    ("ויהי", "wa-ya-hee"),
    ("ערב", "eh-rev"),
    ("בקר", "bo-qer"),
    ("יום", "yohm"),
    ("אחד", "eh-chad"),
    ("רקיע", "ra-qee-a"), // firmament
    ("בתוך", "ba-tokh"),
    ("המים", "ha-ma-yim"),
    ("יבדיל", "yav-deel"),
    ("מעל", "may-ahl"),
    ("מתחת", "mi-ta-chat"),
    ("כן", "kayn"),
    ("שלום", "sha-lohm"), // peace
];

/// Patterns shorter than this only match whole words. Two-letter particles
/// such as `את` would otherwise fire inside almost any longer word.
pub const MIN_EMBEDDED_PATTERN_LEN: usize = 3;

/// Where a vowel is being inserted: after the letter at `position`, before `next`.
#[derive(Debug, Clone, Copy)]
pub struct VowelSite {
    pub position: usize,
    pub word_len: usize,
    pub next: char,
}

pub struct VowelRule {
    pub name: &'static str,
    pub applies: fn(&VowelSite) -> bool,
    pub vowel: char,
}

const SONORANTS: &[char] = &['י', 'ל', 'נ', 'ר'];

/// Vowel insertion heuristic, first matching rule wins. Linguistically
/// approximate by construction.
pub const VOWEL_RULES: &[VowelRule] = &[
    VowelRule {
        name: "word start",
        applies: |site| site.position == 0,
        vowel: 'a',
    },
    VowelRule {
        name: "before final consonant",
        applies: |site| site.position + 2 == site.word_len,
        vowel: 'e',
    },
    VowelRule {
        name: "before sonorant",
        applies: |site| SONORANTS.contains(&fold_final(site.next)),
        vowel: 'e',
    },
    VowelRule {
        name: "medial",
        applies: |_| true,
        vowel: 'a',
    },
];

pub fn contextual_vowel(site: &VowelSite) -> char {
    VOWEL_RULES
        .iter()
        .find(|rule| (rule.applies)(site))
        .map(|rule| rule.vowel)
        .unwrap_or('a')
}

/// Ancient consonant sound of a Hebrew letter. `א` is a silent glottal stop.
pub fn ancient_sound(c: char) -> Option<&'static str> {
    match c {
        'א' => Some(""),
        'ב' => Some("b"),
        'ג' => Some("g"),
        'ד' => Some("d"),
        'ה' => Some("h"),
        'ו' => Some("w"),
        'ז' => Some("z"),
        'ח' => Some("ch"),
        'ט' => Some("t"),
        'י' => Some("y"),
        'כ' | 'ך' => Some("k"),
        'ל' => Some("l"),
        'מ' | 'ם' => Some("m"),
        'נ' | 'ן' => Some("n"),
        'ס' => Some("s"),
        'ע' => Some("ah"),
        'פ' | 'ף' => Some("p"),
        'צ' | 'ץ' => Some("ts"),
        'ק' => Some("q"),
        'ר' => Some("r"),
        'ש' => Some("sh"),
        'ת' => Some("t"),
        _ => None,
    }
}

/// Simple modern reading of a letter, used by the pronunciation guide.
fn modern_sound(c: char) -> Option<&'static str> {
    match fold_final(c) {
        'א' | 'ע' => Some(""),
        'ב' => Some("b"),
        'ג' => Some("g"),
        'ד' => Some("d"),
        'ה' => Some("h"),
        'ו' => Some("v"),
        'ז' => Some("z"),
        'ח' => Some("ch"),
        'ט' | 'ת' => Some("t"),
        'י' => Some("y"),
        'כ' => Some("k"),
        'ל' => Some("l"),
        'מ' => Some("m"),
        'נ' => Some("n"),
        'ס' => Some("s"),
        'פ' => Some("p"),
        'צ' => Some("ts"),
        'ק' => Some("q"),
        'ר' => Some("r"),
        'ש' => Some("sh"),
        _ => None,
    }
}

struct PatternIndex {
    whole_words: HashMap<Vec<char>, &'static str>,
    /// Longest keys first; table order among equal lengths.
    embedded: Vec<(Vec<char>, &'static str)>,
}

impl PatternIndex {
    fn build() -> Self {
        let mut whole_words = HashMap::new();
        let mut embedded = Vec::new();
        for &(key, pronunciation) in PRONUNCIATION_PATTERNS {
            let folded: Vec<char> = key.chars().map(fold_final).collect();
            if folded.len() >= MIN_EMBEDDED_PATTERN_LEN {
                embedded.push((folded.clone(), pronunciation));
            }
            whole_words.entry(folded).or_insert(pronunciation);
        }
        embedded.sort_by_key(|(key, _)| std::cmp::Reverse(key.len()));
        Self { whole_words, embedded }
    }

    fn whole_word(&self, folded: &[char]) -> Option<&'static str> {
        self.whole_words.get(folded).copied()
    }

    fn longest_at(&self, folded: &[char], start: usize) -> Option<(usize, &'static str)> {
        let rest = &folded[start..];
        self.embedded
            .iter()
            .find(|(key, _)| rest.starts_with(key))
            .map(|(key, pronunciation)| (key.len(), *pronunciation))
    }
}

static PATTERN_INDEX: Lazy<PatternIndex> = Lazy::new(PatternIndex::build);

/// Ancient-pronunciation transliterator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AncientPronouncer {
    converter: PaleoConverter,
}

impl AncientPronouncer {
    pub fn new() -> Self {
        Self {
            converter: PaleoConverter::new(),
        }
    }

    /// Transliterates Hebrew (nikud allowed) or Paleo text to a Latin
    /// phonetic string. Unrecognized characters are kept, so the output stays
    /// readable even for malformed input.
    pub fn transliterate(&self, text: &str, mode: ScriptMode) -> String {
        let letters = match mode {
            ScriptMode::Hebrew => strip_nikud(text),
            ScriptMode::Paleo => self.converter.to_hebrew(text),
        };

        letters
            .split_whitespace()
            .map(|word| self.pronounce_word(&word.chars().collect::<Vec<_>>()))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Transliteration with syllable hyphens turned into spaces, for TTS engines.
    pub fn tts_text(&self, text: &str, mode: ScriptMode) -> String {
        self.transliterate(text, mode)
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consonant-only modern reading of Hebrew text. No vowels are inserted.
    pub fn pronunciation_guide(&self, hebrew: &str) -> String {
        let guide: String = strip_nikud(hebrew)
            .chars()
            .map(|c| match modern_sound(c) {
                Some(sound) => sound.to_string(),
                None => c.to_string(),
            })
            .collect();
        guide.trim().to_string()
    }

    /// Sound of a single Hebrew letter or Paleo glyph.
    pub fn letter_sound(&self, symbol: char) -> Option<&'static str> {
        let letter = self.converter.hebrew_letter(symbol).unwrap_or(symbol);
        ancient_sound(letter)
    }

    fn pronounce_word(&self, word: &[char]) -> String {
        let folded: Vec<char> = word.iter().copied().map(fold_final).collect();
        if let Some(pronunciation) = PATTERN_INDEX.whole_word(&folded) {
            tracing::debug!(pronunciation, "whole-word pattern");
            return pronunciation.to_string();
        }

        let mut pronounced = String::new();
        let mut chunk_start = 0;
        let mut i = 0;
        while i < word.len() {
            match PATTERN_INDEX.longest_at(&folded, i) {
                Some((len, pronunciation)) => {
                    tracing::debug!(pronunciation, offset = i, "embedded pattern");
                    append_part(&mut pronounced, &self.spell_letters(word, chunk_start..i));
                    append_part(&mut pronounced, pronunciation);
                    i += len;
                    chunk_start = i;
                }
                None => i += 1,
            }
        }
        append_part(&mut pronounced, &self.spell_letters(word, chunk_start..word.len()));
        pronounced
    }

    /// Letter-by-letter fallback for `word[chunk]` with contextual vowel
    /// insertion. Vowel sites are measured against the whole word, so a chunk
    /// that follows a spliced pattern is not treated as a word start.
    fn spell_letters(&self, word: &[char], chunk: Range<usize>) -> String {
        let mut result = String::new();
        let word_len = word.len();

        for position in chunk.clone() {
            let c = word[position];
            let Some(sound) = ancient_sound(c) else {
                result.push(c);
                continue;
            };
            result.push_str(sound);
            if sound.is_empty() {
                continue;
            }

            if position + 1 < chunk.end {
                let next = word[position + 1];
                if ancient_sound(next).is_some() {
                    result.push(contextual_vowel(&VowelSite {
                        position,
                        word_len,
                        next,
                    }));
                }
            }
        }
        result
    }
}

/// Appends one piece of a word. Pronounced pieces are joined with `-`;
/// pieces with no letters (trailing punctuation) attach directly.
fn append_part(pronounced: &mut String, part: &str) {
    if part.is_empty() {
        return;
    }
    let voiced = |s: &str| s.chars().any(char::is_alphabetic);
    if voiced(part) && pronounced.chars().last().is_some_and(char::is_alphabetic) {
        pronounced.push('-');
    }
    pronounced.push_str(part);
}
