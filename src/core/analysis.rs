// File: src/core/analysis.rs
//! Pictographic root analysis.
//!
//! A word is read letter by letter against the alphabet glosses and the
//! concepts are strung into a narrative. The sentence templates are mechanical
//! and make no etymological claim.

use crate::core::alphabet::{fold_final, gloss_for};
use serde::{Deserialize, Serialize};

/// Canonical English keys and the narrative used when a gloss mentions one.
/// Scanned in order; the first key found among the gloss's words wins.
/// `{first}` is replaced with the word's first letter.
pub const FORMATION_PATTERNS: &[(&str, &str)] = &[
    // family
    ("father", "The strong leader ({first}) who provides shelter and protection"),
    ("mother", "The source of life and nurturing that surrounds and protects"),
    ("son", "The continuation and building upon the foundation"),
    ("daughter", "The opening and entrance to new family connections"),
    ("brother", "The joining together in strength and unity"),
    ("sister", "The connection and binding of family relationships"),
    // divine
    ("god", "The mighty authority who reveals power and control"),
    ("lord", "The supreme authority with power over all"),
    ("holy", "Set apart and separated for divine purpose"),
    ("spirit", "The breath and life-force that moves and reveals"),
    // creation
    ("heaven", "The dwelling place of divine authority above"),
    ("earth", "The foundation and substance of physical existence"),
    ("water", "The mighty flowing force of life and chaos"),
    ("fire", "The consuming and purifying force of destruction and light"),
    ("light", "The revealing power that illuminates and makes known"),
    ("darkness", "The concealing and unknown realm without revelation"),
    // people
    ("man", "The strong one who moves through life's challenges"),
    ("woman", "The source of life and the opening to continuation"),
    ("people", "The gathering of many in unity and purpose"),
    ("nation", "The mighty mass of people joined together"),
    // actions
    ("create", "To bring forth the first strength from within"),
    ("make", "To shape and form through work and power"),
    ("speak", "To release breath and communication from within"),
    ("see", "To experience and understand through perception"),
    ("hear", "To gather and receive communication"),
    ("walk", "To move along the path of life"),
    ("come", "To move toward a destination or purpose"),
    ("go", "To move away from present position"),
    // abstractions
    ("peace", "Authority that controls chaos and brings security"),
    ("love", "The binding and connecting force that joins"),
    ("wisdom", "The boundary that controls chaos and reveals truth"),
    ("knowledge", "The gathering and seeing of understanding"),
    ("understanding", "The deep seeing beneath the surface"),
    ("strength", "The mighty power that leads and protects"),
    ("righteousness", "The pursuit and catching of what is right"),
    // places and things
    ("house", "The place of dwelling and family activity"),
    ("city", "The gathering place surrounded by protection"),
    ("mountain", "The high place of strength and stability"),
    ("river", "The flowing mighty waters that give life"),
    ("tree", "The living thing that connects earth and heaven"),
    ("stone", "The solid foundation and enduring strength"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedLetter {
    /// Hebrew base letter.
    pub letter: char,
    pub paleo: char,
    pub name: String,
    pub meaning: String,
    pub pictograph: String,
    pub concept: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictographicAnalysis {
    /// Recognized letters as Hebrew, in input order.
    pub root_letters: String,
    pub letters: Vec<AnalyzedLetter>,
    /// e.g. `𐤀 (ox head, strong leader) + 𐤁 (tent floor plan, house)`
    pub pictographic_analysis: String,
    pub original_concept: String,
}

impl PictographicAnalysis {
    pub fn concepts(&self) -> Vec<&str> {
        self.letters.iter().map(|l| l.concept.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterAnalyzer;

impl LetterAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes a consonantal word given as Hebrew letters or Paleo glyphs.
    ///
    /// Symbols without a gloss are skipped. Returns `None` when no letter is
    /// recognized; nothing is made up for such input.
    pub fn analyze(&self, word: &str) -> Option<PictographicAnalysis> {
        let letters: Vec<AnalyzedLetter> = word
            .chars()
            .filter_map(gloss_for)
            .map(|gloss| AnalyzedLetter {
                letter: gloss.letter,
                paleo: gloss.paleo,
                name: gloss.name.to_string(),
                meaning: gloss.meaning.to_string(),
                pictograph: gloss.pictograph.to_string(),
                concept: gloss.concept.to_string(),
            })
            .collect();

        if letters.is_empty() {
            tracing::debug!(word, "no recognized letters, analysis unavailable");
            return None;
        }

        let pictographic_analysis = letters
            .iter()
            .map(|l| format!("{} ({})", l.paleo, l.pictograph))
            .collect::<Vec<_>>()
            .join(" + ");
        let concepts: Vec<&str> = letters.iter().map(|l| l.concept.as_str()).collect();
        let original_concept = original_concept(&concepts);
        let root_letters = letters.iter().map(|l| l.letter).collect();

        Some(PictographicAnalysis {
            root_letters,
            letters,
            pictographic_analysis,
            original_concept,
        })
    }

    /// Explains how a word's letters form its English meaning.
    ///
    /// `english_gloss` is usually a Strong's short definition. A known key in
    /// the gloss selects a canned narrative; otherwise the first one or two
    /// concepts are used, and with no concepts at all the root letters are
    /// named. A non-empty gloss is prefixed in title case: `"Father = ..."`.
    pub fn formation_explanation(
        &self,
        english_gloss: &str,
        root_letters: &str,
        concepts: &[&str],
    ) -> String {
        let body = match formation_pattern(english_gloss) {
            Some(pattern) => {
                let first = root_letters
                    .chars()
                    .next()
                    .map(|c| fold_final(c).to_string())
                    .unwrap_or_default();
                pattern.replace("{first}", &first)
            }
            None => match concepts {
                [first, second, ..] => format!("The {first} that involves {second}"),
                [only] => format!("Related to {only}"),
                [] => format!("Word formed from Hebrew root {root_letters}"),
            },
        };

        let gloss = english_gloss.trim();
        if gloss.is_empty() {
            body
        } else {
            format!("{} = {}", title_case(gloss), body)
        }
    }

    pub fn explain(&self, english_gloss: &str, analysis: &PictographicAnalysis) -> String {
        self.formation_explanation(english_gloss, &analysis.root_letters, &analysis.concepts())
    }
}

/// Narrative template keyed on the number of recognized letters.
pub fn original_concept(concepts: &[&str]) -> String {
    match concepts {
        [] => String::new(),
        [a] => format!("The {a}"),
        [a, b] => format!("The {a} connected to {b}"),
        [a, b, c] => format!("The {a} that {b} through {c}"),
        [a, b, c, d] => format!("The {a} with {b} that {c} and {d}"),
        [a, b, c, ..] => format!("Complex formation involving {a}, {b}, {c} and more"),
    }
}

/// First table key that equals one of the gloss's words, allowing a plain
/// `-s`/`-es` plural. Matching whole words keeps "son" out of "Samson".
fn formation_pattern(english_gloss: &str) -> Option<&'static str> {
    let lowered = english_gloss.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    FORMATION_PATTERNS
        .iter()
        .find(|(key, _)| words.iter().any(|word| word_matches_key(word, key)))
        .map(|(_, pattern)| *pattern)
}

fn word_matches_key(word: &str, key: &str) -> bool {
    match word.strip_prefix(key) {
        Some(rest) => rest.is_empty() || rest == "s" || rest == "es",
        None => false,
    }
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = c != '\'';
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_father() {
        let analysis = LetterAnalyzer::new().analyze("אב").unwrap();
        assert_eq!(analysis.root_letters, "אב");
        assert_eq!(analysis.letters.len(), 2);
        assert!(analysis.letters[0].meaning.contains("strength"));
        assert!(analysis.letters[0].meaning.contains("leader"));
        assert!(analysis.letters[1].meaning.contains("house"));
        assert!(analysis.letters[1].meaning.contains("family"));
        assert_eq!(
            analysis.original_concept,
            "The strength, power, leadership, first, beginning connected to dwelling, family, containment, inside"
        );
        assert_eq!(
            analysis.pictographic_analysis,
            "𐤀 (ox head, strong leader) + 𐤁 (tent floor plan, house)"
        );
    }

    #[test]
    fn paleo_and_final_forms_resolve_to_base_letters() {
        let analyzer = LetterAnalyzer::new();
        let from_paleo = analyzer.analyze("𐤌𐤋𐤊").unwrap();
        let from_hebrew = analyzer.analyze("מלך").unwrap();
        assert_eq!(from_paleo, from_hebrew);
        assert_eq!(from_hebrew.root_letters, "מלכ");
    }

    #[test]
    fn skips_unknown_symbols_and_reports_unavailable() {
        let analyzer = LetterAnalyzer::new();
        assert_eq!(analyzer.analyze("א-1 ב").unwrap().letters.len(), 2);
        assert!(analyzer.analyze("").is_none());
        assert!(analyzer.analyze("abc 123").is_none());
    }

    #[test]
    fn concept_templates_by_letter_count() {
        assert_eq!(original_concept(&["a"]), "The a");
        assert_eq!(original_concept(&["a", "b", "c"]), "The a that b through c");
        assert_eq!(original_concept(&["a", "b", "c", "d"]), "The a with b that c and d");
        assert_eq!(
            original_concept(&["a", "b", "c", "d", "e", "f"]),
            "Complex formation involving a, b, c and more"
        );
    }

    #[test]
    fn formation_uses_canonical_patterns() {
        let analyzer = LetterAnalyzer::new();
        let analysis = analyzer.analyze("אב").unwrap();
        assert_eq!(
            analyzer.explain("father", &analysis),
            "Father = The strong leader (א) who provides shelter and protection"
        );
        assert_eq!(
            analyzer.formation_explanation("the heavens", "שמים", &[]),
            "The Heavens = The dwelling place of divine authority above"
        );
    }

    #[test]
    fn formation_matches_whole_words_only() {
        let analyzer = LetterAnalyzer::new();
        assert_eq!(
            analyzer.formation_explanation("Samson", "שמשון", &["x", "y"]),
            "Samson = The x that involves y"
        );
        assert_eq!(
            analyzer.formation_explanation("woman", "אשה", &[]),
            "Woman = The source of life and the opening to continuation"
        );
    }

    #[test]
    fn formation_fallbacks() {
        let analyzer = LetterAnalyzer::new();
        assert_eq!(
            analyzer.formation_explanation("to bless", "ברך", &["dwelling"]),
            "To Bless = Related to dwelling"
        );
        assert_eq!(
            analyzer.formation_explanation("", "ברך", &[]),
            "Word formed from Hebrew root ברך"
        );
        assert_eq!(
            analyzer.formation_explanation("a blessing", "ברכה", &[]),
            "A Blessing = Word formed from Hebrew root ברכה"
        );
    }

    #[test]
    fn title_case_keeps_apostrophes_inside_words() {
        assert_eq!(title_case("god's PEOPLE"), "God's People");
    }
}
