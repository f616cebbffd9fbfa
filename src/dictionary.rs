// File: src/dictionary.rs
use crate::core::analysis::{AnalyzedLetter, LetterAnalyzer};
use crate::core::converter::PaleoConverter;
use crate::core::nikud::clean_hebrew_word;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Words with this many letters or more are classified as compounds.
const COMPOUND_MIN_LETTERS: usize = 5;

/// A Strong's Hebrew concordance record, as supplied by the concordance
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongsEntry {
    pub strong_number: String,
    pub hebrew_word: String,
    #[serde(default)]
    pub transliteration: Option<String>,
    pub short_definition: String,
    #[serde(default)]
    pub root_word: Option<String>,
    #[serde(default)]
    pub usage_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Root,
    Derived,
    Compound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub hebrew_word: String,
    pub paleo_word: String,
    pub transliteration: String,
    pub english_meaning: String,
    pub strong_number: String,
    pub root_letters: String,
    pub letters: Vec<AnalyzedLetter>,
    pub pictographic_analysis: String,
    pub original_concept: String,
    pub word_type: WordType,
    pub root_word: Option<String>,
    pub formation_explanation: String,
    pub frequency_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub created: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Builds Paleo dictionary entries from Strong's records, one per Strong's
/// number.
pub struct DictionaryBuilder {
    converter: PaleoConverter,
    analyzer: LetterAnalyzer,
    seen: HashSet<String>,
    stats: BuildStats,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self {
            converter: PaleoConverter::new(),
            analyzer: LetterAnalyzer::new(),
            seen: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn build_entry(&mut self, entry: &StrongsEntry) -> Option<DictionaryEntry> {
        let clean = clean_hebrew_word(&entry.hebrew_word);
        if clean.is_empty() || self.seen.contains(&entry.strong_number) {
            self.stats.skipped += 1;
            return None;
        }

        let Some(analysis) = self.analyzer.analyze(&clean) else {
            tracing::warn!(strong = %entry.strong_number, word = %clean, "no analysis for headword");
            self.stats.errors += 1;
            return None;
        };

        let formation_explanation = self.analyzer.explain(&entry.short_definition, &analysis);
        let word_type = classify(&clean, entry.root_word.as_deref());

        self.seen.insert(entry.strong_number.clone());
        self.stats.created += 1;

        Some(DictionaryEntry {
            paleo_word: self.converter.to_paleo(&clean),
            hebrew_word: clean,
            transliteration: entry
                .transliteration
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            english_meaning: entry.short_definition.clone(),
            strong_number: entry.strong_number.clone(),
            root_letters: analysis.root_letters,
            letters: analysis.letters,
            pictographic_analysis: analysis.pictographic_analysis,
            original_concept: analysis.original_concept,
            word_type,
            root_word: entry.root_word.clone(),
            formation_explanation,
            frequency_count: entry.usage_count,
        })
    }

    pub fn build_all(&mut self, entries: &[StrongsEntry]) -> Vec<DictionaryEntry> {
        let built: Vec<DictionaryEntry> = entries
            .iter()
            .filter_map(|entry| self.build_entry(entry))
            .collect();
        let stats = self.stats;
        tracing::info!(
            created = stats.created,
            skipped = stats.skipped,
            errors = stats.errors,
            "dictionary build finished"
        );
        built
    }
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(clean: &str, root_word: Option<&str>) -> WordType {
    if clean.chars().count() >= COMPOUND_MIN_LETTERS {
        return WordType::Compound;
    }
    match root_word.map(clean_hebrew_word) {
        Some(root) if !root.is_empty() && root != clean => WordType::Derived,
        _ => WordType::Root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strongs(number: &str, word: &str, definition: &str) -> StrongsEntry {
        StrongsEntry {
            strong_number: number.to_string(),
            hebrew_word: word.to_string(),
            transliteration: None,
            short_definition: definition.to_string(),
            root_word: None,
            usage_count: 0,
        }
    }

    #[test]
    fn builds_father_entry() {
        let mut builder = DictionaryBuilder::new();
        let mut record = strongs("H1", "אָב", "father");
        record.transliteration = Some("ab".to_string());
        record.usage_count = 1215;

        let entry = builder.build_entry(&record).unwrap();
        assert_eq!(entry.hebrew_word, "אב");
        assert_eq!(entry.paleo_word, "𐤀𐤁");
        assert_eq!(entry.transliteration, "ab");
        assert_eq!(entry.word_type, WordType::Root);
        assert_eq!(entry.frequency_count, 1215);
        assert!(entry.formation_explanation.starts_with("Father = The strong leader"));
        assert_eq!(builder.stats(), BuildStats { created: 1, skipped: 0, errors: 0 });
    }

    #[test]
    fn skips_duplicates_and_empty_words() {
        let mut builder = DictionaryBuilder::new();
        let built = builder.build_all(&[
            strongs("H1", "אב", "father"),
            strongs("H1", "אב", "father"),
            strongs("H2", "", "nothing"),
            strongs("H3", "xyz", "latin only"),
        ]);
        assert_eq!(built.len(), 1);
        assert_eq!(builder.stats(), BuildStats { created: 1, skipped: 2, errors: 1 });
    }

    #[test]
    fn classifies_word_types() {
        assert_eq!(classify("ברא", None), WordType::Root);
        assert_eq!(classify("בריאה", Some("ברא")), WordType::Compound);
        assert_eq!(classify("מלכה", Some("מֶלֶךְ")), WordType::Derived);
        assert_eq!(classify("מלך", Some("מֶלֶךְ")), WordType::Root);
    }

    #[test]
    fn missing_transliteration_is_unknown() {
        let mut builder = DictionaryBuilder::new();
        let entry = builder.build_entry(&strongs("H430", "אֱלֹהִים", "God")).unwrap();
        assert_eq!(entry.transliteration, "unknown");
        assert_eq!(entry.word_type, WordType::Compound);
        assert!(entry.original_concept.starts_with("Complex formation involving"));
    }

    #[test]
    fn deserializes_sparse_records() {
        let json = r#"[{"strong_number":"H7965","hebrew_word":"שָׁלוֹם","short_definition":"peace"}]"#;
        let records: Vec<StrongsEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].usage_count, 0);
        assert!(records[0].root_word.is_none());
    }
}
