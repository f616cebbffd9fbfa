use crate::core::analysis::{LetterAnalyzer, PictographicAnalysis};
use crate::core::alphabet::gloss_for;
use crate::core::converter::PaleoConverter;
use crate::core::nikud::strip_nikud;
use crate::core::pronunciation::AncientPronouncer;
use crate::core::types::{Conversion, LetterEntry, ScriptMode, VerseRendering, WordAnalysis};

// The engine holds no state of its own; every call is a pure function of its
// input, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaleoEngine {
    pub converter: PaleoConverter,
    pub pronouncer: AncientPronouncer,
    pub analyzer: LetterAnalyzer,
}

impl PaleoEngine {
    pub fn new() -> Self {
        Self {
            converter: PaleoConverter::new(),
            pronouncer: AncientPronouncer::new(),
            analyzer: LetterAnalyzer::new(),
        }
    }

    /// Hebrew text to Paleo script plus a modern pronunciation guide.
    pub fn convert(&self, hebrew: &str) -> Conversion {
        Conversion {
            hebrew: hebrew.to_string(),
            paleo: self.converter.to_paleo(hebrew),
            pronunciation: self.pronouncer.pronunciation_guide(hebrew),
        }
    }

    /// Letter-by-letter reading of a Paleo (or Hebrew) word.
    pub fn analyze_word(&self, word: &str) -> Option<WordAnalysis> {
        let letters: Vec<LetterEntry> = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(|symbol| {
                gloss_for(symbol).map(|gloss| LetterEntry {
                    symbol,
                    name: gloss.name.to_string(),
                    meaning: gloss.meaning.to_string(),
                    pictograph: gloss.description.to_string(),
                })
            })
            .collect();

        if letters.is_empty() {
            return None;
        }

        let possible_meaning = self
            .analyzer
            .analyze(word)
            .map(|analysis| analysis.original_concept)
            .unwrap_or_default();

        Some(WordAnalysis {
            word: word.to_string(),
            letters,
            possible_meaning,
        })
    }

    pub fn analyze_root(&self, word: &str) -> Option<PictographicAnalysis> {
        self.analyzer.analyze(&strip_nikud(word))
    }

    /// The four stored columns of one verse: as given, without nikud, in
    /// Paleo script, and as ancient pronunciation.
    pub fn render_verse(&self, original: &str) -> VerseRendering {
        let consonantal = strip_nikud(original);
        VerseRendering {
            paleo: self.converter.to_paleo(&consonantal),
            transliteration: self.pronouncer.transliterate(&consonantal, ScriptMode::Hebrew),
            original: original.to_string(),
            consonantal,
        }
    }

    /// Speech-ready pronunciation of a single word.
    pub fn word_pronunciation(&self, word: &str, mode: ScriptMode) -> String {
        self.pronouncer.tts_text(word, mode)
    }
}
