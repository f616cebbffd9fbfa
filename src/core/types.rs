// src/core/types.rs
use crate::error::PaleoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Script of the text handed to the pronunciation transliterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    /// Square Hebrew letters, optionally pointed.
    #[default]
    Hebrew,
    /// Paleo Hebrew glyphs and spaces.
    Paleo,
}

impl FromStr for ScriptMode {
    type Err = PaleoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hebrew" => Ok(ScriptMode::Hebrew),
            "paleo" => Ok(ScriptMode::Paleo),
            other => Err(PaleoError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ScriptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptMode::Hebrew => write!(f, "hebrew"),
            ScriptMode::Paleo => write!(f, "paleo"),
        }
    }
}

/// Body of a text conversion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub hebrew: String,
    pub paleo: String,
    pub pronunciation: String,
}

/// The four parallel text columns stored for every imported verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRendering {
    pub original: String,
    pub consonantal: String,
    pub paleo: String,
    pub transliteration: String,
}

/// One recognized letter of an analyzed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterEntry {
    pub symbol: char,
    pub name: String,
    pub meaning: String,
    pub pictograph: String,
}

/// Letter-by-letter reading of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub letters: Vec<LetterEntry>,
    pub possible_meaning: String,
}
