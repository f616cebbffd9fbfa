// File: src/core/converter.rs
use crate::core::alphabet::{gloss_for_glyph, gloss_for_letter};
use crate::core::nikud::strip_nikud;

/// Hebrew square script to Paleo Hebrew and back.
///
/// Paleo Hebrew has no final letters, so `ך ם ן ף ץ` share the glyph of their
/// base letter. The way back therefore always yields the non-final form:
/// `to_hebrew(to_paleo("מלך")) == "מלכ"`. That loss is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaleoConverter;

impl PaleoConverter {
    pub fn new() -> Self {
        Self
    }

    /// Converts Hebrew text to Paleo glyphs.
    ///
    /// Nikud is always stripped first. Whitespace becomes a single space per
    /// character; anything that is not a Hebrew letter (digits, Latin,
    /// punctuation) is dropped, since the ancient script had none of them.
    pub fn to_paleo(&self, hebrew: &str) -> String {
        let mut result = String::new();
        for c in strip_nikud(hebrew).chars() {
            if let Some(glyph) = self.paleo_glyph(c) {
                result.push(glyph);
            } else if c.is_whitespace() {
                result.push(' ');
            }
        }
        result
    }

    /// Converts Paleo glyphs back to (non-final) Hebrew letters. Characters
    /// outside the Paleo alphabet are passed through.
    pub fn to_hebrew(&self, paleo: &str) -> String {
        paleo
            .chars()
            .map(|c| self.hebrew_letter(c).unwrap_or(c))
            .collect()
    }

    /// Paleo glyph for a Hebrew letter; final forms share their base glyph.
    pub fn paleo_glyph(&self, c: char) -> Option<char> {
        gloss_for_letter(c).map(|gloss| gloss.paleo)
    }

    pub fn hebrew_letter(&self, glyph: char) -> Option<char> {
        gloss_for_glyph(glyph).map(|gloss| gloss.letter)
    }
}
