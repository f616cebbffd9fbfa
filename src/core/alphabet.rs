// File: src/core/alphabet.rs
//! The canonical letter table.
//!
//! One record per base consonant, in alphabetical order. Final forms have no
//! record of their own: [`fold_final`] maps them onto their base letter before
//! lookup, so a final form always resolves to the same gloss as its base.

use serde::Serialize;

/// Symbolic gloss for one of the 22 consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterGloss {
    pub order: u8,
    pub letter: char,
    pub paleo: char,
    pub name: &'static str,
    /// Short comma-separated gloss.
    pub meaning: &'static str,
    /// Short name of the pictograph.
    pub pictograph: &'static str,
    /// Longer description of what the pictograph depicts.
    pub description: &'static str,
    /// Comma-separated concepts used to phrase the root narrative.
    pub concept: &'static str,
    pub sound: &'static str,
    pub value: u16,
}

pub static ALPHABET: [LetterGloss; 22] = [
    LetterGloss {
        order: 1,
        letter: 'א',
        paleo: '\u{10900}',
        name: "Aleph",
        meaning: "strength, mighty one, leader, bull, ox",
        pictograph: "ox head, strong leader",
        description: "Bull or ox head - represents strength, leadership, and being first",
        concept: "strength, power, leadership, first, beginning",
        sound: "A, E (silent)",
        value: 1,
    },
    LetterGloss {
        order: 2,
        letter: 'ב',
        paleo: '\u{10901}',
        name: "Bet",
        meaning: "house, family, tent, inside, within",
        pictograph: "tent floor plan, house",
        description: "Floor plan of a tent or house - represents dwelling, family structure",
        concept: "dwelling, family, containment, inside",
        sound: "B, V",
        value: 2,
    },
    LetterGloss {
        order: 3,
        letter: 'ג',
        paleo: '\u{10902}',
        name: "Gimel",
        meaning: "camel, pride, lift up, gather",
        pictograph: "camel, foot of man",
        description: "Foot of a camel - represents walking, lifting, gathering",
        concept: "movement, gathering, pride, lifting",
        sound: "G",
        value: 3,
    },
    LetterGloss {
        order: 4,
        letter: 'ד',
        paleo: '\u{10903}',
        name: "Dalet",
        meaning: "door, entrance, path, move, hang",
        pictograph: "tent door hanging",
        description: "Tent door or flap - represents entrance, pathway, movement",
        concept: "entrance, pathway, movement, access",
        sound: "D",
        value: 4,
    },
    LetterGloss {
        order: 5,
        letter: 'ה',
        paleo: '\u{10904}',
        name: "Hey",
        meaning: "breath, behold, reveal, window, spirit",
        pictograph: "man with arms raised, window",
        description: "Man with arms raised or window - represents revelation, showing",
        concept: "revelation, breath, spirit, behold",
        sound: "H",
        value: 5,
    },
    LetterGloss {
        order: 6,
        letter: 'ו',
        paleo: '\u{10905}',
        name: "Vav",
        meaning: "nail, peg, hook, secure, add, and",
        pictograph: "tent peg, nail",
        description: "Tent peg or nail - represents connection, joining, adding",
        concept: "connection, security, adding, joining",
        sound: "V, W, O, U",
        value: 6,
    },
    LetterGloss {
        order: 7,
        letter: 'ז',
        paleo: '\u{10906}',
        name: "Zayin",
        meaning: "weapon, sword, cut, divide, nourish",
        pictograph: "mattock, cutting tool",
        description: "Weapon or tool for cutting - represents cutting, dividing, remembering",
        concept: "cutting, dividing, weapon, food",
        sound: "Z",
        value: 7,
    },
    LetterGloss {
        order: 8,
        letter: 'ח',
        paleo: '\u{10907}',
        name: "Chet",
        meaning: "wall, fence, outside, separate, half",
        pictograph: "tent wall, fence",
        description: "Wall or fence - represents separation, protection, boundary",
        concept: "separation, protection, boundary, outside",
        sound: "Ch (guttural)",
        value: 8,
    },
    LetterGloss {
        order: 9,
        letter: 'ט',
        paleo: '\u{10908}',
        name: "Tet",
        meaning: "serpent, surround, mud, good",
        pictograph: "coiled serpent, basket",
        description: "Coiled snake or basket - represents surrounding, containing",
        concept: "surrounding, containing, good, mud",
        sound: "T (emphatic)",
        value: 9,
    },
    LetterGloss {
        order: 10,
        letter: 'י',
        paleo: '\u{10909}',
        name: "Yod",
        meaning: "hand, arm, work, throw, worship, praise",
        pictograph: "closed hand, arm",
        description: "Closed hand or arm - represents work, deed, action",
        concept: "work, deed, worship, power",
        sound: "Y, I",
        value: 10,
    },
    LetterGloss {
        order: 11,
        letter: 'כ',
        paleo: '\u{1090A}',
        name: "Kaf",
        meaning: "palm, bend, open, allow, tame, subdue",
        pictograph: "open palm",
        description: "Open palm of hand - represents covering, allowing, opening",
        concept: "opening, allowing, bending, covering",
        sound: "K, Kh",
        value: 20,
    },
    LetterGloss {
        order: 12,
        letter: 'ל',
        paleo: '\u{1090B}',
        name: "Lamed",
        meaning: "staff, rod, authority, teach, yoke, toward",
        pictograph: "shepherd staff, cattle prod",
        description: "Shepherd staff or ox goad - represents teaching, leading, binding",
        concept: "authority, teaching, leading, control",
        sound: "L",
        value: 30,
    },
    LetterGloss {
        order: 13,
        letter: 'מ',
        paleo: '\u{1090C}',
        name: "Mem",
        meaning: "water, mighty, blood, people, nations",
        pictograph: "waves of water",
        description: "Waves of water - represents water, chaos, mighty power",
        concept: "chaos, mighty, mass, people",
        sound: "M",
        value: 40,
    },
    LetterGloss {
        order: 14,
        letter: 'נ',
        paleo: '\u{1090D}',
        name: "Nun",
        meaning: "fish, life, activity, heir, continue",
        pictograph: "swimming fish",
        description: "Fish or seed - represents life, activity, continuance",
        concept: "life, activity, movement, heir",
        sound: "N",
        value: 50,
    },
    LetterGloss {
        order: 15,
        letter: 'ס',
        paleo: '\u{1090E}',
        name: "Samekh",
        meaning: "thorn, grab, hate, protect, support",
        pictograph: "thorn, prop",
        description: "Thorn or prop - represents support, protection, grabbing",
        concept: "support, protection, grabbing, hatred",
        sound: "S",
        value: 60,
    },
    LetterGloss {
        order: 16,
        letter: 'ע',
        paleo: '\u{1090F}',
        name: "Ayin",
        meaning: "eye, see, know, experience, fountain",
        pictograph: "eye",
        description: "Eye - represents seeing, watching, knowing, understanding",
        concept: "seeing, knowing, understanding, experience",
        sound: "Ayin (guttural)",
        value: 70,
    },
    LetterGloss {
        order: 17,
        letter: 'פ',
        paleo: '\u{10910}',
        name: "Pey",
        meaning: "mouth, speak, blow, scatter, edge",
        pictograph: "mouth",
        description: "Mouth - represents speaking, blowing, scattering",
        concept: "speaking, communication, blowing, edge",
        sound: "P, F",
        value: 80,
    },
    LetterGloss {
        order: 18,
        letter: 'צ',
        paleo: '\u{10911}',
        name: "Tsadey",
        meaning: "hunt, catch, desire, need, righteous",
        pictograph: "fish hook, man on side",
        description: "Fish hook or snare - represents hunting, desire, need",
        concept: "hunting, desire, righteousness, need",
        sound: "Ts",
        value: 90,
    },
    LetterGloss {
        order: 19,
        letter: 'ק',
        paleo: '\u{10912}',
        name: "Qof",
        meaning: "back of head, behind, time, condense",
        pictograph: "back of head, horizon",
        description: "Back of head - represents what is behind, time, condensing",
        concept: "time, behind, gathering, condensing",
        sound: "Q (emphatic K)",
        value: 100,
    },
    LetterGloss {
        order: 20,
        letter: 'ר',
        paleo: '\u{10913}',
        name: "Resh",
        meaning: "head, first, top, beginning, person",
        pictograph: "head of man",
        description: "Head of a person - represents leadership, first, beginning",
        concept: "head, chief, beginning, person, top",
        sound: "R",
        value: 200,
    },
    LetterGloss {
        order: 21,
        letter: 'ש',
        paleo: '\u{10914}',
        name: "Shin",
        meaning: "teeth, sharp, press, eat, destroy",
        pictograph: "two front teeth",
        description: "Two front teeth - represents sharpness, pressing, eating",
        concept: "sharpness, eating, destroying, pressing",
        sound: "Sh, S",
        value: 300,
    },
    LetterGloss {
        order: 22,
        letter: 'ת',
        paleo: '\u{10915}',
        name: "Tav",
        meaning: "mark, sign, covenant, cross, desire",
        pictograph: "crossed sticks, mark",
        description: "Two crossed sticks (mark or sign) - represents signs, covenant, monument",
        concept: "sign, covenant, mark, desire, cross",
        sound: "T",
        value: 400,
    },
];

/// Maps the five final forms onto their base letters.
pub fn fold_final(c: char) -> char {
    match c {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        other => other,
    }
}

/// Looks up a Hebrew letter, standard or final form.
pub fn gloss_for_letter(letter: char) -> Option<&'static LetterGloss> {
    let folded = fold_final(letter);
    ALPHABET.iter().find(|gloss| gloss.letter == folded)
}

pub fn gloss_for_glyph(glyph: char) -> Option<&'static LetterGloss> {
    ALPHABET.iter().find(|gloss| gloss.paleo == glyph)
}

/// Looks up a Hebrew letter (standard or final form) or a Paleo glyph.
pub fn gloss_for(symbol: char) -> Option<&'static LetterGloss> {
    gloss_for_letter(symbol).or_else(|| gloss_for_glyph(symbol))
}

/// Case-insensitive lookup by letter name, e.g. "aleph" or "Tav".
pub fn gloss_by_name(name: &str) -> Option<&'static LetterGloss> {
    let name = name.trim();
    ALPHABET
        .iter()
        .find(|gloss| gloss.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_and_contiguous() {
        for (i, gloss) in ALPHABET.iter().enumerate() {
            assert_eq!(gloss.order as usize, i + 1);
            assert_eq!(gloss.paleo as u32, 0x10900 + i as u32);
        }
    }

    #[test]
    fn final_forms_share_their_base_gloss() {
        for (final_form, base) in [('ך', 'כ'), ('ם', 'מ'), ('ן', 'נ'), ('ף', 'פ'), ('ץ', 'צ')] {
            assert_eq!(fold_final(final_form), base);
            assert_eq!(gloss_for(final_form), gloss_for(base));
        }
        assert_eq!(fold_final('כ'), 'כ');
    }

    #[test]
    fn resolves_paleo_glyphs() {
        let aleph = gloss_for('\u{10900}').unwrap();
        assert_eq!(aleph.name, "Aleph");
        assert_eq!(gloss_for('\u{10915}').unwrap().letter, 'ת');
    }

    #[test]
    fn looks_up_by_name() {
        assert_eq!(gloss_by_name("samekh").unwrap().letter, 'ס');
        assert_eq!(gloss_by_name(" TAV ").unwrap().value, 400);
        assert!(gloss_by_name("Samech").is_none());
    }

    #[test]
    fn letter_and_glyph_lookups_do_not_overlap() {
        assert_eq!(gloss_for_letter('ץ').map(|g| g.paleo), Some('\u{10911}'));
        assert!(gloss_for_letter('\u{10911}').is_none());
        assert_eq!(gloss_for_glyph('\u{10911}').map(|g| g.letter), Some('צ'));
        assert!(gloss_for_glyph('צ').is_none());
    }

    #[test]
    fn unknown_symbols_have_no_gloss() {
        assert!(gloss_for('a').is_none());
        assert!(gloss_for(' ').is_none());
        assert!(gloss_for('\u{05B8}').is_none());
    }
}
