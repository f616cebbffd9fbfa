use paleo_core::core::analysis::original_concept;
use paleo_core::{strip_nikud, LetterAnalyzer, PaleoConverter, PaleoEngine, ScriptMode};

const GENESIS_1_1: &str = "בְּרֵאשִׁית בָּרָא אֱלֹהִים";

#[test]
fn genesis_opening_through_the_pipeline() {
    let consonantal = strip_nikud(GENESIS_1_1);
    assert_eq!(consonantal, "בראשית ברא אלהים");

    let paleo = PaleoConverter::new().to_paleo(&consonantal);
    assert_eq!(paleo, "𐤁𐤓𐤀𐤔𐤉𐤕 𐤁𐤓𐤀 𐤀𐤋𐤄𐤉𐤌");
    assert_eq!(PaleoConverter::new().to_paleo(GENESIS_1_1), paleo);
}

#[test]
fn pattern_table_short_circuits_bereshit() {
    let engine = PaleoEngine::new();
    assert_eq!(
        engine.pronouncer.transliterate("בראשית", ScriptMode::Hebrew),
        "ba-ra-sheet"
    );
}

#[test]
fn final_kaf_round_trip_is_lossy() {
    let converter = PaleoConverter::new();
    assert_eq!(converter.to_paleo("ך"), converter.to_paleo("כ"));
    assert_eq!(converter.to_hebrew(&converter.to_paleo("מלך")), "מלכ");
}

#[test]
fn father_follows_the_two_letter_template() {
    let analysis = LetterAnalyzer::new().analyze("אב").unwrap();
    let concepts = analysis.concepts();
    assert_eq!(concepts.len(), 2);
    assert_eq!(
        analysis.original_concept,
        format!("The {} connected to {}", concepts[0], concepts[1])
    );
}

#[test]
fn formation_explanation_with_no_concepts() {
    let analyzer = LetterAnalyzer::new();
    assert_eq!(
        analyzer.formation_explanation("", "אב", &[]),
        "Word formed from Hebrew root אב"
    );
}

#[test]
fn every_length_template_is_non_empty() {
    let analyzer = LetterAnalyzer::new();
    for word in ["א", "אב", "ברא", "תורה", "ירושלם", "בראשית"] {
        let first = analyzer.analyze(word).unwrap().original_concept;
        let second = analyzer.analyze(word).unwrap().original_concept;
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
    assert!(original_concept(&[]).is_empty());
}

#[test]
fn paleo_and_hebrew_modes_agree() {
    let engine = PaleoEngine::new();
    let hebrew = "ויאמר אלהים יהי אור";
    let paleo = engine.converter.to_paleo(hebrew);
    assert_eq!(
        engine.pronouncer.transliterate(hebrew, ScriptMode::Hebrew),
        engine.pronouncer.transliterate(&paleo, ScriptMode::Paleo)
    );
}

#[test]
fn unrecognized_characters_differ_by_component() {
    let engine = PaleoEngine::new();
    // dropped by the letter mapper
    assert_eq!(engine.converter.to_paleo("abc"), "");
    // kept by the pronunciation transliterator
    assert_eq!(engine.pronouncer.transliterate("abc", ScriptMode::Hebrew), "abc");
    // reported unavailable by the analyzer
    assert!(engine.analyzer.analyze("abc").is_none());
}
