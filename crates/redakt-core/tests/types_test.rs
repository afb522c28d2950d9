use std::str::FromStr;

use redakt_core::{EntityLabel, Sensitivity, TextSpan};

#[test]
fn label_round_trips_through_wire_name() {
    for label in EntityLabel::ALL {
        let parsed = EntityLabel::from_str(label.as_str()).unwrap();
        assert_eq!(parsed, label);
    }
}

#[test]
fn label_serializes_as_uppercase_string() {
    let json = serde_json::to_string(&EntityLabel::Per).unwrap();
    assert_eq!(json, "\"PER\"");
    let back: EntityLabel = serde_json::from_str("\"LOC\"").unwrap();
    assert_eq!(back, EntityLabel::Loc);
}

#[test]
fn unknown_label_is_rejected() {
    let err = EntityLabel::from_str("MISC").unwrap_err();
    assert!(err.to_string().contains("MISC"));
}

#[test]
fn sensitivity_thresholds_match_policy() {
    assert_eq!(Sensitivity::Conservative.threshold(), 0.90);
    assert_eq!(Sensitivity::Standard.threshold(), 0.80);
    assert_eq!(Sensitivity::Aggressive.threshold(), 0.60);
}

#[test]
fn only_conservative_suppresses_org() {
    assert!(Sensitivity::Conservative.suppress_org());
    assert!(!Sensitivity::Standard.suppress_org());
    assert!(!Sensitivity::Aggressive.suppress_org());
}

#[test]
fn sensitivity_tiers_are_ordered() {
    assert!(Sensitivity::Conservative < Sensitivity::Standard);
    assert!(Sensitivity::Standard < Sensitivity::Aggressive);
}

#[test]
fn sensitivity_parses_lowercase_names() {
    assert_eq!(
        Sensitivity::from_str("aggressive").unwrap(),
        Sensitivity::Aggressive
    );
    assert!(Sensitivity::from_str("paranoid").is_err());
}

#[test]
fn span_length_is_character_based() {
    let span = TextSpan {
        start: 4,
        end: 18,
        text: "Max Mustermann".into(),
        label: EntityLabel::Per,
        score: 0.95,
        source: "legal".into(),
    };
    assert_eq!(span.len(), 14);
    assert!(!span.is_empty());
}
