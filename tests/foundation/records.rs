//! Integration tests for pronoun records

use std::collections::HashSet;

use proptest::prelude::*;
use pronouns_foundation::{
    Declension, DeclensionValues, EqualityOptions, ErrorKind, Number, PronounRecord,
    RecordDefect, values_match,
};

fn record(path: &str) -> PronounRecord {
    path.parse().unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn from_segments_accepts_five_or_six() {
    let r = PronounRecord::from_segments(&["xe", "xem", "xyr", "xyrs", "xemself"]).unwrap();
    assert_eq!(r.number(), Number::Singular);
    assert_eq!(&r.values()[Declension::PossessivePronoun], "xyrs");

    let r = PronounRecord::from_segments(&["they", "them", "their", "theirs", "themself", "plural"])
        .unwrap();
    assert_eq!(r.number(), Number::Plural);
}

#[test]
fn from_segments_defects() {
    let cases: [(&[&str], RecordDefect); 4] = [
        (&["a", "b"], RecordDefect::TooFewSegments { given: 2 }),
        (
            &["a", "b", "c", "d", "e", "plural", "x"],
            RecordDefect::TooManySegments { given: 7 },
        ),
        (
            &["a", "", "c", "d", "e"],
            RecordDefect::EmptySegment(Declension::Object),
        ),
        (
            &["a", "b", "c", "d", "e", "both"],
            RecordDefect::InvalidNumber("both".to_string()),
        ),
    ];
    for (segments, defect) in cases {
        let err = PronounRecord::from_segments(segments).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedRecord(defect));
    }
}

#[test]
fn new_keeps_literal_values() {
    let r = PronounRecord::new(
        DeclensionValues::new(["Ey", "Em", "Eir", "Eirs", "Eirself"]),
        Number::Plural,
    );
    assert_eq!(r.get(Declension::Subject), "Ey");
    assert_eq!(r.to_string(), "ey/em/eir/eirs/eirself/plural");
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn values_match_ignores_case_and_padding() {
    assert!(values_match(" Xe", "xE "));
    assert!(!values_match("xe", "ze"));
}

#[test]
fn equality_respects_number_unless_ignored() {
    let singular = record("they/them/their/theirs/themself");
    let plural = record("they/them/their/theirs/themself/plural");
    assert_ne!(singular, plural);
    assert!(singular.equals(&plural, EqualityOptions::ignoring_number()));
}

#[test]
fn prefix_equality() {
    let a = record("ze/hir/hir/hirs/hirself");
    let b = record("ze/zem/zes/zes/zirself");
    assert!(a.equals(&b, EqualityOptions::default().first(1)));
    assert!(!a.equals(&b, EqualityOptions::default().first(2)));
    assert!(a.equals(&b, EqualityOptions::default().first(0)));
}

#[test]
fn equal_records_hash_alike() {
    let set: HashSet<PronounRecord> = ["He/Him/His/His/Himself", "he/him/his/his/himself/singular"]
        .iter()
        .map(|p| record(p))
        .collect();
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn path_lowercases_and_trims() {
    let r = record(" She /HER/her/hers/herself/plural");
    assert_eq!(r.path(2, false), "she/her");
    assert_eq!(r.path(5, true), "she/her/her/hers/herself/plural");
    assert_eq!(r.path(0, false), "");
}

#[test]
fn display_tags_only_plural() {
    assert_eq!(
        record("he/him/his/his/himself/singular").to_string(),
        "he/him/his/his/himself"
    );
    assert_eq!(
        record("he/him/his/his/himself/plural").to_string(),
        "he/him/his/his/himself/plural"
    );
}

proptest! {
    /// Display output parses back to an equal record.
    #[test]
    fn display_round_trip(values in prop::collection::vec("[a-zA-Z]{1,8}", 5), plural in any::<bool>()) {
        let segments: Vec<&str> = values.iter().map(String::as_str).collect();
        let number = if plural { Number::Plural } else { Number::Singular };
        let r = PronounRecord::from_segments(&segments).unwrap().with_number(number);
        let back: PronounRecord = r.to_string().parse().unwrap();
        prop_assert_eq!(back, r);
    }
}
