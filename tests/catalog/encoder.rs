//! Integration tests for canonical encoding

use pronouns_catalog::{CanonicalOptions, Catalog, Encoder, Prefix, is_safe_for_external_identifier};
use pronouns_foundation::{Declension, PronounRecord};

fn encoder() -> Encoder {
    Encoder::new(Catalog::reference())
}

fn record(path: &str) -> PronounRecord {
    path.parse().unwrap()
}

fn short(encoder: &Encoder, path: &str) -> String {
    encoder.to_canonical_string(&record(path), CanonicalOptions::shortened())
}

// =============================================================================
// Shortest Unique Prefix
// =============================================================================

#[test]
fn shortest_prefix_lengths() {
    let enc = encoder();
    let cases = [
        ("he/him/his/his/himself", 1),
        ("ze/zem/zes/zes/zirself", 2),
        ("ze/hir/hir/hirs/hirself", 2),
        ("xe/xem/xyr/xyrs/xemself", 1),
        ("xe/xem/xir/xyrs/xemself", 3),
        ("they/them/their/theirs/themselves/plural", 1),
        ("they/them/their/theirs/themself/plural", 5),
    ];
    for (path, length) in cases {
        assert_eq!(
            enc.shortest_unique_prefix(&record(path)).length,
            length,
            "{path}"
        );
    }
}

#[test]
fn custom_sets_use_full_prefix() {
    let enc = encoder();
    let custom = record("he/him/his/his/hisself");
    assert_eq!(enc.shortest_unique_prefix(&custom), Prefix::full(&custom));
    assert_eq!(short(&enc, "he/him/his/his/hisself"), "he/him/his/his/hisself");
    assert_eq!(short(&enc, "qa/qo/qe/qes/qself/plural"), "qa/qo/qe/qes/qself/plural");
}

// =============================================================================
// Canonical Strings
// =============================================================================

#[test]
fn shortened_paths() {
    let enc = encoder();
    assert_eq!(short(&enc, "He/Him/His/His/Himself"), "he");
    assert_eq!(short(&enc, "ze/hir/hir/hirs/hirself"), "ze/hir");
    assert_eq!(short(&enc, "they/them/their/theirs/themselves/singular"), "they/singular");
    assert_eq!(short(&enc, "she/her/her/hers/herself/plural"), "she/plural");
}

#[test]
fn full_paths() {
    let enc = encoder();
    let r = record("they/them/their/theirs/themselves/plural");
    assert_eq!(
        enc.to_canonical_string(&r, CanonicalOptions::full()),
        "they/them/their/theirs/themselves/plural"
    );
    assert_eq!(
        enc.to_canonical_string(&r, CanonicalOptions::full().with_number_tag(false)),
        "they/them/their/theirs/themselves"
    );
    assert_eq!(
        enc.to_canonical_string(
            &record("he/him/his/his/himself"),
            CanonicalOptions::shortened().with_number_tag(true)
        ),
        "he/singular"
    );
}

#[test]
fn trailing_number_word_is_tagged() {
    let enc = encoder();
    let r = record("a/b/c/d/e").with_value(Declension::Reflexive, "plural");
    assert_eq!(
        enc.to_canonical_string(&r, CanonicalOptions::full()),
        "a/b/c/d/plural/singular"
    );
}

// =============================================================================
// Share Paths and Presets
// =============================================================================

#[test]
fn share_path_and_safety() {
    let enc = encoder();
    assert_eq!(enc.share_path(&record("fae/faer/faer/faers/faerself")).as_deref(), Some("/fae"));

    let base = record("he/him/his/his/himself");
    for bad in ["", "  ", ".", "..", "a/b"] {
        let r = base.with_value(Declension::Object, bad);
        assert!(!is_safe_for_external_identifier(&r), "{bad:?}");
        assert_eq!(enc.share_path(&r), None);
    }
    assert!(is_safe_for_external_identifier(&base.with_value(Declension::Object, "h.m")));
}

#[test]
fn presets_split_shortened_and_remainder() {
    let presets = encoder().presets();
    assert_eq!(presets.len(), 14);
    assert_eq!(presets[0].shortened, "he");
    assert_eq!(presets[0].remainder, "/him/his/his/himself");
    assert_eq!(presets[6].shortened, "xe/xem/xir");
    assert_eq!(presets[6].remainder, "/xyrs/xemself");
    assert_eq!(presets[3].remainder, "");
}

#[test]
fn share_paths_are_segmented() {
    let paths = encoder().share_paths();
    assert_eq!(paths.len(), 14);
    assert_eq!(paths[0], vec!["he"]);
    assert_eq!(paths[8], vec!["ze", "hir"]);
}
