//! Integration tests for the reference catalog

use pronouns_catalog::Catalog;
use pronouns_foundation::{Declension, Number};

#[test]
fn reference_catalog_shape() {
    let catalog = Catalog::reference();
    assert_eq!(catalog.len(), 14);
    assert_eq!(
        catalog.first().unwrap().record().to_string(),
        "he/him/his/his/himself"
    );
}

#[test]
fn only_they_sets_are_plural() {
    let catalog = Catalog::reference();
    for entry in catalog.iter() {
        let is_they = entry.record().get(Declension::Subject) == "they";
        assert_eq!(entry.number() == Number::Plural, is_they, "{}", entry.record());
    }
}

#[test]
fn non_preferred_variants() {
    let catalog = Catalog::reference();
    let variants: Vec<String> = catalog
        .iter()
        .filter(|e| !e.is_preferred())
        .map(|e| e.record().to_string())
        .collect();
    assert_eq!(
        variants,
        vec![
            "they/them/their/theirs/themself/plural",
            "xe/xem/xir/xyrs/xemself"
        ]
    );
}

#[test]
fn filter_keeps_catalog_order() {
    let catalog = Catalog::reference();
    let ze: Vec<&str> = catalog
        .filter(|e| e.record().get(Declension::Subject) == "ze")
        .iter()
        .map(|e| e.record().get(Declension::Object))
        .collect();
    assert_eq!(ze, vec!["zem", "hir"]);
}
