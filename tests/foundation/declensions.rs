//! Integration tests for declensions and grammatical number

use pronouns_foundation::{Declension, Number};

#[test]
fn canonical_order() {
    let names: Vec<&str> = Declension::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        vec![
            "subject",
            "object",
            "possessive-determiner",
            "possessive-pronoun",
            "reflexive"
        ]
    );
    for (i, d) in Declension::ALL.iter().enumerate() {
        assert_eq!(d.index(), i);
    }
}

#[test]
fn display_names_and_hints() {
    assert_eq!(
        Declension::PossessiveDeterminer.display_name(),
        "Possessive determiner"
    );
    assert_eq!(Declension::Reflexive.display_name(), "Reflexive pronoun");
    assert_eq!(Declension::Object.usage_hint(), "I like him.");
    assert_eq!(Declension::PossessivePronoun.usage_hint(), "The ball is hers.");
    assert_eq!(Number::Singular.usage_hint(), "he is clever");
    assert_eq!(Number::Plural.usage_hint(), "they are clever");
}

#[test]
fn from_name() {
    assert_eq!(
        Declension::from_name("Possessive-Pronoun"),
        Some(Declension::PossessivePronoun)
    );
    assert_eq!(Declension::from_name("pd"), None);
}

#[test]
fn number_literals_are_exact() {
    assert_eq!(Number::from_literal("singular"), Some(Number::Singular));
    assert_eq!(Number::from_literal("plural"), Some(Number::Plural));
    assert_eq!(Number::from_literal("Plural"), None);
    assert_eq!(Number::from_literal(" plural"), None);
    assert_eq!(Number::default(), Number::Singular);
}

#[test]
fn number_selects_word() {
    assert_eq!(Number::Singular.select("is", "are"), "is");
    assert_eq!(Number::Plural.select("is", "are"), "are");
}
