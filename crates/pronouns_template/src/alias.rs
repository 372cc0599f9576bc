//! Tag names for pronoun tags.
//!
//! Each declension can be named by its canonical name, a short code, or the
//! matching form of "they" (which has a distinct word for every position).

use pronouns_foundation::Declension;

const ALIASES: [(&str, Declension); 16] = [
    // Canonical names
    ("subject", Declension::Subject),
    ("object", Declension::Object),
    ("possessive-determiner", Declension::PossessiveDeterminer),
    ("possessive-pronoun", Declension::PossessivePronoun),
    ("reflexive", Declension::Reflexive),
    // Short codes
    ("s", Declension::Subject),
    ("o", Declension::Object),
    ("pd", Declension::PossessiveDeterminer),
    ("pp", Declension::PossessivePronoun),
    ("r", Declension::Reflexive),
    // By example
    ("they", Declension::Subject),
    ("them", Declension::Object),
    ("their", Declension::PossessiveDeterminer),
    ("theirs", Declension::PossessivePronoun),
    ("themself", Declension::Reflexive),
    ("themselves", Declension::Reflexive),
];

/// Looks up a tag name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<Declension> {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|&(_, declension)| declension)
}

/// Iterates over every accepted tag name.
pub fn names() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().map(|&(alias, _)| alias)
}
