//! The reference catalog of known pronoun sets.
//!
//! The catalog is built once by [`Catalog::reference`] and never mutated.
//! Cloning is O(1) thanks to `im`'s structural sharing, so it can be handed
//! to every component that needs it.

use std::iter::FromIterator;

use pronouns_foundation::{DeclensionValues, Number, PronounRecord};

/// Literal reference list: values, number, preferred.
const REFERENCE: [([&str; 5], Number, bool); 14] = [
    (["he", "him", "his", "his", "himself"], Number::Singular, true),
    (["she", "her", "her", "hers", "herself"], Number::Singular, true),
    (["they", "them", "their", "theirs", "themselves"], Number::Plural, true),
    (["they", "them", "their", "theirs", "themself"], Number::Plural, false),
    (["ey", "em", "eir", "eirs", "eirself"], Number::Singular, true),
    (["xe", "xem", "xyr", "xyrs", "xemself"], Number::Singular, true),
    (["xe", "xem", "xir", "xyrs", "xemself"], Number::Singular, false),
    (["ze", "zem", "zes", "zes", "zirself"], Number::Singular, true),
    (["ze", "hir", "hir", "hirs", "hirself"], Number::Singular, true),
    (["it", "it", "its", "its", "itself"], Number::Singular, true),
    (["kit", "kit", "kits", "kits", "kitself"], Number::Singular, true),
    (["star", "star", "star", "star", "starself"], Number::Singular, true),
    (["nya", "nyan", "nyan", "nyan", "nyanself"], Number::Singular, true),
    (["fae", "faer", "faer", "faers", "faerself"], Number::Singular, true),
];

/// A known pronoun set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    record: PronounRecord,
    preferred: bool,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(record: PronounRecord, preferred: bool) -> Self {
        Self { record, preferred }
    }

    /// Returns the entry's pronoun record.
    #[must_use]
    pub fn record(&self) -> &PronounRecord {
        &self.record
    }

    /// Returns the entry's own number.
    #[must_use]
    pub fn number(&self) -> Number {
        self.record.number()
    }

    /// Whether this entry wins ties against entries with the same prefix.
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.preferred
    }
}

/// Ordered, immutable list of known pronoun sets.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: im::Vector<CatalogEntry>,
}

impl Catalog {
    /// Builds the curated reference catalog.
    #[must_use]
    pub fn reference() -> Self {
        REFERENCE
            .iter()
            .map(|(values, number, preferred)| {
                CatalogEntry::new(
                    PronounRecord::new(DeclensionValues::new(*values), *number),
                    *preferred,
                )
            })
            .collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets an entry by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Returns the first entry, used as the default pronoun set.
    #[must_use]
    pub fn first(&self) -> Option<&CatalogEntry> {
        self.entries.front()
    }

    /// Iterates over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Collects the entries accepted by `predicate`, in catalog order.
    pub fn filter<'a>(&'a self, predicate: impl Fn(&CatalogEntry) -> bool) -> Vec<&'a CatalogEntry> {
        self.entries.iter().filter(|e| predicate(e)).collect()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
