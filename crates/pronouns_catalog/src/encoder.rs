//! Canonical path encoding.
//!
//! Turns a pronoun record back into a slash-delimited path, shortened to the
//! smallest prefix that still resolves to the same catalog entry.

use std::collections::HashMap;
use std::sync::RwLock;

use pronouns_foundation::{Declension, EqualityOptions, Number, PronounRecord};
use tracing::trace;

use crate::catalog::{Catalog, CatalogEntry};

/// Length of the shortest identifying prefix and whether a number tag is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix {
    /// Number of leading declension values to emit (1..=5).
    pub length: usize,
    /// Whether `/singular` or `/plural` must follow.
    pub needs_number_tag: bool,
}

impl Prefix {
    /// The full path, tagged when the record is not singular.
    #[must_use]
    pub fn full(record: &PronounRecord) -> Self {
        Self {
            length: Declension::COUNT,
            needs_number_tag: record.number() != Number::Singular,
        }
    }

    fn matching(length: usize, record: &PronounRecord, entry: &CatalogEntry) -> Self {
        Self {
            length,
            needs_number_tag: record.number() != entry.number(),
        }
    }
}

/// Options for [`Encoder::to_canonical_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanonicalOptions {
    /// Emit the shortest unique prefix instead of all five values.
    pub shorten: bool,
    /// Force the number tag on or off instead of computing it.
    pub include_number_tag: Option<bool>,
}

impl CanonicalOptions {
    /// Shortened path with a computed number tag.
    #[must_use]
    pub fn shortened() -> Self {
        Self {
            shorten: true,
            include_number_tag: None,
        }
    }

    /// Full path with a computed number tag.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Forces the number tag on or off.
    #[must_use]
    pub fn with_number_tag(mut self, include: bool) -> Self {
        self.include_number_tag = Some(include);
        self
    }
}

/// A catalog entry as listed for quick selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    /// The entry's record.
    pub record: PronounRecord,
    /// The shortest path that selects the entry.
    pub shortened: String,
    /// The rest of the full path after the shortened part.
    pub remainder: String,
}

/// Checks that every value can appear as a path segment.
///
/// Rejects empty values, values made only of `.` and `/`, and values
/// containing `/` anywhere.
#[must_use]
pub fn is_safe_for_external_identifier(record: &PronounRecord) -> bool {
    record.values().iter().all(|(_, value)| {
        let value = value.trim();
        !value.is_empty()
            && !value.chars().all(|c| c == '.' || c == '/')
            && !value.contains('/')
    })
}

/// Encodes records as canonical paths against a catalog.
///
/// Paths of catalog records (in either number) are memoized; each entry is
/// written at most once and the computation is deterministic, so concurrent
/// callers at worst compute the same string twice. Custom records are
/// encoded on every call, keeping the cache bounded by the catalog.
#[derive(Debug)]
pub struct Encoder {
    catalog: Catalog,
    cache: RwLock<HashMap<(PronounRecord, CanonicalOptions), String>>,
}

impl Encoder {
    /// Creates an encoder over the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the catalog this encoder searches.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Finds the shortest prefix of `record` that selects it from the catalog.
    #[must_use]
    pub fn shortest_unique_prefix(&self, record: &PronounRecord) -> Prefix {
        let whole = EqualityOptions::ignoring_number();

        for length in 1..=Declension::COUNT {
            let matches = self
                .catalog
                .filter(|e| e.record().equals(record, whole.first(length)));
            trace!(%record, length, matches = matches.len(), "prefix search");

            match matches.as_slice() {
                [] => return Prefix::full(record),
                [only] => {
                    // A unique prefix match that differs further on is a
                    // custom set; a shortened path would resolve elsewhere.
                    if only.record().equals(record, whole) {
                        return Prefix::matching(length, record, only);
                    }
                    return Prefix::full(record);
                }
                _ => {
                    let preferred: Vec<_> = matches.iter().filter(|e| e.is_preferred()).collect();
                    if let [entry] = preferred.as_slice() {
                        if entry.record().equals(record, whole) {
                            return Prefix::matching(length, record, entry);
                        }
                    }
                }
            }
        }

        Prefix::full(record)
    }

    /// Serializes a record as `s/o/pd/pp/r[/number]`, optionally shortened.
    ///
    /// A path whose last segment reads as a number literal always gets the
    /// tag, unless the caller forces it off.
    #[must_use]
    pub fn to_canonical_string(&self, record: &PronounRecord, options: CanonicalOptions) -> String {
        if !self.is_cacheable(record) {
            return self.encode(record, options);
        }

        let key = (record.clone(), options);
        if let Ok(cache) = self.cache.read() {
            if let Some(path) = cache.get(&key) {
                trace!(%record, path = %path, "canonical path cache hit");
                return path.clone();
            }
        }

        let path = self.encode(record, options);
        if let Ok(mut cache) = self.cache.write() {
            cache.entry(key).or_insert_with(|| path.clone());
        }
        path
    }

    fn is_cacheable(&self, record: &PronounRecord) -> bool {
        self.catalog
            .iter()
            .any(|e| e.record().equals(record, EqualityOptions::ignoring_number()))
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or_default()
    }

    fn encode(&self, record: &PronounRecord, options: CanonicalOptions) -> String {
        let prefix = if options.shorten {
            self.shortest_unique_prefix(record)
        } else {
            Prefix::full(record)
        };

        let include_number = options.include_number_tag.unwrap_or_else(|| {
            let last = record.path(prefix.length, false);
            let last = last.rsplit('/').next().unwrap_or_default();
            prefix.needs_number_tag || Number::from_literal(last).is_some()
        });
        record.path(prefix.length, include_number)
    }

    /// Returns the share path (`/` + shortened path), or `None` if the record
    /// cannot be published safely.
    #[must_use]
    pub fn share_path(&self, record: &PronounRecord) -> Option<String> {
        if !is_safe_for_external_identifier(record) {
            return None;
        }
        Some(format!(
            "/{}",
            self.to_canonical_string(record, CanonicalOptions::shortened())
        ))
    }

    /// Lists every catalog entry with its shortened path.
    #[must_use]
    pub fn presets(&self) -> Vec<Preset> {
        self.catalog
            .iter()
            .map(|entry| {
                let record = entry.record();
                let shortened = self.to_canonical_string(record, CanonicalOptions::shortened());
                let full = self.to_canonical_string(
                    record,
                    CanonicalOptions::full().with_number_tag(false),
                );
                let remainder = full
                    .strip_prefix(shortened.as_str())
                    .unwrap_or_default()
                    .to_string();
                Preset {
                    record: record.clone(),
                    shortened,
                    remainder,
                }
            })
            .collect()
    }

    /// Enumerates the share paths of every catalog entry, split into segments.
    #[must_use]
    pub fn share_paths(&self) -> Vec<Vec<String>> {
        self.catalog
            .iter()
            .filter_map(|entry| self.share_path(entry.record()))
            .map(|path| {
                path.trim_start_matches('/')
                    .split('/')
                    .map(String::from)
                    .collect()
            })
            .collect()
    }
}
