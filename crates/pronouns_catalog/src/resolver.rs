//! Shorthand resolution.
//!
//! Resolves a slash-delimited path, possibly abbreviated, to a single pronoun
//! record. Abbreviated paths are matched against the catalog; full paths that
//! match nothing are built directly.

use pronouns_foundation::{
    Declension, Error, Number, PronounRecord, RecordDefect, Result, values_match,
};
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};

/// A parsed `s/o/pd/pp/r[/number]` path with possibly missing segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathQuery<'a> {
    segments: Vec<&'a str>,
    number: Option<Number>,
}

impl<'a> PathQuery<'a> {
    /// Splits a path on `/` and sets aside a trailing number literal.
    ///
    /// A blank sixth segment, as left by a trailing slash, is dropped.
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        let mut segments: Vec<&str> = input.split('/').collect();
        let number = segments.last().and_then(|s| Number::from_literal(s));
        if number.is_some() {
            segments.pop();
        } else if segments.len() == Declension::COUNT + 1
            && segments.last().is_some_and(|s| s.trim().is_empty())
        {
            segments.pop();
        }
        Self { segments, number }
    }

    /// Returns the explicit number override, if the path ended with one.
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        self.number
    }

    /// Returns the number of declension segments (number literal excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no declension segments were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the value given for a declension, if set.
    ///
    /// Blank segments count as unset.
    #[must_use]
    pub fn given(&self, declension: Declension) -> Option<&'a str> {
        self.segments
            .get(declension.index())
            .copied()
            .filter(|s| !s.trim().is_empty())
    }

    /// Checks whether every set declension matches the record.
    #[must_use]
    pub fn matches(&self, record: &PronounRecord) -> bool {
        Declension::ALL.into_iter().all(|d| {
            self.given(d)
                .is_none_or(|value| values_match(value, record.get(d)))
        })
    }

    fn total_segments(&self) -> usize {
        self.segments.len() + usize::from(self.number.is_some())
    }
}

/// Result of looking a query up in the catalog.
#[derive(Clone, Debug)]
pub enum CatalogMatch<'c> {
    /// Resolved to exactly one entry.
    Unique(&'c CatalogEntry),
    /// Several entries match and no tie-break applies.
    Ambiguous(Vec<&'c CatalogEntry>),
    /// No entry matches.
    NotFound,
}

/// Resolves paths against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> Resolver<'c> {
    /// Creates a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves a path to a pronoun record.
    ///
    /// With `allow_partial`, the path may be a prefix of a known set and is
    /// disambiguated against the catalog. Otherwise, or when a full path
    /// matches nothing, the record is built directly from the segments.
    ///
    /// # Errors
    ///
    /// - `NoMatch` if a partial path matches no catalog entry
    /// - `Ambiguous` if it matches several and no tie-break applies
    /// - `MalformedRecord` if direct construction is impossible, or if a
    ///   sixth segment is not a number literal
    pub fn resolve(&self, input: &str, allow_partial: bool) -> Result<PronounRecord> {
        let query = PathQuery::parse(input);
        if query.total_segments() > Declension::COUNT + 1 {
            return Err(Error::malformed_record(RecordDefect::TooManySegments {
                given: query.total_segments(),
            }));
        }
        if let Some(extra) = query.segments.get(Declension::COUNT) {
            return Err(Error::malformed_record(RecordDefect::InvalidNumber(
                (*extra).to_string(),
            )));
        }

        if allow_partial {
            match self.lookup(&query) {
                CatalogMatch::Unique(entry) => {
                    let number = query.number().unwrap_or(entry.number());
                    debug!(input, resolved = %entry.record(), %number, "resolved from catalog");
                    return Ok(entry.record().with_number(number));
                }
                CatalogMatch::Ambiguous(candidates) => {
                    debug!(input, candidates = candidates.len(), "ambiguous pronoun path");
                    return Err(Error::ambiguous(
                        input,
                        candidates.iter().map(|e| e.record().to_string()).collect(),
                    ));
                }
                CatalogMatch::NotFound if query.len() < Declension::COUNT => {
                    debug!(input, "no catalog match for partial path");
                    return Err(Error::no_match(input));
                }
                CatalogMatch::NotFound => {}
            }
        }

        Self::construct(&query)
    }

    /// Looks a query up in the catalog, applying the tie-break rules.
    ///
    /// Resolution order for several matches:
    /// 1. Exactly one match with the explicit number override
    /// 2. Exactly one preferred match
    #[must_use]
    pub fn lookup(&self, query: &PathQuery<'_>) -> CatalogMatch<'c> {
        let matches = self.catalog.filter(|e| query.matches(e.record()));

        match matches.len() {
            0 => CatalogMatch::NotFound,
            1 => CatalogMatch::Unique(matches[0]),
            _ => {
                if let Some(number) = query.number() {
                    let with_number: Vec<&'c CatalogEntry> = matches
                        .iter()
                        .copied()
                        .filter(|e| e.number() == number)
                        .collect();
                    if let [only] = with_number.as_slice() {
                        return CatalogMatch::Unique(*only);
                    }
                }

                let preferred: Vec<&'c CatalogEntry> =
                    matches.iter().copied().filter(|e| e.is_preferred()).collect();
                if let [only] = preferred.as_slice() {
                    return CatalogMatch::Unique(*only);
                }

                CatalogMatch::Ambiguous(matches)
            }
        }
    }

    /// Builds a record directly from a full path.
    fn construct(query: &PathQuery<'_>) -> Result<PronounRecord> {
        if query.len() < Declension::COUNT {
            return Err(Error::malformed_record(RecordDefect::TooFewSegments {
                given: query.len(),
            }));
        }
        let record = PronounRecord::from_segments(&query.segments)?;
        Ok(record.with_number(query.number().unwrap_or_default()))
    }
}

/// Resolves a path against a catalog.
///
/// Shorthand for [`Resolver::resolve`].
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve(catalog: &Catalog, input: &str, allow_partial: bool) -> Result<PronounRecord> {
    Resolver::new(catalog).resolve(input, allow_partial)
}
