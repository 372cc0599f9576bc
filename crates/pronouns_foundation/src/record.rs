//! Pronoun records.
//!
//! A [`PronounRecord`] is an immutable value: one word per [`Declension`] plus
//! a [`Number`]. Values compare ASCII case-insensitively after trimming, and
//! keep their original spelling for display.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::declension::{Declension, Number};
use crate::error::{Error, RecordDefect};

/// Compares two declension values the way records do.
#[must_use]
pub fn values_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// One value per declension, in canonical order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclensionValues([String; Declension::COUNT]);

impl DeclensionValues {
    /// Creates a value set from five values in canonical order.
    #[must_use]
    pub fn new<S: Into<String>>(values: [S; Declension::COUNT]) -> Self {
        Self(values.map(Into::into))
    }

    /// Returns the value for a declension.
    #[must_use]
    pub fn get(&self, declension: Declension) -> &str {
        &self.0[declension.index()]
    }

    /// Iterates over `(declension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Declension, &str)> {
        Declension::ALL
            .into_iter()
            .zip(self.0.iter().map(String::as_str))
    }

    /// Returns a copy with one value replaced.
    #[must_use]
    fn with(&self, declension: Declension, value: String) -> Self {
        let mut values = self.0.clone();
        values[declension.index()] = value;
        Self(values)
    }
}

impl std::ops::Index<Declension> for DeclensionValues {
    type Output = str;

    fn index(&self, declension: Declension) -> &str {
        self.get(declension)
    }
}

/// Options for [`PronounRecord::equals`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EqualityOptions {
    /// Skip comparing the records' numbers.
    pub ignore_number: bool,
    /// Compare only this many declensions, in canonical order.
    pub check_only_first: Option<usize>,
}

impl EqualityOptions {
    /// Compares values only, not numbers.
    #[must_use]
    pub fn ignoring_number() -> Self {
        Self {
            ignore_number: true,
            check_only_first: None,
        }
    }

    /// Restricts comparison to the first `count` declensions.
    #[must_use]
    pub fn first(mut self, count: usize) -> Self {
        self.check_only_first = Some(count);
        self
    }
}

/// A full pronoun set: five declension values and a number.
///
/// Records parsed from segments always carry non-empty values. Records
/// derived through [`PronounRecord::with_value`] may not, which is why share
/// links are vetted before publishing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PronounRecord {
    values: DeclensionValues,
    number: Number,
}

impl PronounRecord {
    /// Creates a record from literal values.
    #[must_use]
    pub fn new(values: DeclensionValues, number: Number) -> Self {
        Self { values, number }
    }

    /// Builds a record from five or six raw segments.
    ///
    /// The optional sixth segment must be `singular` or `plural`; the number
    /// defaults to singular.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` on a wrong segment count, an empty value, or
    /// an unrecognized number segment.
    pub fn from_segments(segments: &[&str]) -> Result<Self, Error> {
        let given = segments.len();
        if given < Declension::COUNT {
            return Err(Error::malformed_record(RecordDefect::TooFewSegments {
                given,
            }));
        }
        if given > Declension::COUNT + 1 {
            return Err(Error::malformed_record(RecordDefect::TooManySegments {
                given,
            }));
        }

        let number = match segments.get(Declension::COUNT) {
            Some(s) => Number::from_literal(s).ok_or_else(|| {
                Error::malformed_record(RecordDefect::InvalidNumber((*s).to_string()))
            })?,
            None => Number::Singular,
        };

        for declension in Declension::ALL {
            if segments[declension.index()].trim().is_empty() {
                return Err(Error::malformed_record(RecordDefect::EmptySegment(
                    declension,
                )));
            }
        }

        let values = DeclensionValues::new([
            segments[0],
            segments[1],
            segments[2],
            segments[3],
            segments[4],
        ]);
        Ok(Self { values, number })
    }

    /// Returns the value for a declension.
    #[must_use]
    pub fn get(&self, declension: Declension) -> &str {
        self.values.get(declension)
    }

    /// Returns all declension values.
    #[must_use]
    pub fn values(&self) -> &DeclensionValues {
        &self.values
    }

    /// Returns the grammatical number.
    #[must_use]
    pub fn number(&self) -> Number {
        self.number
    }

    /// Returns a copy of this record with a different number.
    #[must_use]
    pub fn with_number(&self, number: Number) -> Self {
        Self {
            values: self.values.clone(),
            number,
        }
    }

    /// Returns a copy of this record with one declension value replaced.
    #[must_use]
    pub fn with_value(&self, declension: Declension, value: impl Into<String>) -> Self {
        Self {
            values: self.values.with(declension, value.into()),
            number: self.number,
        }
    }

    /// Compares two records.
    ///
    /// Values match case-insensitively after trimming. With default options
    /// all five values and the number are compared.
    #[must_use]
    pub fn equals(&self, other: &Self, options: EqualityOptions) -> bool {
        if !options.ignore_number && self.number != other.number {
            return false;
        }
        let count = options
            .check_only_first
            .unwrap_or(Declension::COUNT)
            .min(Declension::COUNT);
        Declension::ALL[..count]
            .iter()
            .all(|&d| values_match(self.get(d), other.get(d)))
    }

    /// Joins the first `length` values (lowercased, trimmed) with `/`,
    /// optionally followed by the number.
    #[must_use]
    pub fn path(&self, length: usize, include_number: bool) -> String {
        let mut path = self
            .values
            .iter()
            .take(length)
            .map(|(_, v)| v.trim().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("/");
        if include_number {
            path.push('/');
            path.push_str(self.number.as_str());
        }
        path
    }
}

impl PartialEq for PronounRecord {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, EqualityOptions::default())
    }
}

impl Eq for PronounRecord {}

impl Hash for PronounRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (_, value) in self.values.iter() {
            value.trim().to_ascii_lowercase().hash(state);
        }
        self.number.hash(state);
    }
}

impl fmt::Display for PronounRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path(Declension::COUNT, self.number != Number::Singular))
    }
}

impl FromStr for PronounRecord {
    type Err = Error;

    /// Parses a full `s/o/pd/pp/r[/number]` path without catalog lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('/').collect();
        Self::from_segments(&segments)
    }
}
