//! Declensions and grammatical number.
//!
//! The order of [`Declension::ALL`] is load-bearing: it is the segment order
//! of the serialized path format and the order in which prefixes are searched.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, RecordDefect};

/// A grammatical position a pronoun can occupy.
///
/// - `Subject`: **He** is nice.
/// - `Object`: I like **him**.
/// - `PossessiveDeterminer`: **Their** socks are grey.
/// - `PossessivePronoun`: The ball is **hers**.
/// - `Reflexive`: She did it **herself**.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Declension {
    /// Subject form ("they").
    Subject,
    /// Object form ("them").
    Object,
    /// Possessive determiner ("their").
    PossessiveDeterminer,
    /// Possessive pronoun ("theirs").
    PossessivePronoun,
    /// Reflexive form ("themselves").
    Reflexive,
}

impl Declension {
    /// Number of declensions in a full pronoun set.
    pub const COUNT: usize = 5;

    /// All declensions, in canonical order.
    pub const ALL: [Declension; Self::COUNT] = [
        Declension::Subject,
        Declension::Object,
        Declension::PossessiveDeterminer,
        Declension::PossessivePronoun,
        Declension::Reflexive,
    ];

    /// Returns the position of this declension in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Subject => 0,
            Self::Object => 1,
            Self::PossessiveDeterminer => 2,
            Self::PossessivePronoun => 3,
            Self::Reflexive => 4,
        }
    }

    /// Returns the canonical tag name (`possessive-determiner`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Object => "object",
            Self::PossessiveDeterminer => "possessive-determiner",
            Self::PossessivePronoun => "possessive-pronoun",
            Self::Reflexive => "reflexive",
        }
    }

    /// Returns a human-readable name for display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Subject => "Subject",
            Self::Object => "Object",
            Self::PossessiveDeterminer => "Possessive determiner",
            Self::PossessivePronoun => "Possessive pronoun",
            Self::Reflexive => "Reflexive pronoun",
        }
    }

    /// Returns a short sentence showing the declension in use.
    #[must_use]
    pub const fn usage_hint(self) -> &'static str {
        match self {
            Self::Subject => "He is nice.",
            Self::Object => "I like him.",
            Self::PossessiveDeterminer => "Their socks are grey.",
            Self::PossessivePronoun => "The ball is hers.",
            Self::Reflexive => "She did it herself.",
        }
    }

    /// Looks up a declension by its canonical name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Declension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether verbs conjugate as singular ("he **is**") or plural ("they **are**").
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Number {
    /// Singular conjugation.
    #[default]
    Singular,
    /// Plural conjugation.
    Plural,
}

impl Number {
    /// Returns the literal used in the serialized path format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
        }
    }

    /// Parses an exact, case-sensitive number literal.
    ///
    /// Only `singular` and `plural` are accepted; `Plural` is an ordinary word.
    #[must_use]
    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "singular" => Some(Self::Singular),
            "plural" => Some(Self::Plural),
            _ => None,
        }
    }

    /// Picks the word matching this number.
    #[must_use]
    pub fn select<'a>(self, singular: &'a str, plural: &'a str) -> &'a str {
        match self {
            Self::Singular => singular,
            Self::Plural => plural,
        }
    }

    /// Returns a short phrase showing how verbs conjugate for this number.
    #[must_use]
    pub const fn usage_hint(self) -> &'static str {
        match self {
            Self::Singular => "he is clever",
            Self::Plural => "they are clever",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or_else(|| {
            Error::new(ErrorKind::MalformedRecord(RecordDefect::InvalidNumber(
                s.to_string(),
            )))
        })
    }
}
