//! Error types for the pronoun engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::declension::Declension;

/// The main error type for pronoun engine operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed record error.
    #[must_use]
    pub fn malformed_record(defect: RecordDefect) -> Self {
        Self::new(ErrorKind::MalformedRecord(defect))
    }

    /// Creates a no-match error for the given input.
    #[must_use]
    pub fn no_match(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoMatch {
            input: input.into(),
        })
    }

    /// Creates an ambiguity error listing the colliding candidates.
    #[must_use]
    pub fn ambiguous(input: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::new(ErrorKind::Ambiguous {
            input: input.into(),
            candidates,
        })
    }

    /// Creates an unknown template tag error.
    #[must_use]
    pub fn unknown_tag(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTag(name.into()))
    }

    /// Creates an invalid input error for a bad command, flag or argument.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }

    /// Creates a malformed template tag error.
    #[must_use]
    pub fn malformed_tag(offset: usize, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTag {
            offset,
            reason: reason.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A pronoun record could not be built from the given segments.
    #[error("malformed pronoun record: {0}")]
    MalformedRecord(RecordDefect),

    /// Partial resolution found no catalog candidates.
    #[error("no known pronoun set matches '{input}'")]
    NoMatch {
        /// The input that was resolved.
        input: String,
    },

    /// Partial resolution found several candidates and no tie-break applied.
    #[error("'{input}' is ambiguous between {}", .candidates.join(", "))]
    Ambiguous {
        /// The input that was resolved.
        input: String,
        /// Full paths of the colliding catalog entries.
        candidates: Vec<String>,
    },

    /// A template pronoun tag is not in the alias table.
    #[error("unknown pronoun declension '{0}'")]
    UnknownTag(String),

    /// A template tag was opened but not properly closed.
    #[error("malformed tag at offset {offset}: {reason}")]
    MalformedTag {
        /// Byte offset of the opening character.
        offset: usize,
        /// What was wrong with the tag.
        reason: String,
    },

    /// A front-end command, flag or argument was not understood.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or front-end error (terminal I/O, etc).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Why a set of segments does not form a pronoun record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    /// Fewer than five declension segments.
    TooFewSegments {
        /// Number of segments given.
        given: usize,
    },
    /// More segments than five declensions plus a number.
    TooManySegments {
        /// Number of segments given.
        given: usize,
    },
    /// A required declension value is empty.
    EmptySegment(Declension),
    /// The trailing segment is not `singular` or `plural`.
    InvalidNumber(String),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments { given } => {
                write!(f, "expected at least five segments, got {given}")
            }
            Self::TooManySegments { given } => {
                write!(f, "expected at most six segments, got {given}")
            }
            Self::EmptySegment(declension) => {
                write!(f, "empty value for {declension}")
            }
            Self::InvalidNumber(s) => {
                write!(f, "'{s}' is not 'singular' or 'plural'")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the input (an example, a command line argument).
    pub source: Option<String>,
    /// Byte offset in the input.
    pub offset: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the byte offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if let Some(offset) = self.offset {
                write!(f, " at offset {offset}")?;
            }
        } else if let Some(offset) = self.offset {
            write!(f, "at offset {offset}")?;
        }
        Ok(())
    }
}
