//! Core types for the pronoun engine.
//!
//! This crate provides:
//! - [`Declension`] - The five grammatical positions a pronoun can occupy
//! - [`Number`] - Singular or plural verb conjugation
//! - [`PronounRecord`] - A full pronoun set, compared case-insensitively
//! - [`Error`] - Error types with optional context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declension;
pub mod error;
pub mod record;

pub use declension::{Declension, Number};
pub use error::{Error, ErrorContext, ErrorKind, RecordDefect};
pub use record::{DeclensionValues, EqualityOptions, PronounRecord, values_match};

/// Result type alias using the pronoun engine's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
