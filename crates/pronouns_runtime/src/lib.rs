//! Session, REPL, and CLI for exploring pronoun sets.
//!
//! This crate provides:
//! - [`Session`] - The current pronoun set plus catalog, encoder, and examples
//! - [`Repl`] - Interactive read-eval-print loop over a session
//! - [`RuntimeConfig`] - Link, format, and logging settings
//! - The `pronouns` binary (CLI argument parsing and batch mode)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply};
pub use session::Session;
