//! Pronouns - Shorthand pronoun sets, share paths, and example sentences
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: pronouns_runtime    - Session, REPL, CLI
//! Layer 2: pronouns_template   - Example parser, renderer, example library
//! Layer 1: pronouns_catalog    - Reference catalog, resolver, canonical encoder
//! Layer 0: pronouns_foundation - Core types (Declension, PronounRecord, Error)
//! ```

pub use pronouns_catalog as catalog;
pub use pronouns_foundation as foundation;
pub use pronouns_runtime as runtime;
pub use pronouns_template as template;
