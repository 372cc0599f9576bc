//! Example sentence mini-language.
//!
//! Authored example text mixes plain text with two kinds of tags:
//!
//! ```text
//! {S} [is/are] nice, and I like {them}.
//!  │     │                        │
//!  │     │                        └─ pronoun tag, lowercase
//!  │     └─ number tag: singular/plural word
//!  └─ pronoun tag, capitalized
//! ```
//!
//! # Modules
//!
//! - [`node`] - Template nodes and parsed examples
//! - [`alias`] - Tag names accepted for each declension
//! - [`parser`] - Source text to [`Example`]
//! - [`render`] - [`Example`] plus a pronoun record to text
//! - [`library`] - Parsed, cached authored examples

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod library;
pub mod node;
pub mod parser;
pub mod render;

pub use library::ExampleLibrary;
pub use node::{Casing, Example, ExampleId, Node, NodeId, NodeInstance};
pub use parser::parse;
pub use render::{Format, render};
