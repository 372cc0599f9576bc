//! Reference catalog, resolver, and canonical encoder.
//!
//! # Architecture
//!
//! ```text
//! "xe/xem/xyr"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATH QUERY      │  → [xe, xem, xyr, -, -], number: none
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CATALOG         │  → 1 match (or AMBIGUOUS / NOT FOUND)
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PRONOUN RECORD  │  → xe/xem/xyr/xyrs/xemself (singular)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ENCODER         │  → "xe/xem/xyr" (shortest unique prefix)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - The immutable reference list of known pronoun sets
//! - [`resolver`] - Resolve (possibly abbreviated) paths against the catalog
//! - [`encoder`] - Shortest unique prefix and share path computation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod encoder;
pub mod resolver;

pub use catalog::{Catalog, CatalogEntry};
pub use encoder::{CanonicalOptions, Encoder, Prefix, Preset, is_safe_for_external_identifier};
pub use resolver::{CatalogMatch, PathQuery, Resolver, resolve};
