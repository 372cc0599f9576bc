//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Declension, Number, PronounRecord, and Error.

mod declensions;
mod records;
