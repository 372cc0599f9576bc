//! Integration tests across all layers
//!
//! Tests that drive a session and the REPL the way the front end does.

mod session;
