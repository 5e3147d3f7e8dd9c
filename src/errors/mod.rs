//! Error types for the front end.
//!
//! This module defines the errors the lexical layer can hand back to its
//! caller:
//!
//! - `LexError` - a fatal lexing fault with the byte offset it occurred at
//! - `Error` - the crate-level error, wrapping I/O failures and lexing faults
//!
//! Human-readable rendering of a fault against the source text lives in
//! `crate::diagnostics`; these types only carry the offset and reason.

pub mod errors;
