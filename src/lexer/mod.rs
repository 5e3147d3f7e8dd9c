//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source bytes
//! into a sequence of tokens for the later compiler stages. It handles:
//!
//! - Skipping whitespace, `//` line comments and `/* */` block comments
//! - Significant linefeeds, emitted as `Layout` tokens
//! - Operators, matched against a table by longest spelling
//! - String literals delimited by `'` or `"`, taken verbatim
//! - Identifier and digit runs
//! - Reporting the first malformed input through `crate::diagnostics`

pub mod lexer;
pub mod tokens;
