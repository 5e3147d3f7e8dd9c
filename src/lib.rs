//! Lexical front end of the compiler.
//!
//! Turns the raw bytes of a source file into located tokens and renders
//! diagnostics that quote the offending source lines:
//!
//! ```no_run
//! use frontend::{lexer::lexer::tokenize, source::buffer::SourceBuffer};
//!
//! let buffer = SourceBuffer::load("main.lang")?;
//! for token in tokenize(&buffer)? {
//!     println!("{}", token);
//! }
//! # Ok::<(), frontend::errors::errors::Error>(())
//! ```
#![allow(clippy::module_inception)]

pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;
