//! Human-readable error reports quoting the source.
//!
//! A diagnostic names the location of the earliest offending token, then
//! reprints every source line touched by the offending tokens with a marker
//! row underneath, `~` under each highlighted byte:
//!
//! ```text
//! main.lang:2:9: unterminated string
//! 2	| name <- 'abc
//! 	|         ~~~~
//! ```

pub mod diagnostics;
