//! Source file storage and position tracking.
//!
//! This module holds the two lowest layers of the front end:
//!
//! - `SourceBuffer` - the immutable bytes of one source file and its path
//! - `Cursor` - a copyable position inside a buffer with line/column bookkeeping
//!
//! Only the cursor ever moves; the buffer is read-only once loaded and can be
//! shared between threads.

pub mod buffer;
pub mod cursor;
