use std::fmt;

use super::buffer::SourceBuffer;

/// Columns a horizontal tab advances the cursor by.
pub const TAB_WIDTH: usize = 8;

/// A position inside a [`SourceBuffer`].
///
/// `offset` is a byte offset starting at zero, `line` and `column` start at one.
/// The three are kept consistent by only ever moving forward through
/// [`Cursor::advance`], which looks at every consumed byte: a linefeed starts a
/// new line, a tab moves the column by [`TAB_WIDTH`], anything else by one.
///
/// Copying a cursor snapshots the position; copies move independently.
#[derive(Clone, Copy)]
pub struct Cursor<'src> {
    buffer: &'src SourceBuffer,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(buffer: &'src SourceBuffer) -> Cursor<'src> {
        Cursor {
            buffer,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn buffer(&self) -> &'src SourceBuffer {
        self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.buffer.len()
    }

    /// Bytes left to read, including the current one.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn remainder(&self) -> &'src [u8] {
        &self.buffer.bytes()[self.offset..]
    }

    /// Must not be called if `at_end()`.
    pub fn current(&self) -> u8 {
        self.buffer.byte_at(self.offset)
    }

    /// Must have `k < remaining()`.
    pub fn peek(&self, k: usize) -> u8 {
        self.buffer.byte_at(self.offset + k)
    }

    /// Must not be called if `at_end()`.
    pub fn advance(&mut self) {
        debug_assert!(!self.at_end(), "advance past end of {}", self.buffer.path().display());

        let consumed = self.current();
        self.offset += 1;

        match consumed {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\t' => self.column += TAB_WIDTH,
            _ => self.column += 1,
        }
    }

    /// Must have `n <= remaining()`.
    pub fn advance_by(&mut self, n: usize) {
        // Byte by byte so linefeeds inside the consumed range still count.
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn matches(&self, literal: &[u8]) -> bool {
        self.remainder().starts_with(literal)
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.buffer, other.buffer) && self.offset == other.offset
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("path", &self.buffer.path())
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.buffer.path().display(), self.line, self.column)
    }
}
