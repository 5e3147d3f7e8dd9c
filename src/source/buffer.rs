use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::errors::Error;

use super::cursor::Cursor;

/// The full contents of one source file, read as raw bytes.
///
/// No decoding is performed: the lexer works on bytes and every offset in the
/// front end is a byte offset into `bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl SourceBuffer {
    pub fn new(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> SourceBuffer {
        SourceBuffer {
            path: path.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads the whole file at `path` into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<SourceBuffer, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source file");

        Ok(SourceBuffer::new(path, bytes))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Must have `offset < self.len()`.
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// A cursor on the first byte of the buffer (line 1, column 1).
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}
