use std::{io, path::PathBuf};

use thiserror::Error;

/// A fatal lexing fault.
///
/// Lexing stops at the first fault, so at most one of these is produced per
/// file. The diagnostic quoting the source has already been emitted by the
/// time the caller receives it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("offset {offset}: {reason}")]
pub struct LexError {
    reason: LexErrorKind,
    offset: usize,
}

impl LexError {
    pub fn new(reason: LexErrorKind, offset: usize) -> Self {
        LexError { reason, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reason(&self) -> &LexErrorKind {
        &self.reason
    }

    pub fn get_error_name(&self) -> &str {
        match &self.reason {
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::IllegalCharacter { .. } => "IllegalCharacter",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("illegal character `{character}`")]
    IllegalCharacter { character: char },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
}
