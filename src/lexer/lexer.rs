use std::io::Write;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{
    diagnostics::diagnostics::Diagnostics,
    errors::errors::{LexError, LexErrorKind},
    source::{buffer::SourceBuffer, cursor::Cursor},
    MK_TOKEN,
};

use super::tokens::{OperatorTable, Token, TokenKind, LINEFEED, OPERATORS};

lazy_static! {
    static ref CHAR_SEQUENCE: Regex = Regex::new("^[a-zA-Z0-9_]+").unwrap();
}

const SINGLE_LINE_COMMENT: &[u8] = b"//";
const MULTI_LINE_COMMENT_BEGIN: &[u8] = b"/*";
const MULTI_LINE_COMMENT_END: &[u8] = b"*/";

/// Linefeeds are never whitespace: they are `Layout` tokens.
fn is_whitespace(byte: u8) -> bool {
    byte != b'\n' && (byte <= b' ' || byte >= 0x7F)
}

pub struct Lexer<'src, 'cfg, W: Write> {
    cursor: Cursor<'src>,
    operators: &'cfg OperatorTable,
    diagnostics: &'cfg mut Diagnostics<W>,
    tokens: Vec<Token<'src>>,
}

impl<'src, 'cfg, W: Write> Lexer<'src, 'cfg, W> {
    pub fn new(
        buffer: &'src SourceBuffer,
        operators: &'cfg OperatorTable,
        diagnostics: &'cfg mut Diagnostics<W>,
    ) -> Self {
        Lexer {
            cursor: buffer.cursor(),
            operators,
            diagnostics,
            tokens: vec![],
        }
    }

    pub fn push(&mut self, token: Token<'src>) {
        tracing::trace!(kind = %token.kind(), offset = token.offset(), "token");
        self.tokens.push(token);
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.at_end()
    }

    /// Lexes until the end of the buffer or the first fault.
    pub fn run(mut self) -> Result<Vec<Token<'src>>, LexError> {
        while !self.at_eof() {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }

            let token = self.next_token()?;
            if token.size_in_source() == 0 {
                let character = self.cursor.current();
                let offending = MK_TOKEN!(TokenKind::Identifier, vec![character], self.cursor);
                return Err(self.fail(
                    offending,
                    LexErrorKind::IllegalCharacter { character: character as char },
                ));
            }

            self.push(token);
        }

        Ok(self.tokens)
    }

    /// Skips whitespace and comments until a pass makes no progress.
    fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();

            let before = self.cursor.offset();
            self.skip_comment();
            if self.cursor.offset() == before {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && is_whitespace(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.cursor.matches(SINGLE_LINE_COMMENT) {
            // The linefeed ending the comment goes with it.
            while !self.at_eof() {
                let byte = self.cursor.current();
                self.cursor.advance();
                if byte == b'\n' {
                    break;
                }
            }
        } else if self.cursor.matches(MULTI_LINE_COMMENT_BEGIN) {
            self.cursor.advance_by(MULTI_LINE_COMMENT_BEGIN.len());

            // Known quirk: an unclosed comment silently runs to the end of input.
            while !self.at_eof() {
                if self.cursor.matches(MULTI_LINE_COMMENT_END) {
                    self.cursor.advance_by(MULTI_LINE_COMMENT_END.len());
                    return;
                }
                self.cursor.advance();
            }
        }
    }

    fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        let first = self.cursor.current();

        if first == b'\n' {
            let token = LINEFEED.at(self.cursor);
            self.cursor.advance();
            return Ok(token);
        }

        if first == b'\'' || first == b'"' {
            return self.string_literal();
        }

        if let Some(operator) = self.operators.longest_match(&self.cursor) {
            let token = operator.at(self.cursor);
            self.cursor.advance_by(operator.spelling().len());
            return Ok(token);
        }

        Ok(self.char_sequence())
    }

    /// Bytes up to the matching delimiter, verbatim: no escape sequences.
    fn string_literal(&mut self) -> Result<Token<'src>, LexError> {
        let delimiter = self.cursor.current();
        let begin = self.cursor;
        self.cursor.advance();

        let mut text = vec![];
        loop {
            if self.at_eof() {
                let partial = MK_TOKEN!(TokenKind::StringLiteral, text, begin);
                return Err(self.fail(partial, LexErrorKind::UnterminatedString));
            }

            let byte = self.cursor.current();
            self.cursor.advance();
            if byte == delimiter {
                return Ok(MK_TOKEN!(TokenKind::StringLiteral, text, begin));
            }
            text.push(byte);
        }
    }

    /// A run of ASCII alphanumerics and underscores; empty if the current byte
    /// starts no such run.
    fn char_sequence(&mut self) -> Token<'src> {
        let begin = self.cursor;
        let length = CHAR_SEQUENCE
            .find(self.cursor.remainder())
            .map_or(0, |m| m.end());

        let text = self.cursor.remainder()[..length].to_vec();
        self.cursor.advance_by(length);

        let kind = match text.first() {
            Some(byte) if byte.is_ascii_digit() => TokenKind::Digits,
            _ => TokenKind::Identifier,
        };

        MK_TOKEN!(kind, text, begin)
    }

    fn fail(&mut self, offending: Token<'src>, reason: LexErrorKind) -> LexError {
        let offset = offending.offset();
        self.diagnostics.report(&[offending], &reason.to_string());
        LexError::new(reason, offset)
    }
}

/// Tokenizes `buffer` with the standard operators, reporting faults on stderr.
pub fn tokenize(buffer: &SourceBuffer) -> Result<Vec<Token<'_>>, LexError> {
    tokenize_with(buffer, &OPERATORS, &mut Diagnostics::stderr())
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %buffer.path().display(), bytes = buffer.len()))]
pub fn tokenize_with<'src, W: Write>(
    buffer: &'src SourceBuffer,
    operators: &OperatorTable,
    diagnostics: &mut Diagnostics<W>,
) -> Result<Vec<Token<'src>>, LexError> {
    let tokens = Lexer::new(buffer, operators, diagnostics).run()?;

    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
