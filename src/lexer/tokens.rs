use lazy_static::lazy_static;
use std::{borrow::Cow, fmt::Display, ops::Range};

use crate::{source::cursor::Cursor, MK_OPERATOR};

lazy_static! {
    /// Operators of the language, looked up by longest match.
    pub static ref OPERATORS: OperatorTable = OperatorTable::new(vec![
        // Scope
        MK_OPERATOR!("."),
        MK_OPERATOR!("("),
        MK_OPERATOR!(")"),
        MK_OPERATOR!("["),
        MK_OPERATOR!("]"),
        MK_OPERATOR!("{"),
        MK_OPERATOR!("}"),
        MK_OPERATOR!(","),
        MK_OPERATOR!(":"),
        MK_OPERATOR!(";"),
        MK_OPERATOR!("..."),
        MK_OPERATOR!("<-"),

        // Arithmetic
        MK_OPERATOR!("!"),
        MK_OPERATOR!("~"),
        MK_OPERATOR!("+"),
        MK_OPERATOR!("-"),
        MK_OPERATOR!("++"),
        MK_OPERATOR!("--"),
        MK_OPERATOR!("*"),
        MK_OPERATOR!("/"),
        MK_OPERATOR!("%"),

        // Binary
        MK_OPERATOR!("<<"),
        MK_OPERATOR!(">>"),
        MK_OPERATOR!("|"),
        MK_OPERATOR!("&"),
        MK_OPERATOR!("^"),

        // Comparison
        MK_OPERATOR!("="),
        MK_OPERATOR!("=/="),
        MK_OPERATOR!(">"),
        MK_OPERATOR!("<"),
        MK_OPERATOR!(">_"),
        MK_OPERATOR!("_<"),
    ]);
}

/// The only `Layout` token: a significant linefeed.
pub const LINEFEED: TokenTemplate = TokenTemplate::new(TokenKind::Layout, b"\n");

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Layout,
    Operator,
    Digits,
    Identifier,
    StringLiteral,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token without a location: a kind and its fixed spelling.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TokenTemplate {
    kind: TokenKind,
    spelling: &'static [u8],
}

impl TokenTemplate {
    pub const fn new(kind: TokenKind, spelling: &'static [u8]) -> Self {
        TokenTemplate { kind, spelling }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn spelling(&self) -> &'static [u8] {
        self.spelling
    }

    /// Anchors the template at `location`.
    pub fn at<'src>(&self, location: Cursor<'src>) -> Token<'src> {
        Token::new(self.kind, self.spelling, location)
    }
}

/// A fixed set of operator spellings.
///
/// Spellings are unique and non-empty, so at most one candidate of each
/// length can match at a given position and the longest match is unambiguous.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: Vec<TokenTemplate>,
}

impl OperatorTable {
    pub fn new(operators: Vec<TokenTemplate>) -> Self {
        for (i, operator) in operators.iter().enumerate() {
            assert!(!operator.spelling.is_empty(), "operator #{} has an empty spelling", i);
            assert!(
                operators[..i].iter().all(|other| other.spelling != operator.spelling),
                "operator `{}` registered twice",
                String::from_utf8_lossy(operator.spelling)
            );
        }

        OperatorTable { operators }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenTemplate> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// The longest operator spelled by the bytes at `cursor`, if any.
    pub fn longest_match(&self, cursor: &Cursor) -> Option<&TokenTemplate> {
        let mut best: Option<&TokenTemplate> = None;

        for operator in &self.operators {
            if !cursor.matches(operator.spelling) {
                continue;
            }

            if best.map_or(true, |b| operator.spelling.len() > b.spelling.len()) {
                best = Some(operator);
            }
        }

        best
    }
}

/// A classified run of source bytes anchored at its first byte.
///
/// The token owns a copy of its text. For string literals the text excludes
/// the two delimiters, which `size_in_source` still counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    text: Vec<u8>,
    location: Cursor<'src>,
    size_in_source: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: impl Into<Vec<u8>>, location: Cursor<'src>) -> Self {
        let text = text.into();
        let size = match kind {
            TokenKind::StringLiteral => text.len() + 2,
            _ => text.len(),
        };

        Token {
            kind,
            // Tokens synthesized for error reports may claim more than is left.
            size_in_source: size.min(location.remaining()),
            text,
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn location(&self) -> Cursor<'src> {
        self.location
    }

    pub fn offset(&self) -> usize {
        self.location.offset()
    }

    pub fn size_in_source(&self) -> usize {
        self.size_in_source
    }

    /// The `[offset, offset + size_in_source)` byte range the token covers.
    pub fn span(&self) -> Range<usize> {
        self.offset()..self.offset() + self.size_in_source
    }

    /// The text with a linefeed spelled out, for printing one token per line.
    pub fn escaped_text(&self) -> Cow<'_, str> {
        if self.text == b"\n" {
            Cow::Borrowed("[LINEFEED]")
        } else {
            String::from_utf8_lossy(&self.text)
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::StringLiteral {
            write!(f, "\"{}\"", self.escaped_text())
        } else {
            write!(f, "{}", self.escaped_text())
        }
    }
}
