use std::io::{self, Write};

use crate::{lexer::tokens::Token, source::buffer::SourceBuffer};

/// Writes rendered diagnostics to a stream and counts them.
pub struct Diagnostics<W: Write = io::Stderr> {
    out: W,
    reported: usize,
}

impl Diagnostics<io::Stderr> {
    pub fn stderr() -> Self {
        Diagnostics::new(io::stderr())
    }
}

impl<W: Write> Diagnostics<W> {
    pub fn new(out: W) -> Self {
        Diagnostics { out, reported: 0 }
    }

    /// Quotes the source lines covering `tokens`, with their bytes underlined,
    /// under a `path:line:column: message` header.
    ///
    /// Never fails: a diagnostic that cannot be written is logged and dropped.
    pub fn report(&mut self, tokens: &[Token], message: &str) {
        let rendered = render(tokens, message);
        self.reported += 1;

        if let Err(error) = self.out.write_all(&rendered).and_then(|_| self.out.flush()) {
            tracing::warn!(%error, diagnostic = message, "failed to write diagnostic");
        }
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders one diagnostic.
///
/// ```text
/// <path>:<line>:<column>: <message>
/// <lineNumber>\t| <source line>
/// \t| <markers>
/// ```
///
/// The quoted window runs from the start of the line holding the earliest
/// token to the end of the line holding the latest token end. Under every
/// source byte the marker row has `~` if any token covers it, a tab if the
/// byte is a tab, and a space otherwise.
///
/// Panics if `tokens` is empty or the tokens come from different buffers.
pub fn render(tokens: &[Token], message: &str) -> Vec<u8> {
    let (first, last) = bounds(tokens);
    let buffer = first.location().buffer();
    let bytes = buffer.bytes();

    let start = line_start(bytes, first.offset());
    let end = line_end(bytes, last.span().end.max(last.offset() + 1) - 1);

    let location = first.location();
    let mut out = format!(
        "{}:{}:{}: {}\n",
        buffer.path().display(),
        location.line(),
        location.column(),
        message
    )
    .into_bytes();

    let mut line_offset = start;
    for (i, line) in bytes[start..end].split(|&b| b == b'\n').enumerate() {
        out.extend_from_slice(format!("{}\t| ", location.line() + i).as_bytes());
        out.extend_from_slice(line);
        out.push(b'\n');

        out.extend_from_slice(b"\t| ");
        for (j, &byte) in line.iter().enumerate() {
            let offset = line_offset + j;
            out.push(if tokens.iter().any(|t| t.span().contains(&offset)) {
                b'~'
            } else if byte == b'\t' {
                b'\t'
            } else {
                b' '
            });
        }
        out.push(b'\n');

        line_offset += line.len() + 1;
    }

    out
}

/// The token starting first and the token ending last, earliest in `tokens`
/// on ties.
fn bounds<'a, 'src>(tokens: &'a [Token<'src>]) -> (&'a Token<'src>, &'a Token<'src>) {
    let Some(head) = tokens.first() else {
        panic!("cannot report a diagnostic without tokens");
    };

    let buffer: &SourceBuffer = head.location().buffer();
    assert!(
        tokens.iter().all(|t| std::ptr::eq(t.location().buffer(), buffer)),
        "tokens span multiple files"
    );

    let mut first = head;
    let mut last = head;
    for token in &tokens[1..] {
        if token.offset() < first.offset() {
            first = token;
        }
        if token.span().end > last.span().end {
            last = token;
        }
    }

    (first, last)
}

/// Offset of the first byte of the line holding `offset`.
fn line_start(bytes: &[u8], offset: usize) -> usize {
    let mut start = offset.min(bytes.len());
    while start > 0 && bytes[start - 1] != b'\n' {
        start -= 1;
    }
    start
}

/// Offset of the linefeed ending the line holding `offset`, or the end of the
/// buffer for the last line.
fn line_end(bytes: &[u8], offset: usize) -> usize {
    let mut end = offset.min(bytes.len());
    while end < bytes.len() && bytes[end] != b'\n' {
        end += 1;
    }
    end
}
