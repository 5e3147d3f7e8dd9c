//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token anchored at a cursor snapshot
//! - `MK_OPERATOR!` - Creates an operator template for the operator table
//!
//! These macros reduce boilerplate in the token tables and the lexer.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's bytes (anything convertible into `Vec<u8>`)
/// * `$location` - Cursor snapshot at the first byte of the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Digits, b"42".to_vec(), cursor);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $location:expr) => {
        $crate::lexer::tokens::Token::new($kind, $text, $location)
    };
}

/// Creates an operator template from a string literal spelling.
///
/// # Example
///
/// ```ignore
/// OperatorTable::new(vec![MK_OPERATOR!("<-"), MK_OPERATOR!("<<")])
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($spelling:literal) => {
        $crate::lexer::tokens::TokenTemplate::new(
            $crate::lexer::tokens::TokenKind::Operator,
            $spelling.as_bytes(),
        )
    };
}
