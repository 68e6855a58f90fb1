//! Character classes for Lox identifiers.
//!
//! Lox identifiers are ASCII only. Any other letter is an unexpected
//! character, so these checks deliberately avoid `char::is_alphabetic`.

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// ```
/// use loxc_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('1'));
/// assert!(!is_ascii_ident_start('α'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
///
/// ```
/// use loxc_lex::unicode::is_ascii_ident_continue;
///
/// assert!(is_ascii_ident_continue('9'));
/// assert!(!is_ascii_ident_continue('-'));
/// ```
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
