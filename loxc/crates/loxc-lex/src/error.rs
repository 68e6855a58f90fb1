//! Lexical error types.
//!
//! Scanner errors are values, not control flow: the scanner records them in
//! its [`ScanResult`](crate::ScanResult), reports them to its reporter, and
//! keeps going (or stops cleanly for unterminated constructs).

use loxc_util::DiagnosticCode;
use thiserror::Error;

/// A problem found while scanning.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start any token. The character is skipped.
    #[error("Unexpected character '{}' (code point {codepoint}).", .character.escape_debug())]
    UnexpectedCharacter {
        /// Line the character was found on
        line: u32,
        /// The offending character
        character: char,
        /// Its Unicode scalar value
        codepoint: u32,
    },

    /// End of input inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line where the input ran out
        line: u32,
    },

    /// End of input inside a (possibly nested) block comment.
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment {
        /// Line where the input ran out
        line: u32,
    },
}

impl LexError {
    pub(crate) fn unexpected_character(line: u32, character: char) -> Self {
        LexError::UnexpectedCharacter {
            line,
            character,
            codepoint: character as u32,
        }
    }

    /// The 1-based line the error is reported on.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line }
            | LexError::UnterminatedBlockComment { line } => line,
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedBlockComment { .. } => {
                DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT
            },
        }
    }
}
