//! loxc-lex - Lexical Scanner for the Lox Scripting Language
//!
//! This crate turns Lox source text into a flat list of tokens for a
//! downstream parser. Scanning is a single left-to-right pass with at most
//! two characters of lookahead; it never fails as a whole. Malformed input
//! is reported through a [`loxc_util::Reporter`] and returned alongside the
//! tokens in a [`ScanResult`].
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{Literal, Scanner, TokenType};
//! use loxc_util::Handler;
//!
//! let handler = Handler::new();
//! let result = Scanner::new("print \"hi\" + 2.5;", &handler).scan_tokens();
//!
//! let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenType::Print,
//!         TokenType::String,
//!         TokenType::Plus,
//!         TokenType::Number,
//!         TokenType::Semicolon,
//!         TokenType::Eof,
//!     ]
//! );
//! assert_eq!(result.tokens[1].literal, Some(Literal::String("hi")));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token type and keyword definitions
//! - [`scanner`] - The scanner and its sub-lexers
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error values
//! - [`unicode`] - Identifier character classes
//!
//! # Lexical Grammar
//!
//! - **Punctuation**: `( ) { } , . - + ; / *`
//! - **Operators**: `! != = == > >= < <=`
//! - **Numbers**: `digit+ ( "." digit+ )?`, always stored as `f64`
//! - **Strings**: `"..."` with no escapes; may span lines
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`, minus the 16 reserved words
//! - **Comments**: `// to end of line` and nestable `/* ... */`
//! - **Whitespace**: space, tab, carriage return and newline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use scanner::{scan, ScanResult, Scanner};
pub use token::{keyword_from_ident, Literal, Token, TokenType, KEYWORDS};
