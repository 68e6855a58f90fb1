//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its main loop and the
//! single-character dispatch. The sub-lexers live in sibling modules.

use std::ops::ControlFlow;

use loxc_util::{DiagnosticBuilder, Reporter, TracingReporter};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenType};
use crate::unicode::is_ascii_ident_start;

/// Result of scanning one token.
///
/// `Continue(Some(token))` emits a token, `Continue(None)` emits nothing
/// (whitespace, comments, skipped characters) and `Break(())` ends the scan.
pub(crate) type Step<'a> = ControlFlow<(), Option<Token<'a>>>;

/// Scanner for Lox source code.
///
/// A scanner makes a single left-to-right pass over its source with at most
/// two characters of lookahead. It is consumed by [`scan_tokens`], so state
/// never outlives one call.
///
/// [`scan_tokens`]: Scanner::scan_tokens
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenType};
/// use loxc_util::Handler;
///
/// let handler = Handler::new();
/// let result = Scanner::new("var x = 1;", &handler).scan_tokens();
///
/// assert!(!handler.has_errors());
/// assert_eq!(result.tokens[0].kind, TokenType::Var);
/// assert_eq!(result.tokens.last().unwrap().kind, TokenType::Eof);
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Where lexical errors are reported.
    reporter: &'a dyn Reporter,

    /// Byte offset of the first character of the current token.
    pub(crate) token_start: usize,

    /// Line of the first character of the current token (1-based).
    token_start_line: u32,

    tokens: Vec<Token<'a>>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` that reports to `reporter`.
    pub fn new(source: &'a str, reporter: &'a dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            token_start: 0,
            token_start_line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole source.
    ///
    /// Always returns a token list ending in exactly one `EOF` token. Errors
    /// are both reported and returned; an unterminated string or block
    /// comment stops the scan at that point.
    pub fn scan_tokens(mut self) -> ScanResult<'a> {
        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            match self.scan_token() {
                ControlFlow::Continue(Some(token)) => self.tokens.push(token),
                ControlFlow::Continue(None) => {},
                ControlFlow::Break(()) => break,
            }
        }

        self.tokens.push(Token::eof(self.cursor.line()));

        ScanResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Consumes the next character and dispatches on it.
    fn scan_token(&mut self) -> Step<'a> {
        let Some(c) = self.cursor.advance() else {
            return ControlFlow::Break(());
        };

        let token = match c {
            '(' => self.make_token(TokenType::LeftParen),
            ')' => self.make_token(TokenType::RightParen),
            '{' => self.make_token(TokenType::LeftBrace),
            '}' => self.make_token(TokenType::RightBrace),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            '-' => self.make_token(TokenType::Minus),
            '+' => self.make_token(TokenType::Plus),
            ';' => self.make_token(TokenType::Semicolon),
            '*' => self.make_token(TokenType::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            '/' => return self.lex_slash(),
            '"' => self.lex_string()?,
            ' ' | '\r' | '\t' | '\n' => return ControlFlow::Continue(None),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ascii_ident_start(c) => self.lex_identifier(),
            c => {
                self.report(LexError::unexpected_character(self.cursor.line(), c));
                return ControlFlow::Continue(None);
            },
        };

        ControlFlow::Continue(Some(token))
    }

    /// Builds a token spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenType) -> Token<'a> {
        self.build_token(kind, None)
    }

    /// Builds a literal-carrying token spanning from the token start to the cursor.
    pub(crate) fn make_literal_token(&self, kind: TokenType, literal: Literal<'a>) -> Token<'a> {
        self.build_token(kind, Some(literal))
    }

    fn build_token(&self, kind: TokenType, literal: Option<Literal<'a>>) -> Token<'a> {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, lexeme, literal, self.token_start_line)
    }

    /// Records a lexical error and reports it as a line-tied diagnostic.
    pub(crate) fn report(&mut self, error: LexError) {
        DiagnosticBuilder::error(error.to_string())
            .line(error.line())
            .code(error.code())
            .emit(self.reporter);
        self.errors.push(error);
    }
}

/// Scans `source`, logging diagnostics through [`TracingReporter`].
///
/// ```
/// use loxc_lex::{scan, TokenType};
///
/// let result = scan("1 / 2");
/// let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenType::Number, TokenType::Slash, TokenType::Number, TokenType::Eof]
/// );
/// ```
pub fn scan(source: &str) -> ScanResult<'_> {
    Scanner::new(source, &TracingReporter).scan_tokens()
}

/// Tokens and errors produced by one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult<'src> {
    /// Tokens in source order, always terminated by a single `EOF`.
    pub tokens: Vec<Token<'src>>,
    /// Lexical errors in the order they were found.
    pub errors: Vec<LexError>,
}

impl<'src> ScanResult<'src> {
    /// Returns true if any lexical error was found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if the scan was clean.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Splits the result into its tokens and errors.
    pub fn into_parts(self) -> (Vec<Token<'src>>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::{DiagnosticCode, Handler};

    fn kinds(source: &str) -> Vec<TokenType> {
        let handler = Handler::new();
        Scanner::new(source, &handler)
            .scan_tokens()
            .tokens
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source_is_only_eof() {
        let result = scan("");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_single_character_punctuation() {
        use TokenType::*;
        assert_eq!(
            kinds("(){},.-+;*"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus,
                Semicolon, Star, Eof
            ]
        );
    }

    #[test]
    fn test_whitespace_produces_nothing() {
        assert_eq!(kinds(" \r\t\n  "), vec![TokenType::Eof]);
    }

    #[test]
    fn test_newlines_advance_token_lines() {
        let result = scan("a\nb\r\n\nc");
        let lines: Vec<_> = result.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_unexpected_character_is_skipped() {
        let handler = Handler::new();
        let result = Scanner::new("1 @ 2", &handler).scan_tokens();

        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenType::Number, TokenType::Number, TokenType::Eof]
        );
        assert_eq!(
            result.errors,
            vec![LexError::UnexpectedCharacter {
                line: 1,
                character: '@',
                codepoint: 64
            }]
        );
    }

    #[test]
    fn test_errors_reach_reporter_with_line_and_code() {
        let handler = Handler::new();
        let _ = Scanner::new("\n\n#", &handler).scan_tokens();

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, Some(3));
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert!(diags[0].message.contains("code point 35"));
    }

    #[test]
    fn test_non_ascii_is_unexpected() {
        let handler = Handler::new();
        let result = Scanner::new("é", &handler).scan_tokens();
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors[0], LexError::unexpected_character(1, 'é'));
    }

    #[test]
    fn test_consecutive_bad_characters_each_reported() {
        let handler = Handler::new();
        let result = Scanner::new("@#$", &handler).scan_tokens();
        assert_eq!(result.errors.len(), 3);
        assert_eq!(handler.error_count(), 3);
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_eof_line_is_final_line() {
        let result = scan("x\n\n");
        assert_eq!(result.tokens.last(), Some(&Token::eof(3)));
    }

    #[test]
    fn test_into_parts() {
        let (tokens, errors) = scan("#").into_parts();
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors.len(), 1);
    }
}
