//! Operator lexing.
//!
//! This module handles the one-or-two character operators and the `/`
//! ambiguity between division and comments.

use std::ops::ControlFlow;

use super::core::Step;
use crate::scanner::Scanner;
use crate::token::{Token, TokenType};

impl<'a> Scanner<'a> {
    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        self.one_or_two('=', TokenType::BangEqual, TokenType::Bang)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.one_or_two('=', TokenType::EqualEqual, TokenType::Equal)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.one_or_two('=', TokenType::GreaterEqual, TokenType::Greater)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.one_or_two('=', TokenType::LessEqual, TokenType::Less)
    }

    /// Lexes slash, line comment, or block comment.
    ///
    /// Handles: `/`, `//`, `/* */`. Comments produce no token.
    pub(crate) fn lex_slash(&mut self) -> Step<'a> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return ControlFlow::Continue(None);
        }

        if self.cursor.match_char('*') {
            self.skip_block_comment()?;
            return ControlFlow::Continue(None);
        }

        ControlFlow::Continue(Some(self.make_token(TokenType::Slash)))
    }

    fn one_or_two(&mut self, second: char, double: TokenType, single: TokenType) -> Token<'a> {
        let kind = if self.cursor.match_char(second) {
            double
        } else {
            single
        };
        self.make_token(kind)
    }
}
