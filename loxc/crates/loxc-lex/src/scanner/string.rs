//! String literal lexing.
//!
//! Lox strings are delimited by double quotes, have no escape sequences and
//! may span lines.

use std::ops::ControlFlow;

use crate::error::LexError;
use crate::scanner::Scanner;
use crate::token::{Literal, Token, TokenType};

impl<'a> Scanner<'a> {
    /// Lexes a string literal. The opening quote is already consumed.
    ///
    /// The token's lexeme includes both quotes; its literal is the text
    /// between them. If the input ends first, the error is reported on the
    /// line where it ran out, no token is produced and the scan breaks.
    pub(crate) fn lex_string(&mut self) -> ControlFlow<(), Token<'a>> {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            let line = self.cursor.line();
            self.report(LexError::UnterminatedString { line });
            return ControlFlow::Break(());
        }

        // closing quote
        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let contents = &lexeme[1..lexeme.len() - 1];
        ControlFlow::Continue(self.make_literal_token(TokenType::String, Literal::String(contents)))
    }
}
