//! Number literal lexing.

use crate::scanner::Scanner;
use crate::token::{Literal, Token, TokenType};

impl<'a> Scanner<'a> {
    /// Lexes a number literal. The first digit is already consumed.
    ///
    /// Grammar: `digit+ ( "." digit+ )?`. A `.` is only part of the number
    /// when a digit follows it, so `1.` is `NUMBER DOT` and `.5` is
    /// `DOT NUMBER`. There is no sign, exponent, or hex form.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(self.token_start);
        // A digit run with an optional fraction is always valid f64 syntax.
        let value = text.parse::<f64>().unwrap_or_default();
        self.make_literal_token(TokenType::Number, Literal::Number(value))
    }
}
