//! Identifier and keyword lexing.

use crate::scanner::Scanner;
use crate::token::{keyword_from_ident, Token, TokenType};
use crate::unicode::is_ascii_ident_continue;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword. The first character is already consumed.
    ///
    /// Takes the longest run of ASCII letters, digits and underscores, then
    /// checks the whole run against the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_ascii_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenType::Identifier);
        self.make_token(kind)
    }
}
