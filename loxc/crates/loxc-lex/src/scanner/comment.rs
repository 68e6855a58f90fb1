//! Comment skipping.
//!
//! Line comments run to the end of the line. Block comments nest: each
//! `/*` inside a block comment must be closed by its own `*/`.

use std::ops::ControlFlow;

use crate::error::LexError;
use crate::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Skips a line comment. The leading `//` is already consumed.
    ///
    /// The terminating newline is left for the main loop so it is counted
    /// like any other whitespace.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment. The leading `/*` is already consumed.
    ///
    /// Newlines inside the comment still advance the line counter. Running
    /// out of input before the nesting depth returns to zero reports
    /// [`LexError::UnterminatedBlockComment`] and breaks the scan.
    pub(crate) fn skip_block_comment(&mut self) -> ControlFlow<()> {
        let mut depth: u32 = 1;

        loop {
            if self.cursor.is_at_end() {
                let line = self.cursor.line();
                self.report(LexError::UnterminatedBlockComment { line });
                return ControlFlow::Break(());
            }

            match (self.cursor.current_char(), self.cursor.peek_char(1)) {
                ('/', '*') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth += 1;
                },
                ('*', '/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth -= 1;
                    if depth == 0 {
                        return ControlFlow::Continue(());
                    }
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use loxc_util::{DiagnosticCode, Handler};

    use crate::error::LexError;
    use crate::scanner::{scan, Scanner};
    use crate::token::TokenType::{self, *};

    fn kinds(source: &str) -> Vec<TokenType> {
        scan(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_line_comment_is_skipped() {
        assert_eq!(kinds("// nothing here"), vec![Eof]);
        assert_eq!(kinds("x // trailing\ny"), vec![Identifier, Identifier, Eof]);
    }

    #[test]
    fn test_line_comment_keeps_line_count() {
        let result = scan("// one\n// two\nz");
        assert_eq!(result.tokens[0].line, 3);
    }

    #[test]
    fn test_block_comment_is_skipped() {
        assert_eq!(kinds("a /* b c */ d"), vec![Identifier, Identifier, Eof]);
        assert_eq!(kinds("/**/"), vec![Eof]);
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(kinds("/* outer /* inner */ still outer */ x"), vec![Identifier, Eof]);
        assert_eq!(kinds("/* /* /* deep */ */ */"), vec![Eof]);
    }

    #[test]
    fn test_block_comment_counts_lines() {
        let result = scan("/* a\nb\nc */ x");
        assert_eq!(result.tokens[0].line, 3);
        assert_eq!(result.tokens[0].lexeme, "x");
    }

    #[test]
    fn test_star_slash_outside_comment_is_operators() {
        assert_eq!(kinds("*/"), vec![Star, Slash, Eof]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let handler = Handler::new();
        let result = Scanner::new("x /* never\nclosed", &handler).scan_tokens();

        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![Identifier, Eof]
        );
        assert_eq!(result.errors, vec![LexError::UnterminatedBlockComment { line: 2 }]);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
        );
    }

    #[test]
    fn test_unclosed_nested_level_is_unterminated() {
        let result = scan("/* /* */ y");
        assert_eq!(result.errors, vec![LexError::UnterminatedBlockComment { line: 1 }]);
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_slash_star_slash_is_unterminated() {
        let result = scan("/*/");
        assert!(result.has_errors());
    }

    #[test]
    fn test_unterminated_comment_stops_scan() {
        let result = scan("/* @ # \"");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.tokens.len(), 1);
    }
}
