//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, Literal, Scanner, Token, TokenType};
    use loxc_util::Handler;
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        scan(source).tokens
    }

    fn kinds(source: &str) -> Vec<TokenType> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    /// Byte offset of a token's lexeme within its source.
    fn offset(source: &str, token: &Token<'_>) -> usize {
        token.lexeme.as_ptr() as usize - source.as_ptr() as usize
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lex_all(""), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_only_newlines() {
        assert_eq!(lex_all("\n\n\n"), vec![Token::eof(4)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("var {} = 1;", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[1].lexeme, name);
        assert_eq!(tokens[1].kind, TokenType::Identifier);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        use TokenType::*;
        assert_eq!(
            kinds("if(a>=1){print!b;}"),
            vec![
                If, LeftParen, Identifier, GreaterEqual, Number, RightParen, LeftBrace, Print,
                Bang, Identifier, Semicolon, RightBrace, Eof
            ]
        );
    }

    #[test]
    fn test_edge_nul_character_is_unexpected() {
        let result = scan("a\0b");
        assert_eq!(result.errors, vec![LexError::unexpected_character(1, '\0')]);
        assert_eq!(result.tokens.len(), 3);
    }

    #[test]
    fn test_edge_nul_inside_string() {
        let result = scan("\"a\0b\"");
        assert!(result.is_ok());
        assert_eq!(result.tokens[0].literal, Some(Literal::String("a\0b")));
    }

    #[test]
    fn test_edge_error_line_inside_multiline_input() {
        let handler = Handler::new();
        let result = Scanner::new("1\n2\n3 ~", &handler).scan_tokens();
        assert_eq!(result.errors[0].line(), 3);
        assert_eq!(handler.diagnostics()[0].line, Some(3));
    }

    #[test]
    fn test_edge_errors_before_unterminated_string_are_kept() {
        let result = scan("@ \"open");
        assert_eq!(
            result.errors,
            vec![
                LexError::unexpected_character(1, '@'),
                LexError::UnterminatedString { line: 1 },
            ]
        );
    }

    #[test]
    fn test_edge_carriage_returns() {
        let result = scan("a\r\nb\rc");
        let lines: Vec<_> = result.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        assert_eq!(kinds("x //"), vec![TokenType::Identifier, TokenType::Eof]);
    }

    #[test]
    fn test_edge_dot_number_dot() {
        use TokenType::*;
        assert_eq!(kinds(".1."), vec![Dot, Number, Dot, Eof]);
    }

    #[test]
    fn test_edge_tokens_are_copyable_after_scan() {
        let source = String::from("nil");
        let token = {
            let result = scan(&source);
            result.tokens[0]
        };
        assert_eq!(token.kind, TokenType::Nil);
    }

    #[test]
    fn test_edge_scanners_are_independent() {
        let handler = Handler::new();
        let first = Scanner::new("#", &handler).scan_tokens();
        let second = Scanner::new("ok", &handler).scan_tokens();
        assert!(first.has_errors());
        assert!(second.is_ok());
        assert_eq!(handler.error_count(), 1);
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_any_input_ends_in_single_eof() {
        proptest!(|(input in "\\PC{0,200}")| {
            let tokens = lex_all(&input);
            prop_assert!(tokens.last().map_or(false, Token::is_eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_property_lexemes_are_ordered_source_slices() {
        proptest!(|(input in "[ -~\\n\\t]{0,200}")| {
            let tokens = lex_all(&input);
            let mut previous_end = 0;
            let mut previous_line = 1;
            for token in tokens.iter().filter(|t| !t.is_eof()) {
                prop_assert!(!token.lexeme.is_empty());
                let start = offset(&input, token);
                prop_assert!(start >= previous_end);
                prop_assert_eq!(&input[start..start + token.lexeme.len()], token.lexeme);
                prop_assert!(token.line >= previous_line);
                previous_end = start + token.lexeme.len();
                previous_line = token.line;
            }
        });
    }

    #[test]
    fn test_property_clean_input_lexemes_cover_source() {
        proptest!(|(input in "[a-zA-Z0-9_(){},.;+*!=<> \\n-]{0,200}")| {
            let result = scan(&input);
            prop_assert!(result.is_ok());
            let joined: String = result.tokens.iter().map(|t| t.lexeme).collect();
            let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        });
    }

    #[test]
    fn test_property_number_literals() {
        proptest!(|(input in "[0-9]{1,15}(\\.[0-9]{1,15})?")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenType::Number);
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
            let expected: f64 = input.parse().unwrap();
            prop_assert_eq!(tokens[0].literal, Some(Literal::Number(expected)));
        });
    }

    #[test]
    fn test_property_identifiers() {
        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            let expected = crate::keyword_from_ident(&input).unwrap_or(TokenType::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }

    #[test]
    fn test_property_string_literals() {
        proptest!(|(input in "[^\"]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenType::String);
            prop_assert_eq!(tokens[0].literal, Some(Literal::String(input.as_str())));
            let newlines = input.matches('\n').count() as u32;
            prop_assert_eq!(tokens[1].line, 1 + newlines);
        });
    }
}
