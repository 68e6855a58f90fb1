//! Token definitions.
//!
//! A [`Token`] is the unit the scanner hands to the parser: the lexical
//! category ([`TokenType`]), the verbatim slice of source it came from, the
//! parsed [`Literal`] value for strings and numbers, and the line it started
//! on. Tokens borrow from the source text and are never modified after
//! construction.

use std::fmt;

use serde::Serialize;

/// Lexical category of a token.
///
/// The set is closed: punctuation, one-or-two character operators, literal
/// kinds, reserved words, and the `Eof` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// Identifier that is not a reserved word
    Identifier,
    /// Double-quoted string literal
    String,
    /// Numeric literal
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenType {
    /// Canonical upper-snake name (`BANG_EQUAL`, `EOF`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words and the token type each maps to.
pub const KEYWORDS: &[(&str, TokenType)] = &[
    ("and", TokenType::And),
    ("class", TokenType::Class),
    ("else", TokenType::Else),
    ("false", TokenType::False),
    ("fun", TokenType::Fun),
    ("for", TokenType::For),
    ("if", TokenType::If),
    ("nil", TokenType::Nil),
    ("or", TokenType::Or),
    ("print", TokenType::Print),
    ("return", TokenType::Return),
    ("super", TokenType::Super),
    ("this", TokenType::This),
    ("true", TokenType::True),
    ("var", TokenType::Var),
    ("while", TokenType::While),
];

/// Looks up a complete identifier in the keyword table.
///
/// Only exact matches count: `and` is a keyword, `android` and `And` are
/// not.
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenType};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenType::While));
/// assert_eq!(keyword_from_ident("android"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenType> {
    let kind = match ident {
        "and" => TokenType::And,
        "class" => TokenType::Class,
        "else" => TokenType::Else,
        "false" => TokenType::False,
        "fun" => TokenType::Fun,
        "for" => TokenType::For,
        "if" => TokenType::If,
        "nil" => TokenType::Nil,
        "or" => TokenType::Or,
        "print" => TokenType::Print,
        "return" => TokenType::Return,
        "super" => TokenType::Super,
        "this" => TokenType::This,
        "true" => TokenType::True,
        "var" => TokenType::Var,
        "while" => TokenType::While,
        _ => return None,
    };
    Some(kind)
}

/// Parsed value carried by string and number tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal<'src> {
    /// Numeric value; every Lox number is a double.
    Number(f64),
    /// String contents without the surrounding quotes.
    String(&'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A single lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Token<'src> {
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Lexical category.
    pub kind: TokenType,
    /// Parsed value for `STRING` and `NUMBER` tokens.
    pub literal: Option<Literal<'src>>,
    /// Verbatim source text. Empty only for `EOF`.
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(
        kind: TokenType,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: u32,
    ) -> Self {
        Self {
            line,
            kind,
            literal,
            lexeme,
        }
    }

    /// Creates the end-of-input sentinel.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenType::Eof, "", None, line)
    }

    /// Returns true for the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }
}

/// Renders as `KIND lexeme literal`, with `nil` for an absent literal.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("nil"),
        }
    }
}
