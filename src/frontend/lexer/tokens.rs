//! Token types

use std::fmt;

use crate::util::span::Position;

/// Token kind
///
/// Keyword spellings `and`/`or`/`not` share the kinds of `&&`/`||`/`!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structure
    Eof,
    Indent,
    Dedent,
    LineBreak,

    // Atoms
    Identifier,
    Number,
    String,

    // Keywords
    KwIf,
    KwElif,
    KwElse,
    KwWhile,
    KwFor,
    KwIn,

    // Operators
    Assign,
    EqEq,
    Neq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    And,
    Or,
    Not,

    // Punctuation
    LParen,
    RParen,
    Colon,
    Comma,

    /// Width of a line's leading whitespace, as decimal text.
    /// Only the raw scanner produces it; the indentation tokenizer
    /// always consumes it.
    Leading,
    /// A character no rule accepts; left for the parser to reject
    Unknown,
}

impl TokenKind {
    /// Short upper-case name, as printed in token dumps
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::LineBreak => "LF",
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::KwIf => "IF",
            TokenKind::KwElif => "ELIF",
            TokenKind::KwElse => "ELSE",
            TokenKind::KwWhile => "WHILE",
            TokenKind::KwFor => "FOR",
            TokenKind::KwIn => "IN",
            TokenKind::Assign => "ASS",
            TokenKind::EqEq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Leading => "LEADING",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Block-start or block-end
    pub fn is_structural(self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent)
    }

    /// Kinds whose lexeme is worth printing next to the name
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Leading
                | TokenKind::Unknown
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token: kind, lexeme and where it starts. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Synthetic token with an empty lexeme (block-start, block-end, end of input)
    pub fn synthetic(kind: TokenKind, location: Position) -> Self {
        Self::new(kind, String::new(), location)
    }
}

/// `ID(a)`, `LPAREN`, `STRING(x)`: the notation used by token dumps and tests
impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.kind.has_payload() {
            write!(f, "{}({})", self.kind, self.text)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token::synthetic(kind, Position::dummy())
    }
}
