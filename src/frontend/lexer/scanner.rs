//! Raw scanner
//!
//! Turns characters into raw tokens, one per call. Indentation is reported,
//! not interpreted: a line that starts with whitespace and carries content
//! yields a [`TokenKind::Leading`] marker whose lexeme is the width. The
//! [`IndentTokenizer`](super::indent::IndentTokenizer) turns those markers
//! into block-start/block-end tokens.

use std::iter::Peekable;
use std::str::Chars;

use super::indent::RawTokenSource;
use super::tokens::{Token, TokenKind};
use crate::util::span::Position;

/// Columns a tab advances the indentation width to (next multiple of)
pub const TAB_WIDTH: usize = 4;

/// Check if character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if character is valid identifier continuation
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convert string to keyword token kind
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "if" => Some(TokenKind::KwIf),
        "elif" => Some(TokenKind::KwElif),
        "else" => Some(TokenKind::KwElse),
        "while" => Some(TokenKind::KwWhile),
        "for" => Some(TokenKind::KwFor),
        "in" => Some(TokenKind::KwIn),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "not" => Some(TokenKind::Not),
        _ => None,
    }
}

/// Character-level scanner over an in-memory buffer
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
    at_line_start: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
            at_line_start: true,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn mark_start(&mut self) {
        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Skip spaces, tabs, carriage returns and `#` comments, never a line break
    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Measure the leading whitespace of a line. Returns the marker when the
    /// line has content; blank and comment-only lines produce none.
    fn scan_leading(&mut self) -> Option<Token> {
        self.mark_start();
        let mut width = 0usize;
        while let Some(c) = self.peek() {
            match c {
                ' ' => width += 1,
                '\t' => width = (width / TAB_WIDTH + 1) * TAB_WIDTH,
                '\r' => {}
                _ => break,
            }
            self.advance();
        }

        match self.peek() {
            None | Some('\n') | Some('#') => None,
            Some(_) if width == 0 => None,
            Some(_) => Some(self.make_token(TokenKind::Leading, width.to_string())),
        }
    }

    /// Generate next raw token; end of input repeats forever
    pub fn next_token(&mut self) -> Token {
        if self.at_line_start {
            self.at_line_start = false;
            if let Some(marker) = self.scan_leading() {
                return marker;
            }
        }

        self.skip_inline_whitespace();
        self.mark_start();

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof, "");
        };

        match c {
            '\n' => {
                self.at_line_start = true;
                self.make_token(TokenKind::LineBreak, "\n")
            }
            c if is_identifier_start(c) => self.scan_identifier(c),
            c if c.is_ascii_digit() => self.scan_number(c),
            '"' => self.scan_string(),
            '=' => self.one_or_two(('=', '='), TokenKind::EqEq, TokenKind::Assign),
            '!' => self.one_or_two(('!', '='), TokenKind::Neq, TokenKind::Not),
            '&' => self.one_or_two(('&', '&'), TokenKind::And, TokenKind::Unknown),
            '|' => self.one_or_two(('|', '|'), TokenKind::Or, TokenKind::Unknown),
            '<' => self.make_token(TokenKind::Lt, "<"),
            '>' => self.make_token(TokenKind::Gt, ">"),
            '+' => self.make_token(TokenKind::Plus, "+"),
            '-' => self.make_token(TokenKind::Minus, "-"),
            '*' => self.make_token(TokenKind::Star, "*"),
            '(' => self.make_token(TokenKind::LParen, "("),
            ')' => self.make_token(TokenKind::RParen, ")"),
            ':' => self.make_token(TokenKind::Colon, ":"),
            ',' => self.make_token(TokenKind::Comma, ","),
            other => self.make_token(TokenKind::Unknown, other.to_string()),
        }
    }

    /// Two-character operator when the second char follows, else the single form
    fn one_or_two(
        &mut self,
        (first, second): (char, char),
        double: TokenKind,
        single: TokenKind,
    ) -> Token {
        if self.peek() == Some(second) {
            self.advance();
            self.make_token(double, format!("{first}{second}"))
        } else {
            self.make_token(single, first.to_string())
        }
    }

    fn scan_identifier(
        &mut self,
        first_char: char,
    ) -> Token {
        let mut value = String::new();
        value.push(first_char);

        while let Some(c) = self.peek() {
            if is_identifier_char(c) {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let kind = keyword_from_str(&value).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, value)
    }

    fn scan_number(
        &mut self,
        first_digit: char,
    ) -> Token {
        let mut value = String::new();
        value.push(first_digit);

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }

        self.make_token(TokenKind::Number, value)
    }

    /// String body up to the closing quote; an unterminated string stops
    /// at the end of its line. No escape processing.
    fn scan_string(&mut self) -> Token {
        let mut value = String::new();

        while let Some(c) = self.peek() {
            match c {
                '"' => {
                    self.advance();
                    break;
                }
                '\n' => break,
                c => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.make_token(TokenKind::String, value)
    }

    /// Create token starting at the current start position
    fn make_token(
        &self,
        kind: TokenKind,
        text: impl Into<String>,
    ) -> Token {
        Token::new(kind, text, self.start_position())
    }
}

impl RawTokenSource for Scanner<'_> {
    fn next_raw_token(&mut self) -> Token {
        self.next_token()
    }
}
