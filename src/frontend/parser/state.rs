//! Parser state and token stream management

use super::SyntaxError;
use crate::frontend::lexer::{IndentTokenizer, RawTokenSource, Token, TokenKind};
use crate::util::span::Position;

/// Binding power levels for Pratt parser
pub const BP_LOWEST: u8 = 0;
pub const BP_OR: u8 = 20;
pub const BP_AND: u8 = 30;
/// Operand of prefix `!`/`not`: binds looser than comparisons
pub const BP_NOT: u8 = 35;
pub const BP_CMP: u8 = 40;
pub const BP_ADD: u8 = 60;
pub const BP_MUL: u8 = 70;
pub const BP_UNARY: u8 = 80;

/// Parser state: the corrected token stream plus one token of lookahead
#[derive(Debug)]
pub struct ParserState<S> {
    tokens: IndentTokenizer<S>,
    current: Token,
}

impl<S: RawTokenSource> ParserState<S> {
    /// Create a new parser state, pulling the first token
    pub fn new(source: S) -> Self {
        let mut tokens = IndentTokenizer::new(source);
        let current = tokens.next_token();
        Self { tokens, current }
    }

    /// Get current token
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Get current token kind
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn location(&self) -> Position {
        self.current.location
    }

    /// Check the current token kind
    #[inline]
    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current.kind == kind
    }

    /// Check if at end of token stream
    #[inline]
    pub fn at_end(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    /// Advance to next token, returning the one just left behind
    #[inline]
    pub fn bump(&mut self) -> Token {
        let next = self.tokens.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Skip a specific token
    #[inline]
    pub fn skip(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Expect a specific token; `expected` describes it in the error
    pub fn expect(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<Token, SyntaxError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error describing the current token as unexpected
    pub fn unexpected(
        &self,
        expected: impl Into<String>,
    ) -> SyntaxError {
        SyntaxError::new(self.current.location, self.current.to_string(), expected)
    }

    /// Check if current token can start an expression
    #[inline]
    pub fn can_start_expr(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Identifier
                | TokenKind::Minus
                | TokenKind::Not
                | TokenKind::LParen
        )
    }
}
