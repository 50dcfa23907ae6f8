//! Parser module
//!
//! Recursive descent for statements, Pratt parsing for expressions. The
//! parser pulls from the indentation tokenizer one token at a time and
//! builds tagged interior nodes:
//!
//! ```text
//! file        := statements END
//! statements  := { LF | statement }
//! statement   := if_stmt | while_loop | for_loop | simple_stmt
//! simple_stmt := (ID '=' expr | expr) (LF | before DEDENT | before END)
//! if_stmt     := 'if' expr ':' block ['elif' ... | 'else' ':' block]
//! while_loop  := 'while' expr ':' block
//! for_loop    := 'for' ID 'in' expr ':' block
//! block       := LF INDENT statements DEDENT
//! ```
//!
//! Parsing stops at the first error.

mod expr;
mod nud;
mod state;
mod stmt;

#[cfg(test)]
mod tests;

pub use state::{ParserState, BP_LOWEST};

use tracing::debug;

use crate::frontend::ast::Node;
use crate::frontend::lexer::{RawTokenSource, Scanner, TokenKind};
use crate::util::span::Position;

/// Parse source text into a `file` node
///
/// # Example
/// ```python
/// for i in range(3):
///     print(i)
/// ```
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    parse_from(Scanner::new(source))
}

/// Parse from any raw token source
pub fn parse_from<S: RawTokenSource>(source: S) -> Result<Node, SyntaxError> {
    debug!("parsing started");
    let mut state = ParserState::new(source);
    let file = state.parse_file()?;
    debug!("parsing finished");
    Ok(file)
}

/// Parse a single expression, optionally followed by a line break
pub fn parse_expression(source: &str) -> Result<Node, SyntaxError> {
    let mut state = ParserState::new(Scanner::new(source));
    let expr = state.parse_expression(BP_LOWEST)?;
    state.skip(TokenKind::LineBreak);
    state.expect(TokenKind::Eof, "end of input")?;
    Ok(expr)
}

/// First syntax error of a parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: syntax error: expected {expected}, found {found}")]
pub struct SyntaxError {
    pub location: Position,
    /// The offending token as it appears in token dumps
    pub found: String,
    pub expected: String,
}

impl SyntaxError {
    pub fn new(
        location: Position,
        found: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            location,
            found: found.into(),
            expected: expected.into(),
        }
    }
}
