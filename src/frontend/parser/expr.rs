//! Pratt Parser expression parsing

use super::state::*;
use super::SyntaxError;
use crate::frontend::ast::Node;
use crate::frontend::lexer::{RawTokenSource, TokenKind};

/// Binding power and node tag of an infix operator
fn infix_info(kind: TokenKind) -> Option<(u8, &'static str)> {
    match kind {
        TokenKind::Or => Some((BP_OR, "||")),
        TokenKind::And => Some((BP_AND, "&&")),
        TokenKind::EqEq => Some((BP_CMP, "==")),
        TokenKind::Neq => Some((BP_CMP, "!=")),
        TokenKind::Lt => Some((BP_CMP, "<")),
        TokenKind::Gt => Some((BP_CMP, ">")),
        TokenKind::Plus => Some((BP_ADD, "+")),
        TokenKind::Minus => Some((BP_ADD, "-")),
        TokenKind::Star => Some((BP_MUL, "*")),
        _ => None,
    }
}

impl<S: RawTokenSource> ParserState<S> {
    /// Parse an expression using Pratt parser
    ///
    /// # Algorithm
    /// 1. Parse prefix expression (nud)
    /// 2. While the next token is an infix operator with binding power >= `min_bp`,
    ///    consume it and parse the right side one level tighter, so operators
    ///    of equal precedence associate to the left
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<Node, SyntaxError> {
        let mut lhs = self.parse_prefix()?;

        while let Some((bp, tag)) = infix_info(self.kind()) {
            if bp < min_bp {
                break;
            }
            self.bump();
            let rhs = self.parse_expression(bp + 1)?;
            lhs = Node::interior(tag, vec![lhs, rhs]);
        }

        Ok(lhs)
    }
}
