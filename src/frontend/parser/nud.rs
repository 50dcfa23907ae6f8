//! Prefix expression parsing (nud - null denotation)

use super::state::*;
use super::SyntaxError;
use crate::frontend::ast::Node;
use crate::frontend::lexer::{RawTokenSource, TokenKind};

impl<S: RawTokenSource> ParserState<S> {
    /// Parse atoms, calls, parenthesized and prefix-operator expressions
    pub(crate) fn parse_prefix(&mut self) -> Result<Node, SyntaxError> {
        match self.kind() {
            TokenKind::Number => {
                let token = self.bump();
                token.text.parse::<i64>().map(Node::number).map_err(|_| {
                    SyntaxError::new(
                        token.location,
                        token.to_string(),
                        "an integer literal that fits in 64 bits",
                    )
                })
            }
            TokenKind::String => Ok(Node::string(self.bump().text)),
            TokenKind::Identifier => {
                let name = self.bump().text;
                if self.at(TokenKind::LParen) {
                    self.parse_call(name)
                } else {
                    Ok(Node::identifier(name))
                }
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expression(BP_LOWEST)?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(Node::interior("paren", vec![inner]))
            }
            TokenKind::Minus => {
                // -x is lowered to 0 - x
                self.bump();
                let operand = self.parse_expression(BP_UNARY)?;
                Ok(Node::interior("-", vec![Node::number(0), operand]))
            }
            TokenKind::Not => {
                self.bump();
                let operand = self.parse_expression(BP_NOT)?;
                Ok(Node::interior("!", vec![operand]))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `name(arg, ...)` with the current token on `(`
    fn parse_call(
        &mut self,
        callee: String,
    ) -> Result<Node, SyntaxError> {
        self.bump(); // consume '('

        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression(BP_LOWEST)?);
                if !self.skip(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "`,` or `)`")?;

        Ok(Node::interior(
            "invoke",
            vec![Node::identifier(callee), Node::interior("arglist", args)],
        ))
    }
}
