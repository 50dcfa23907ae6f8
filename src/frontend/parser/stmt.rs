//! Statement parsing

use super::state::*;
use super::SyntaxError;
use crate::frontend::ast::Node;
use crate::frontend::lexer::{RawTokenSource, TokenKind};

impl<S: RawTokenSource> ParserState<S> {
    /// `file := statements END`
    pub fn parse_file(&mut self) -> Result<Node, SyntaxError> {
        let body = self.parse_statements(TokenKind::Eof)?;
        self.expect(TokenKind::Eof, "end of input")?;
        Ok(Node::interior("file", vec![body]))
    }

    /// Statements up to (not including) `end`; empty lines are skipped
    fn parse_statements(
        &mut self,
        end: TokenKind,
    ) -> Result<Node, SyntaxError> {
        let mut children = Vec::new();
        loop {
            while self.skip(TokenKind::LineBreak) {}
            if self.at(end) || self.at_end() {
                break;
            }
            children.push(self.parse_stmt()?);
        }
        Ok(Node::interior("statements", children))
    }

    /// Parse a statement
    pub fn parse_stmt(&mut self) -> Result<Node, SyntaxError> {
        match self.kind() {
            TokenKind::KwIf => self.parse_if(),
            TokenKind::KwWhile => self.parse_while(),
            TokenKind::KwFor => self.parse_for(),
            _ if self.can_start_expr() => self.parse_simple_stmt(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// `block := LF INDENT statements DEDENT`
    fn parse_block(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::LineBreak, "a line break after `:`")?;
        while self.skip(TokenKind::LineBreak) {}
        self.expect(TokenKind::Indent, "an indented block")?;
        let body = self.parse_statements(TokenKind::Dedent)?;
        self.expect(TokenKind::Dedent, "the end of the block")?;
        Ok(body)
    }

    /// `if`/`elif` with its condition, body and continuation.
    ///
    /// The continuation is `else_stmt` wrapping the else body, or wrapping a
    /// nested `if_stmt` for `elif`; without either it is an empty
    /// `statements`.
    fn parse_if(&mut self) -> Result<Node, SyntaxError> {
        self.bump(); // consume 'if' or 'elif'
        let condition = self.parse_expression(BP_LOWEST)?;
        self.expect(TokenKind::Colon, "`:`")?;
        let body = self.parse_block()?;

        let continuation = match self.kind() {
            TokenKind::KwElif => {
                let nested = self.parse_if()?;
                Node::interior(
                    "else_stmt",
                    vec![Node::interior("statements", vec![nested])],
                )
            }
            TokenKind::KwElse => {
                self.bump();
                self.expect(TokenKind::Colon, "`:`")?;
                Node::interior("else_stmt", vec![self.parse_block()?])
            }
            _ => Node::interior("statements", Vec::new()),
        };

        Ok(Node::interior("if_stmt", vec![condition, body, continuation]))
    }

    fn parse_while(&mut self) -> Result<Node, SyntaxError> {
        self.bump(); // consume 'while'
        let condition = self.parse_expression(BP_LOWEST)?;
        self.expect(TokenKind::Colon, "`:`")?;
        let body = self.parse_block()?;
        Ok(Node::interior("while_loop", vec![condition, body]))
    }

    /// `for ID in expr: block`
    fn parse_for(&mut self) -> Result<Node, SyntaxError> {
        self.bump(); // consume 'for'
        let iterator = self.expect(TokenKind::Identifier, "a loop variable")?;
        self.expect(TokenKind::KwIn, "`in`")?;
        let range = self.parse_expression(BP_LOWEST)?;
        self.expect(TokenKind::Colon, "`:`")?;
        let body = self.parse_block()?;
        Ok(Node::interior(
            "for_loop",
            vec![Node::identifier(iterator.text), range, body],
        ))
    }

    /// Assignment or bare expression, ended by a line break, the end of
    /// the enclosing block, or the end of input
    fn parse_simple_stmt(&mut self) -> Result<Node, SyntaxError> {
        let expr = self.parse_expression(BP_LOWEST)?;

        let stmt = if self.at(TokenKind::Assign) {
            if !matches!(expr, Node::Identifier(_)) {
                return Err(self.unexpected("a line break (`=` needs a name on its left)"));
            }
            self.bump();
            let value = self.parse_expression(BP_LOWEST)?;
            Node::interior("assign", vec![expr, value])
        } else {
            expr
        };

        match self.kind() {
            TokenKind::LineBreak => {
                self.bump();
            }
            TokenKind::Dedent | TokenKind::Eof => {}
            _ => return Err(self.unexpected("a line break")),
        }

        Ok(Node::interior("simple_stmt", vec![stmt]))
    }
}
