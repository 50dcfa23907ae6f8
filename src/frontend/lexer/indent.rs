//! Indentation tokenizer
//!
//! Wraps a raw token source and rewrites its leading-whitespace markers into
//! balanced block-start ([`TokenKind::Indent`]) and block-end
//! ([`TokenKind::Dedent`]) tokens.
//!
//! Indentation is measured in units of [`INDENT_WIDTH`] columns; widths that
//! are not a multiple of it are truncated. A dedent to a level that was never
//! opened is not rejected here, the parser decides what to make of it.

use tracing::trace;

use super::tokens::{Token, TokenKind};
use crate::util::span::Position;

/// Columns per indentation level
pub const INDENT_WIDTH: usize = 4;

/// Anything that can hand out raw tokens one at a time.
///
/// Once exhausted, a source must keep returning [`TokenKind::Eof`].
pub trait RawTokenSource {
    fn next_raw_token(&mut self) -> Token;
}

/// Raw source replaying a prepared token list, then end of input forever
#[derive(Debug)]
pub struct ReplaySource {
    tokens: std::vec::IntoIter<Token>,
    last: Position,
}

impl ReplaySource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last: Position::dummy(),
        }
    }
}

impl RawTokenSource for ReplaySource {
    fn next_raw_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last = token.location;
                token
            }
            None => Token::synthetic(TokenKind::Eof, self.last),
        }
    }
}

/// Pull-based tokenizer emitting the corrected token stream
#[derive(Debug)]
pub struct IndentTokenizer<S> {
    source: S,
    /// Positive: block-starts still owed. Negative: block-ends still owed.
    pending: isize,
    /// Indent units of the current line
    level: usize,
    previous: TokenKind,
    /// Raw token held back while owed block-ends drain
    buffered: Option<Token>,
    /// Where synthetic tokens are reported
    location: Position,
    finished: bool,
}

impl<S: RawTokenSource> IndentTokenizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: 0,
            level: 0,
            // the first line is measured like any other
            previous: TokenKind::LineBreak,
            buffered: None,
            location: Position::new(1, 1),
            finished: false,
        }
    }

    /// Indent units currently considered open
    pub fn level(&self) -> usize {
        self.level
    }

    /// Produce the next corrected token. After end of input, keeps
    /// returning [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.pending < 0 {
                self.pending += 1;
                return self.emit(Token::synthetic(TokenKind::Dedent, self.location));
            }
            if self.pending > 0 {
                self.pending -= 1;
                return self.emit(Token::synthetic(TokenKind::Indent, self.location));
            }
            if let Some(token) = self.buffered.take() {
                return self.emit(token);
            }

            let mut raw = self.pull();

            if self.previous == TokenKind::LineBreak && raw.kind != TokenKind::LineBreak {
                if raw.kind == TokenKind::Leading {
                    let level = raw.text.parse::<usize>().unwrap_or(0) / INDENT_WIDTH;
                    self.pending = level as isize - self.level as isize;
                    self.level = level;
                    if self.pending != 0 {
                        continue;
                    }
                    // same level: the marker is dropped, the next token
                    // still goes through the end-of-input check below
                    raw = self.pull();
                } else {
                    // line starts at column 0: close everything that is open
                    self.pending = -(self.level as isize);
                    self.level = 0;
                    self.buffered = Some(raw);
                    continue;
                }
            }

            if raw.kind == TokenKind::Eof && self.level > 0 {
                // input ended mid-block without a final line break
                self.pending = -(self.level as isize);
                self.level = 0;
                self.buffered = Some(raw);
                continue;
            }

            return self.emit(raw);
        }
    }

    fn pull(&mut self) -> Token {
        let raw = self.source.next_raw_token();
        if !raw.location.is_dummy() {
            self.location = raw.location;
        }
        raw
    }

    fn emit(
        &mut self,
        token: Token,
    ) -> Token {
        trace!(token = %token, at = %token.location, "token");
        self.previous = token.kind;
        token
    }
}

/// Yields every token up to and including the first end of input
impl<S: RawTokenSource> Iterator for IndentTokenizer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
