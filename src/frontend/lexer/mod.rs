//! Lexer module
//!
//! - `scanner`: characters to raw tokens, leading whitespace as a width marker
//! - `indent`: raw tokens to the corrected stream with block-start/block-end
//! - `tokens`: token kinds and tokens

pub mod indent;
pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use indent::{IndentTokenizer, RawTokenSource, ReplaySource, INDENT_WIDTH};
pub use scanner::Scanner;
pub use tokens::{Token, TokenKind};

/// Corrected token stream for an in-memory buffer
pub fn lexer(source: &str) -> IndentTokenizer<Scanner<'_>> {
    IndentTokenizer::new(Scanner::new(source))
}

/// Tokenize source code, end-of-input token included
pub fn tokenize(source: &str) -> Vec<Token> {
    tracing::debug!("lexing {} bytes", source.len());
    let tokens: Vec<Token> = lexer(source).collect();
    tracing::debug!("lexed {} tokens", tokens.len());
    tokens
}

/// Render a token list the way tests and `--tokens` dumps show it:
/// `ID(a) ASS NUMBER(1)`. End of input is left out.
pub fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
