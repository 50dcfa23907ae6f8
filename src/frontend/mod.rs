//! Frontend
//!
//! Lexer, parser and syntax tree, plus the pipeline that hands the tree
//! to the C generator.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod pipeline;

pub use pipeline::{translate, TranslateError, Translator};
