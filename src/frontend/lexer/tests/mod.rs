//! Lexer tests module
//!
//! - scanner: raw tokens, markers, keywords, operators
//! - indent: block-start/block-end insertion
//! - fuzz: balance property over random indentation shapes

mod indent;
