//! Code generation
//!
//! Turns the parsed tree into C source text.

pub mod codegen;

pub use codegen::{CGenerator, GenerationError};
