//! Translation pipeline
//!
//! Source text through the parser, then the tree through the C generator.

use thiserror::Error;
use tracing::debug;

use super::ast::Node;
use super::parser::{self, SyntaxError};
use crate::middle::{CGenerator, GenerationError};
use crate::util::config::CodegenConfig;
use crate::util::span::Position;

/// First error of a translation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl TranslateError {
    /// Where in the source the error points, if anywhere
    pub fn location(&self) -> Option<Position> {
        match self {
            TranslateError::Syntax(err) => Some(err.location),
            TranslateError::Generation(_) => None,
        }
    }
}

/// Source-to-C translator. Reusable across inputs.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    generator: CGenerator,
}

impl Translator {
    pub fn new(config: CodegenConfig) -> Self {
        Self {
            generator: CGenerator::with_config(config),
        }
    }

    /// Parse without generating
    pub fn parse(
        &self,
        source: &str,
    ) -> Result<Node, TranslateError> {
        Ok(parser::parse(source)?)
    }

    /// Translate a whole program to C
    pub fn translate(
        &mut self,
        source: &str,
    ) -> Result<String, TranslateError> {
        debug!("translating {} bytes", source.len());
        let tree = self.parse(source)?;
        let c_source = self.generator.generate(&tree)?;
        debug!("translation finished");
        Ok(c_source)
    }
}

/// Translate with the default configuration
pub fn translate(source: &str) -> Result<String, TranslateError> {
    Translator::default().translate(source)
}
