//! pytoc
//!
//! Translates a small indentation-sensitive, Python-like language into C.
//!
//! # Example
//!
//! ```python
//! n = int(input())
//! for i in range(n):
//!     print("line", i)
//! ```
//!
//! ```no_run
//! use pytoc::{translate, Result};
//!
//! fn main() -> Result<()> {
//!     let c_source = translate("x = 5\nprint(x)\n")?;
//!     println!("{c_source}");
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod driver;
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::{TranslateError, Translator};
pub use middle::{CGenerator, GenerationError};

use std::fs;
use std::path::Path;

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Translate source text to C with the default configuration
pub fn translate(source: &str) -> Result<String> {
    debug!("translate called");
    Ok(frontend::translate(source)?)
}

/// Translate a file to C with the default configuration
pub fn translate_file(path: &Path) -> Result<String> {
    debug!("translating file {}", path.display());
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    translate(&source)
}
