//! Error rendering for the command line
//!
//! ```text
//! error: expected `)`, found LF
//!  --> prog.py:1:7
//!    |
//!  1 | x = (1
//!    |       ^
//! ```

use owo_colors::OwoColorize;

use crate::util::span::{Position, SourceFile};

/// One reportable problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Where it points; `None` for errors without a source position
    pub location: Option<Position>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    pub fn at(
        mut self,
        location: Position,
    ) -> Self {
        self.location = Some(location);
        self
    }
}

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Whether to emit ANSI colors
    pub use_colors: bool,
    /// Whether to show the offending source line
    pub show_source: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
        }
    }
}

/// Diagnostic renderer
#[derive(Debug, Clone, Default)]
pub struct DiagnosticRenderer {
    config: EmitterConfig,
}

impl DiagnosticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Header, location and, when the line exists, a snippet with a caret
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> String {
        let mut output = format!("{}: {}\n", self.paint_error("error"), diagnostic.message);

        let Some(location) = diagnostic.location.filter(|l| !l.is_dummy()) else {
            return output;
        };
        let file_name = source_file.map_or("<unknown>", |sf| sf.name.as_str());
        output.push_str(&format!(
            " {} {}:{}:{}\n",
            self.paint_gutter("-->"),
            file_name,
            location.line,
            location.column
        ));

        if !self.config.show_source {
            return output;
        }
        let Some(line) = source_file.and_then(|sf| sf.line_text(location.line)) else {
            return output;
        };

        let number = location.line.to_string();
        let blank = " ".repeat(number.len());
        let bar = self.paint_gutter("|");
        output.push_str(&format!("{blank} {bar}\n"));
        output.push_str(&format!("{} {bar} {line}\n", self.paint_gutter(&number)));
        output.push_str(&format!(
            "{blank} {bar} {}{}\n",
            " ".repeat(location.column.saturating_sub(1)),
            self.paint_error("^")
        ));
        output
    }

    fn paint_error(
        &self,
        text: &str,
    ) -> String {
        if self.config.use_colors {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_gutter(
        &self,
        text: &str,
    ) -> String {
        if self.config.use_colors {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
