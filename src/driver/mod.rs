//! Command-line drivers shared by `pytoc` and `pyparse`
//!
//! A [`Backend`] turns one program into printable text. Batch mode runs it
//! over a file; the REPL runs it over each line typed.

pub mod repl;

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::frontend::ast::PrintVisitor;
use crate::frontend::lexer::{dump, tokenize};
use crate::frontend::{TranslateError, Translator};
use crate::util::config::Config;
use crate::util::diagnostic::{Diagnostic, DiagnosticRenderer, EmitterConfig};
use crate::util::span::SourceFile;

pub use repl::{LineRepl, ReplSession, ReplStep};

/// What a front end does with a program
pub trait Backend {
    /// Process one complete program
    fn eval(
        &mut self,
        source: &str,
    ) -> Result<String>;

    /// What the output is, for the REPL greeting
    fn describe(&self) -> &'static str;
}

/// Translate to C
#[derive(Debug, Clone, Default)]
pub struct TranslateBackend {
    translator: Translator,
}

impl TranslateBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            translator: Translator::new(config.codegen.clone()),
        }
    }
}

impl Backend for TranslateBackend {
    fn eval(
        &mut self,
        source: &str,
    ) -> Result<String> {
        Ok(self.translator.translate(source)?)
    }

    fn describe(&self) -> &'static str {
        "the C translation"
    }
}

/// Print the syntax tree, optionally preceded by the token stream
#[derive(Debug, Clone)]
pub struct ParseBackend {
    translator: Translator,
    indent: String,
    show_tokens: bool,
}

impl ParseBackend {
    pub fn new(
        config: &Config,
        show_tokens: bool,
    ) -> Self {
        Self {
            translator: Translator::new(config.codegen.clone()),
            indent: config.codegen.indent.clone(),
            show_tokens,
        }
    }
}

impl Backend for ParseBackend {
    fn eval(
        &mut self,
        source: &str,
    ) -> Result<String> {
        let tree = self.translator.parse(source)?;

        let mut out = String::new();
        if self.show_tokens {
            out.push_str(&dump(&tokenize(source)));
            out.push('\n');
        }
        let mut printer = PrintVisitor::new(Vec::new(), self.indent.as_str());
        tree.accept(&mut printer, ())?;
        out.push_str(&String::from_utf8(printer.into_inner())?);
        Ok(out)
    }

    fn describe(&self) -> &'static str {
        "the syntax tree"
    }
}

/// Run a backend over a file, writing to `output` or stdout.
///
/// A failing program is reported on stderr with a source snippet.
pub fn run_batch(
    backend: &mut dyn Backend,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let file = SourceFile::new(input.display().to_string(), content);
    info!("processing {}", file.name);

    let text = match backend.eval(&file.content) {
        Ok(text) => text,
        Err(err) => {
            eprint!("{}", render_error(&err, &file, std::io::stderr().is_terminal()));
            return Err(anyhow!("could not process {}", input.display()));
        }
    };

    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Error report for the terminal: located translation errors get a snippet
pub fn render_error(
    err: &anyhow::Error,
    file: &SourceFile,
    use_colors: bool,
) -> String {
    let diagnostic = match err.downcast_ref::<TranslateError>() {
        Some(TranslateError::Syntax(syntax)) => Diagnostic::error(format!(
            "expected {}, found {}",
            syntax.expected, syntax.found
        ))
        .at(syntax.location),
        Some(other) => Diagnostic::error(other.to_string()),
        None => Diagnostic::error(format!("{err:#}")),
    };

    DiagnosticRenderer::with_config(EmitterConfig {
        use_colors,
        show_source: true,
    })
    .render(&diagnostic, Some(file))
}
