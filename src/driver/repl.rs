//! Line-based REPL with rustyline
//!
//! Every line is a complete program: it gets a line break appended, goes
//! through the backend, and the result (or the error) is printed. A failing
//! line does not end the session.

use std::io::IsTerminal;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use super::{render_error, Backend};
use crate::util::config::ReplConfig;
use crate::util::span::SourceFile;

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplStep {
    /// Print to stdout
    Output(String),
    /// Print to stderr; the session continues
    Error(String),
    /// End the session
    Quit,
}

/// Session state independent of the terminal
pub struct ReplSession<B> {
    backend: B,
    quit_command: String,
    use_colors: bool,
}

impl<B: Backend> ReplSession<B> {
    pub fn new(
        backend: B,
        quit_command: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            quit_command: quit_command.into(),
            use_colors: false,
        }
    }

    /// Color error snippets
    pub fn with_colors(
        mut self,
        use_colors: bool,
    ) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn greeting(&self) -> String {
        format!(
            "\n      You have entered the interactive mode!\n      \
             You can type any one-liner at the prompt and I will print {}.\n      \
             If you want to terminate the session, just type \"{}\"\n",
            self.backend.describe(),
            self.quit_command
        )
    }

    /// Handle one line as typed, without its line break
    pub fn step(
        &mut self,
        line: &str,
    ) -> ReplStep {
        if line.trim() == self.quit_command {
            return ReplStep::Quit;
        }

        let mut source = line.to_string();
        source.push('\n');
        match self.backend.eval(&source) {
            Ok(text) => ReplStep::Output(text),
            Err(err) => {
                debug!("line discarded: {err:#}");
                let file = SourceFile::new("<stdin>", source);
                ReplStep::Error(render_error(&err, &file, self.use_colors))
            }
        }
    }
}

/// Interactive terminal session
pub struct LineRepl<B> {
    config: ReplConfig,
    editor: DefaultEditor,
    session: ReplSession<B>,
}

impl<B: Backend> LineRepl<B> {
    pub fn new(
        backend: B,
        config: ReplConfig,
    ) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        let session = ReplSession::new(backend, config.quit_command.clone())
            .with_colors(std::io::stderr().is_terminal());

        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run until the quit command, Ctrl-D or Ctrl-C
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.session.greeting());

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    match self.session.step(&line) {
                        ReplStep::Output(text) => println!("{}", text.trim_end()),
                        ReplStep::Error(report) => eprint!("{report}"),
                        ReplStep::Quit => {
                            println!("\nbye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
                Err(e) => return Err(e.into()),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }
}
