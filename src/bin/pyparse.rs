//! pyparse - print the syntax tree of a toy-language program

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pytoc::driver::{run_batch, LineRepl, ParseBackend};
use pytoc::util::config::load_config;
use pytoc::util::logger::{init_with_level, LogLevel};
use pytoc::VERSION;

/// Parse a Python-like toy language and print its syntax tree
#[derive(Parser, Debug)]
#[command(name = "pyparse")]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    /// Accept input from this file (interactive mode if absent)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream before the tree
    #[arg(short, long)]
    tokens: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    let mut backend = ParseBackend::new(&config, args.tokens);

    match args.file {
        Some(file) => run_batch(&mut backend, &file, None),
        None => LineRepl::new(backend, config.repl)?.run(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_with_level(LogLevel::from_verbose(args.verbose));
    tracing::info!("enabled verbose logging");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
