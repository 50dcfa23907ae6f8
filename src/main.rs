//! pytoc - translate the toy language to C

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pytoc::driver::{run_batch, LineRepl, TranslateBackend};
use pytoc::util::config::load_config;
use pytoc::util::logger::{init_with_level, LogLevel};
use pytoc::VERSION;

/// Translate a Python-like toy language into C
#[derive(Parser, Debug)]
#[command(name = "pytoc")]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    /// Accept input from this file (interactive mode if absent)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write the converted code to this file (stdout if absent)
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    let mut backend = TranslateBackend::new(&config);

    match args.file {
        Some(file) => run_batch(&mut backend, &file, args.outfile.as_deref()),
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
