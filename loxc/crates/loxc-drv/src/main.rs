//! loxc - scan Lox source into tokens.
//!
//! With a script path, scans the file and exits with 65 if it contained
//! lexical errors. Without one, starts an interactive prompt.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use loxc_drv::{init_logging, Config, DriverError, OutputFormat, Session};
use loxc_drv::{EXIT_DATA_ERROR, EXIT_FAILURE};

/// Scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Lox script to scan; starts an interactive prompt when omitted
    script: Option<PathBuf>,

    /// Token output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "LOXC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "LOXC_NO_COLOR")]
    no_color: bool,

    /// Prompt shown by the interactive session
    #[arg(long)]
    prompt: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<DriverError>()
                .map_or(EXIT_FAILURE, DriverError::exit_code);
            ExitCode::from(code)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli)?;

    init_logging(config.verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    let mut session = Session::new(config, io::stdout().lock());

    match cli.script {
        Some(path) => run_script(&mut session, &path),
        None => {
            session.run_prompt(io::stdin().lock())?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Loads the config file, then applies command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if cli.verbose {
        config.verbose = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(prompt) = &cli.prompt {
        config.repl.prompt = prompt.clone();
    }

    Ok(config)
}

fn run_script<W: io::Write>(session: &mut Session<W>, path: &Path) -> anyhow::Result<ExitCode> {
    let outcome = session.run_file(path)?;

    if outcome.has_errors() {
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
