//! schlex - print the tokens of an S-expression source file.
//!
//! ```text
//! schlex [OPTIONS] <FILE>
//! ```

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use schlex_drv::{run, Config, OutputFormat, Outcome};

/// Tokenize an S-expression source file
#[derive(Parser, Debug)]
#[command(name = "schlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of an S-expression source file", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "SCHLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "SCHLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum number of characters in one lexeme
    #[arg(long, value_parser = clap::value_parser!(usize))]
    max_lexeme_length: Option<usize>,

    /// Disable color in log output
    #[arg(long, env = "SCHLEX_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Runs the scanner according to the parsed arguments.
fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(limit) = cli.max_lexeme_length {
        config.scanner.max_lexeme_length = limit;
    }
    config.validate()?;

    let stdout = io::stdout();
    let outcome = run(&cli.file, &config, stdout.lock())
        .with_context(|| format!("failed to scan {}", cli.file.display()))?;

    if let Outcome::Unopened { path, error } = outcome {
        if error.kind() == ErrorKind::NotFound {
            println!("File not found: {}", path.display());
        } else {
            println!("Cannot open file: {}: {}", path.display(), error);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    config.context("failed to load configuration")
}
