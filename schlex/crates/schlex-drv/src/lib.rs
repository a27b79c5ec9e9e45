//! schlex-drv - Scanner Driver
//!
//! Opens a source file, runs the scanner over it and prints every token.
//! The binary in `main.rs` adds argument parsing and logging on top of
//! [`run`].

pub mod config;
pub mod error;
pub mod output;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use schlex_lex::{ReaderSource, Scanner};

pub use config::{Config, OutputConfig, OutputFormat, ScannerConfig};
pub use error::{DriverError, Result};
pub use output::TokenWriter;

/// How a run ended, short of an error.
#[derive(Debug)]
pub enum Outcome {
    /// The whole file was scanned.
    Completed {
        /// Tokens printed, end of input excluded.
        tokens: usize,
    },
    /// The input file could not be opened. Nothing was scanned.
    Unopened {
        /// The path that was given.
        path: PathBuf,
        /// Why opening failed.
        error: io::Error,
    },
}

/// Scans the file at `path` and writes its tokens to `out`.
///
/// Failing to open the file is not an error: it is reported as
/// [`Outcome::Unopened`] so the caller can tell the user and exit cleanly.
/// Anything that goes wrong once scanning has started is an error.
pub fn run(path: &Path, config: &Config, out: impl Write) -> Result<Outcome> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            debug!(path = %path.display(), %error, "could not open input");
            return Ok(Outcome::Unopened {
                path: path.to_path_buf(),
                error,
            });
        }
    };

    let source = ReaderSource::new(BufReader::new(file));
    let mut scanner =
        Scanner::with_max_lexeme_length(source, config.scanner.max_lexeme_length)?;
    debug!(
        path = %path.display(),
        max_lexeme_length = scanner.max_lexeme_length(),
        "scanning"
    );
    let mut writer = TokenWriter::new(out, config.output.format);

    loop {
        let token = match scanner.next_token() {
            Ok(token) => token,
            Err(error) => {
                let at = error
                    .span()
                    .map_or_else(|| scanner.position().to_string(), |span| span.to_string());
                debug!(path = %path.display(), %at, category = ?error.category(), "scan failed");
                return Err(error.into());
            }
        };
        if token.is_eof() {
            writer.finish(&token)?;
            break;
        }
        writer.write_token(&token)?;
    }

    info!(
        path = %path.display(),
        tokens = writer.written(),
        lines = scanner.position().line,
        "scan complete"
    );
    Ok(Outcome::Completed {
        tokens: writer.written(),
    })
}
