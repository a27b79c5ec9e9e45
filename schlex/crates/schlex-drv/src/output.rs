//! Token printing.

use std::io::Write;

use schlex_lex::Token;

use crate::config::OutputFormat;
use crate::error::Result;

/// Writes tokens to an output stream in the configured format.
pub struct TokenWriter<W> {
    out: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> TokenWriter<W> {
    /// Creates a writer.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Writes one token. The end-of-input token goes through
    /// [`finish`](TokenWriter::finish) instead.
    pub fn write_token(&mut self, token: &Token) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, token)?;
                writeln!(self.out)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Writes the closing line for the end-of-input token and flushes.
    pub fn finish(&mut self, eof: &Token) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "EOF reached")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, eof)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Number of tokens written, end of input excluded.
    pub fn written(&self) -> usize {
        self.written
    }
}
