//! Core scanner implementation.
//!
//! The scanner keeps one invariant between calls: the cursor points at the
//! first character not yet consumed by any lexeme. Every lexing routine
//! consumes exactly the characters of its lexeme and leaves the cursor on
//! the character after it, so the next call starts by looking at whitespace
//! or the first character of the next lexeme.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::class::CharClass;
use crate::cursor::Cursor;
use crate::error::{Result, ScanError};
use crate::source::{ReaderSource, Source, StrSource};
use crate::span::{Position, Span};
use crate::token::{Token, TokenKind};

/// Default maximum number of characters in a single lexeme.
pub const MAX_LEXEME_LENGTH: usize = 60;

/// Scanner for the S-expression language.
///
/// Produces one [`Token`] per call to [`next_token`](Scanner::next_token),
/// reading characters lazily from its source.
///
/// # Example
///
/// ```
/// use schlex_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::from_str("(car xs)").unwrap();
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::LParen);
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::CarKw);
/// let name = scanner.next_token().unwrap();
/// assert_eq!((name.kind, name.lexeme.as_str()), (TokenKind::Name, "xs"));
/// ```
#[derive(Debug)]
pub struct Scanner<S> {
    /// One-character lookahead over the source.
    pub(super) cursor: Cursor<S>,

    /// Text of the lexeme being scanned.
    lexeme: String,

    /// Number of characters in `lexeme`.
    lexeme_chars: usize,

    /// Upper bound on `lexeme_chars`.
    max_lexeme_length: usize,

    /// Position of the first character of the current lexeme.
    token_start: Position,

    /// Set once a scan step has failed.
    failed: bool,
}

impl<S: Source> Scanner<S> {
    /// Binds a scanner to `source` and reads the first character.
    ///
    /// # Errors
    ///
    /// Fails with [`ScanError::Io`] if the source cannot be read.
    pub fn new(source: S) -> Result<Self> {
        Self::with_max_lexeme_length(source, MAX_LEXEME_LENGTH)
    }

    /// Like [`new`](Scanner::new), with a custom lexeme length limit.
    pub fn with_max_lexeme_length(source: S, max_lexeme_length: usize) -> Result<Self> {
        let cursor = Cursor::new(source)?;
        debug!(max_lexeme_length, "scanner bound to source");
        Ok(Self {
            cursor,
            lexeme: String::with_capacity(max_lexeme_length.min(MAX_LEXEME_LENGTH)),
            lexeme_chars: 0,
            max_lexeme_length,
            token_start: Position::START,
            failed: false,
        })
    }

    /// Returns the next token.
    ///
    /// Leading whitespace is skipped. At end of input an
    /// [`EndOfInput`](TokenKind::EndOfInput) token with an empty lexeme is
    /// returned, and keeps being returned on every later call.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidBoolean`] when `#` is not followed by `t` or `f`
    /// - [`ScanError::UnterminatedString`] when input ends inside a string
    /// - [`ScanError::LexemeTooLong`] when a lexeme exceeds the length limit
    /// - [`ScanError::Io`] when the source fails
    ///
    /// An error ends the scan. Every later call returns an end-of-input
    /// token at the position where scanning stopped, without reading from
    /// the source again.
    pub fn next_token(&mut self) -> Result<Token> {
        if self.failed {
            return Ok(Token::new(
                TokenKind::EndOfInput,
                "",
                Span::point(self.cursor.position()),
            ));
        }
        let result = self.scan_token();
        if let Err(e) = &result {
            debug!(error = %e, "scan stopped");
            self.failed = true;
        }
        result
    }

    fn scan_token(&mut self) -> Result<Token> {
        self.lexeme.clear();
        self.lexeme_chars = 0;

        let kind = loop {
            self.token_start = self.cursor.position();
            match self.cursor.class() {
                CharClass::Whitespace => self.cursor.bump()?,
                CharClass::Digit => break self.lex_number()?,
                CharClass::LParen => {
                    self.take()?;
                    break TokenKind::LParen;
                }
                CharClass::RParen => {
                    self.take()?;
                    break TokenKind::RParen;
                }
                CharClass::Quote => {
                    self.take()?;
                    break TokenKind::Quote;
                }
                CharClass::Hash => break self.lex_boolean()?,
                CharClass::StringQuote => break self.lex_string()?,
                CharClass::Letter | CharClass::OtherPrintable => break self.lex_identifier()?,
                CharClass::EndOfInput => {
                    debug!(offset = self.token_start.offset, "reached end of input");
                    break TokenKind::EndOfInput;
                }
            }
        };

        let token = Token::new(kind, self.lexeme.as_str(), self.span());
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.span.line, "token");
        Ok(token)
    }

    /// Returns the configured lexeme length limit.
    pub fn max_lexeme_length(&self) -> usize {
        self.max_lexeme_length
    }

    /// Returns the position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Appends the current character to the lexeme and advances past it.
    pub(super) fn take(&mut self) -> Result<()> {
        if let Some(c) = self.cursor.current() {
            self.push(c)?;
        }
        self.cursor.bump()
    }

    /// Appends `c` to the lexeme, enforcing the length limit.
    fn push(&mut self, c: char) -> Result<()> {
        if self.lexeme_chars >= self.max_lexeme_length {
            return Err(ScanError::LexemeTooLong {
                limit: self.max_lexeme_length,
                span: self.span(),
            });
        }
        self.lexeme.push(c);
        self.lexeme_chars += 1;
        Ok(())
    }

    /// The lexeme accumulated so far.
    pub(super) fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Span from the start of the current lexeme to the cursor.
    pub(super) fn span(&self) -> Span {
        Span::between(self.token_start, self.cursor.position())
    }
}

impl<'a> Scanner<StrSource<'a>> {
    /// Creates a scanner over an in-memory string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Result<Self> {
        Self::new(StrSource::new(text))
    }
}

impl<R: BufRead> Scanner<ReaderSource<R>> {
    /// Creates a scanner reading lazily from a buffered reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        Self::new(ReaderSource::new(reader))
    }
}

impl<S: Source> Iterator for Scanner<S> {
    type Item = Result<Token>;

    /// Yields tokens up to, not including, end of input.
    ///
    /// The first error is yielded once and ends iteration.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}

impl<S: Source> std::iter::FusedIterator for Scanner<S> {}
