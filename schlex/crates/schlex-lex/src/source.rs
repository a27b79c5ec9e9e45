//! Character sources the scanner can read from.
//!
//! A [`Source`] hands out one character per call and reports end of input as
//! `Ok(None)`. The end-of-input sentinel is never a `char` value, so no input
//! character can be mistaken for it.

use std::io::BufRead;
use std::str::Chars;

use crate::error::Result;

/// A sequential character source.
pub trait Source {
    /// Reads the next character, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`](crate::ScanError::Io) if the underlying
    /// input cannot be read.
    fn next_char(&mut self) -> Result<Option<char>>;
}

impl<S: Source + ?Sized> Source for &mut S {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>> {
        (**self).next_char()
    }
}

/// An in-memory source over a string slice.
///
/// # Example
///
/// ```
/// use schlex_lex::source::{Source, StrSource};
///
/// let mut source = StrSource::new("ab");
/// assert_eq!(source.next_char().unwrap(), Some('a'));
/// assert_eq!(source.next_char().unwrap(), Some('b'));
/// assert_eq!(source.next_char().unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source that yields the characters of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Source for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// A source that pulls text from a buffered reader one line at a time.
///
/// Only the current line is held in memory. Input that is not valid UTF-8
/// is reported as an I/O failure.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    line: String,
    // Byte index of the next unread character in `line`.
    next: usize,
    exhausted: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `reader`. Nothing is read until the first call to `next_char`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            next: 0,
            exhausted: false,
        }
    }
}

impl<R: BufRead> Source for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(c) = self.line[self.next..].chars().next() {
                self.next += c.len_utf8();
                return Ok(Some(c));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.line.clear();
            self.next = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                self.exhausted = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use std::io::{self, Cursor, Read};

    fn drain(source: &mut impl Source) -> String {
        let mut out = String::new();
        while let Some(c) = source.next_char().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_str_source_empty() {
        let mut source = StrSource::new("");
        assert_eq!(source.next_char().unwrap(), None);
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_str_source_utf8() {
        let mut source = StrSource::from("λx");
        assert_eq!(drain(&mut source), "λx");
    }

    #[test]
    fn test_reader_source_multiline() {
        let text = "(define x 1)\n(car x)\n\n\"s\"";
        let mut source = ReaderSource::new(Cursor::new(text));
        assert_eq!(drain(&mut source), text);
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_reader_source_invalid_utf8() {
        let mut source = ReaderSource::new(Cursor::new(vec![b'a', b'\n', 0xff, 0xfe]));
        assert_eq!(source.next_char().unwrap(), Some('a'));
        assert_eq!(source.next_char().unwrap(), Some('\n'));
        assert!(matches!(source.next_char(), Err(ScanError::Io(_))));
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_reader_source_read_error() {
        let mut source = ReaderSource::new(io::BufReader::new(Broken));
        let err = source.next_char().unwrap_err();
        assert!(err.to_string().contains("disk on fire"));
    }

    fn take_one(mut source: impl Source) -> Option<char> {
        source.next_char().unwrap()
    }

    #[test]
    fn test_mut_ref_source() {
        let mut inner = StrSource::new("ab");
        assert_eq!(take_one(&mut inner), Some('a'));
        assert_eq!(inner.next_char().unwrap(), Some('b'));
    }
}
