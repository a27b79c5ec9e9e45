//! One-character lookahead over a [`Source`].
//!
//! The cursor holds exactly one character: the next unconsumed character of
//! the input, together with its class and position. There is no pushback.
//! Once the source reports end of input the cursor stops reading from it.

use crate::class::CharClass;
use crate::error::Result;
use crate::source::Source;
use crate::span::Position;

/// A cursor pulling characters from a source one at a time.
///
/// # Example
///
/// ```
/// use schlex_lex::cursor::Cursor;
/// use schlex_lex::source::StrSource;
/// use schlex_lex::CharClass;
///
/// let mut cursor = Cursor::new(StrSource::new("a1")).unwrap();
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.bump().unwrap();
/// assert_eq!(cursor.class(), CharClass::Digit);
/// cursor.bump().unwrap();
/// assert_eq!(cursor.class(), CharClass::EndOfInput);
/// ```
#[derive(Debug)]
pub struct Cursor<S> {
    /// The character source.
    source: S,

    /// The current character, `None` at end of input.
    current: Option<char>,

    /// Class of `current`.
    class: CharClass,

    /// Position of `current`.
    position: Position,
}

impl<S: Source> Cursor<S> {
    /// Creates a cursor and reads the first character.
    ///
    /// # Errors
    ///
    /// Fails if the first read from `source` fails.
    pub fn new(mut source: S) -> Result<Self> {
        let current = source.next_char()?;
        Ok(Self {
            source,
            current,
            class: CharClass::of(current),
            position: Position::START,
        })
    }

    /// Returns the current character.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the class of the current character.
    #[inline]
    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Returns the position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns true once the source is exhausted.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the current character and reads the next one.
    ///
    /// Does nothing at end of input.
    pub fn bump(&mut self) -> Result<()> {
        if let Some(c) = self.current {
            self.position = self.position.advance(c);
            self.current = self.source.next_char()?;
            self.class = CharClass::of(self.current);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrSource;

    fn cursor(text: &str) -> Cursor<StrSource<'_>> {
        Cursor::new(StrSource::new(text)).unwrap()
    }

    #[test]
    fn test_new_cursor() {
        let cursor = cursor("(car x)");
        assert_eq!(cursor.current(), Some('('));
        assert_eq!(cursor.class(), CharClass::LParen);
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_bump() {
        let mut cursor = cursor("ab");
        cursor.bump().unwrap();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.position().column, 2);
        cursor.bump().unwrap();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.class(), CharClass::EndOfInput);
    }

    #[test]
    fn test_bump_past_end_is_noop() {
        let mut cursor = cursor("a");
        cursor.bump().unwrap();
        let at_end = cursor.position();
        cursor.bump().unwrap();
        cursor.bump().unwrap();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), at_end);
    }

    #[test]
    fn test_empty_source() {
        let cursor = cursor("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.class(), CharClass::EndOfInput);
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = cursor("a\nb");
        cursor.bump().unwrap();
        cursor.bump().unwrap();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 1);
        assert_eq!(cursor.position().offset, 2);
    }
}
