//! Source locations for tokens and diagnostics.
//!
//! A [`Position`] names a single character of the input; a [`Span`] covers
//! the text of one lexeme. Offsets are byte offsets into the input, lines and
//! columns are 1-based and counted in characters.

use std::fmt;

use serde::Serialize;

/// The location of a single character in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Returns the position of the character following `c`, assuming `c`
    /// sits at `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use schlex_lex::span::Position;
    ///
    /// let next = Position::START.advance('\n');
    /// assert_eq!((next.offset, next.line, next.column), (1, 2, 1));
    /// ```
    #[inline]
    pub fn advance(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        if c == '\n' {
            Self {
                offset,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The region of input covered by one lexeme.
///
/// `line` and `column` locate the first character; `start..end` is the byte
/// range. An empty span (`start == end`) marks end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Creates a span running from `start` up to (not including) `end`.
    #[inline]
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            line: start.line,
            column: start.column,
        }
    }

    /// Creates an empty span at a single point.
    #[inline]
    pub fn point(at: Position) -> Self {
        Self::between(at, at)
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-width span.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_columns() {
        let p = Position::START.advance('a').advance('b');
        assert_eq!(p.offset, 2);
        assert_eq!(p.line, 1);
        assert_eq!(p.column, 3);
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let p = Position::START.advance('a').advance('\n');
        assert_eq!(p.line, 2);
        assert_eq!(p.column, 1);
    }

    #[test]
    fn test_advance_multibyte() {
        let p = Position::START.advance('λ');
        assert_eq!(p.offset, 2);
        assert_eq!(p.column, 2);
    }

    #[test]
    fn test_span_between() {
        let start = Position::START.advance(' ');
        let end = start.advance('x').advance('y');
        let span = Span::between(start, end);
        assert_eq!(span.start, 1);
        assert_eq!(span.end, 3);
        assert_eq!(span.len(), 2);
        assert_eq!(span.column, 2);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_point_is_empty() {
        assert!(Span::point(Position::START).is_empty());
    }

    #[test]
    fn test_display() {
        let span = Span::point(Position::START);
        assert_eq!(span.to_string(), "line 1, column 1");
    }
}
