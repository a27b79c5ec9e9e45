//! Scanner error types.

use thiserror::Error;

use crate::span::Span;

/// Errors that end a scan step.
///
/// None of these are recovered from: once `next_token` fails, the scanner
/// only reports end of input.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The character source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `#` was followed by something other than `t` or `f`.
    #[error("invalid boolean literal at {span}: expected `#t` or `#f`, found {}", describe(.found))]
    InvalidBoolean {
        /// The character after `#`, `None` at end of input.
        found: Option<char>,
        /// Location of the partial literal.
        span: Span,
    },

    /// End of input was reached inside a string literal.
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString {
        /// Location of the partial literal.
        span: Span,
    },

    /// A lexeme grew past the configured maximum length.
    #[error("lexeme at {span} exceeds maximum length of {limit} characters")]
    LexemeTooLong {
        /// The maximum number of characters in one lexeme.
        limit: usize,
        /// Location of the partial lexeme.
        span: Span,
    },
}

/// Broad category of a [`ScanError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The underlying source was unreadable.
    Io,
    /// Malformed boolean or string literal.
    Lexical,
    /// Lexeme exceeded the maximum length.
    Overflow,
}

impl ScanError {
    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::Io(_) => ErrorCategory::Io,
            ScanError::InvalidBoolean { .. } | ScanError::UnterminatedString { .. } => {
                ErrorCategory::Lexical
            }
            ScanError::LexemeTooLong { .. } => ErrorCategory::Overflow,
        }
    }

    /// Location of the offending lexeme, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ScanError::Io(_) => None,
            ScanError::InvalidBoolean { span, .. }
            | ScanError::UnterminatedString { span }
            | ScanError::LexemeTooLong { span, .. } => Some(*span),
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_invalid_boolean_display() {
        let err = ScanError::InvalidBoolean {
            found: Some('x'),
            span: Span::point(Position::START),
        };
        assert_eq!(
            err.to_string(),
            "invalid boolean literal at line 1, column 1: expected `#t` or `#f`, found 'x'"
        );
        assert_eq!(err.category(), ErrorCategory::Lexical);
    }

    #[test]
    fn test_invalid_boolean_at_end_display() {
        let err = ScanError::InvalidBoolean {
            found: None,
            span: Span::point(Position::START),
        };
        assert!(err.to_string().ends_with("found end of input"));
    }

    #[test]
    fn test_unterminated_string_display() {
        let err = ScanError::UnterminatedString {
            span: Span::point(Position::START),
        };
        assert_eq!(
            err.to_string(),
            "unterminated string literal starting at line 1, column 1"
        );
        assert_eq!(err.category(), ErrorCategory::Lexical);
    }

    #[test]
    fn test_overflow_display() {
        let err = ScanError::LexemeTooLong {
            limit: 60,
            span: Span::point(Position::START),
        };
        assert!(err.to_string().contains("maximum length of 60"));
        assert_eq!(err.category(), ErrorCategory::Overflow);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScanError = io_err.into();
        assert!(matches!(err, ScanError::Io(_)));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.span().is_none());
    }
}
