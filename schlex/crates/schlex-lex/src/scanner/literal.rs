//! Literal lexing: numbers, booleans and strings.

use crate::class::CharClass;
use crate::error::{Result, ScanError};
use crate::source::Source;
use crate::token::TokenKind;

use super::Scanner;

impl<S: Source> Scanner<S> {
    /// Lexes a maximal run of decimal digits.
    ///
    /// There are no signs, decimal points or exponents.
    pub(super) fn lex_number(&mut self) -> Result<TokenKind> {
        while self.cursor.class() == CharClass::Digit {
            self.take()?;
        }
        Ok(TokenKind::NumLiteral)
    }

    /// Lexes `#t` or `#f`.
    pub(super) fn lex_boolean(&mut self) -> Result<TokenKind> {
        self.take()?;
        match self.cursor.current() {
            Some('t') | Some('f') => {
                self.take()?;
                Ok(TokenKind::BoolLiteral)
            }
            found => Err(ScanError::InvalidBoolean {
                found,
                span: self.span(),
            }),
        }
    }

    /// Lexes a string literal, keeping both quote characters in the lexeme.
    ///
    /// Strings have no escapes; the first `"` after the opening one ends the
    /// literal. Newlines may appear inside.
    pub(super) fn lex_string(&mut self) -> Result<TokenKind> {
        self.take()?;
        loop {
            match self.cursor.class() {
                CharClass::StringQuote => {
                    self.take()?;
                    return Ok(TokenKind::StrLiteral);
                }
                CharClass::EndOfInput => {
                    return Err(ScanError::UnterminatedString { span: self.span() });
                }
                _ => self.take()?,
            }
        }
    }
}
