//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text that produced
//! it. Quoted forms keep their delimiters: the lexeme of `"abc"` is `"abc"`
//! with both quote characters.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::span::Span;

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `'`, the shorthand quote form
    Quote,
    /// `#t` or `#f`
    BoolLiteral,
    /// A maximal run of decimal digits
    NumLiteral,
    /// A double-quoted string, delimiters included
    StrLiteral,
    /// Any identifier that is not a keyword
    Name,
    /// `lambda`
    LambdaKw,
    /// `define`
    DefineKw,
    /// `quote`
    QuoteKw,
    /// `car`
    CarKw,
    /// `cdr`
    CdrKw,
    /// `cons`
    ConsKw,
    /// `add1`
    Add1Kw,
    /// `sub1`
    Sub1Kw,
    /// End of input
    EndOfInput,
}

impl TokenKind {
    /// The name used when printing tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Quote => "QUOTE",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::NumLiteral => "NUM_LITERAL",
            TokenKind::StrLiteral => "STR_LITERAL",
            TokenKind::Name => "NAME",
            TokenKind::LambdaKw => "LAMBDA_KW",
            TokenKind::DefineKw => "DEFINE_KW",
            TokenKind::QuoteKw => "QUOTE_KW",
            TokenKind::CarKw => "CAR_KW",
            TokenKind::CdrKw => "CDR_KW",
            TokenKind::ConsKw => "CONS_KW",
            TokenKind::Add1Kw => "ADD1_KW",
            TokenKind::Sub1Kw => "SUB1_KW",
            TokenKind::EndOfInput => "EOF",
        }
    }

    /// Returns true if this kind is one of the reserved keywords.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::LambdaKw
                | TokenKind::DefineKw
                | TokenKind::QuoteKw
                | TokenKind::CarKw
                | TokenKind::CdrKw
                | TokenKind::ConsKw
                | TokenKind::Add1Kw
                | TokenKind::Sub1Kw
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Looks up the keyword for `ident`, if it is one.
///
/// # Example
///
/// ```
/// use schlex_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("lambda"), Some(TokenKind::LambdaKw));
/// assert_eq!(keyword_from_ident("Lambda"), None);
/// assert_eq!(keyword_from_ident("foo"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "lambda" => TokenKind::LambdaKw,
        "define" => TokenKind::DefineKw,
        "quote" => TokenKind::QuoteKw,
        "car" => TokenKind::CarKw,
        "cdr" => TokenKind::CdrKw,
        "cons" => TokenKind::ConsKw,
        "add1" => TokenKind::Add1Kw,
        "sub1" => TokenKind::Sub1Kw,
        _ => return None,
    };
    Some(kind)
}

/// One classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The exact source text; empty for end of input.
    pub lexeme: String,
    /// Where the lexeme appeared.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_keyword_table() {
        let table = [
            ("lambda", TokenKind::LambdaKw),
            ("define", TokenKind::DefineKw),
            ("quote", TokenKind::QuoteKw),
            ("car", TokenKind::CarKw),
            ("cdr", TokenKind::CdrKw),
            ("cons", TokenKind::ConsKw),
            ("add1", TokenKind::Add1Kw),
            ("sub1", TokenKind::Sub1Kw),
        ];
        for (text, kind) in table {
            assert_eq!(keyword_from_ident(text), Some(kind), "{text}");
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_non_keywords() {
        for text in ["foo", "x1", "cadr", "LAMBDA", "add", "sub2", "", "quotes"] {
            assert_eq!(keyword_from_ident(text), None, "{text}");
        }
    }

    #[test]
    fn test_only_keywords_are_keywords() {
        for kind in [
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Quote,
            TokenKind::BoolLiteral,
            TokenKind::NumLiteral,
            TokenKind::StrLiteral,
            TokenKind::Name,
            TokenKind::EndOfInput,
        ] {
            assert!(!kind.is_keyword(), "{kind}");
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
        assert_eq!(TokenKind::BoolLiteral.to_string(), "BOOL_LITERAL");
        assert_eq!(TokenKind::Add1Kw.to_string(), "ADD1_KW");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::NumLiteral, "42", Span::point(Position::START));
        assert_eq!(token.to_string(), "NUM_LITERAL: 42");

        let eof = Token::new(TokenKind::EndOfInput, "", Span::point(Position::START));
        assert_eq!(eof.to_string(), "EOF: ");
        assert!(eof.is_eof());
    }
}
