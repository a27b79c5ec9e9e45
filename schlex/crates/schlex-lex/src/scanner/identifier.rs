//! Name and keyword lexing.

use crate::error::Result;
use crate::source::Source;
use crate::token::{keyword_from_ident, TokenKind};

use super::Scanner;

impl<S: Source> Scanner<S> {
    /// Lexes a name or keyword.
    ///
    /// A name starts with a letter or any character without a class of its
    /// own, and continues through letters, digits and such characters. The
    /// finished text is then checked against the keyword table.
    pub(super) fn lex_identifier(&mut self) -> Result<TokenKind> {
        self.take()?;
        while self.cursor.class().is_identifier_continue() {
            self.take()?;
        }
        Ok(keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Name))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Scanner;

    fn lex_one(source: &str) -> (TokenKind, String) {
        let token = Scanner::from_str(source).unwrap().next_token().unwrap();
        (token.kind, token.lexeme)
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(lex_one("foo"), (TokenKind::Name, "foo".to_string()));
    }

    #[test]
    fn test_name_with_digits() {
        assert_eq!(lex_one("x1"), (TokenKind::Name, "x1".to_string()));
    }

    #[test]
    fn test_symbolic_names() {
        for text in ["+", "list->vector", "null?", "set!", "*", "<=", "a.b"] {
            assert_eq!(lex_one(text), (TokenKind::Name, text.to_string()));
        }
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_one("lambda").0, TokenKind::LambdaKw);
        assert_eq!(lex_one("define").0, TokenKind::DefineKw);
        assert_eq!(lex_one("quote").0, TokenKind::QuoteKw);
        assert_eq!(lex_one("car").0, TokenKind::CarKw);
        assert_eq!(lex_one("cdr").0, TokenKind::CdrKw);
        assert_eq!(lex_one("cons").0, TokenKind::ConsKw);
        assert_eq!(lex_one("add1").0, TokenKind::Add1Kw);
        assert_eq!(lex_one("sub1").0, TokenKind::Sub1Kw);
    }

    #[test]
    fn test_keyword_prefix_is_name() {
        assert_eq!(lex_one("lambdas").0, TokenKind::Name);
        assert_eq!(lex_one("car1").0, TokenKind::Name);
        assert_eq!(lex_one("add1!").0, TokenKind::Name);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_one("Lambda").0, TokenKind::Name);
        assert_eq!(lex_one("CAR").0, TokenKind::Name);
    }

    #[test]
    fn test_name_stops_at_delimiters() {
        for (text, name) in [
            ("foo(", "foo"),
            ("foo)", "foo"),
            ("foo'", "foo"),
            ("foo\"", "foo"),
            ("foo#t", "foo"),
            ("foo bar", "foo"),
        ] {
            assert_eq!(lex_one(text).1, name, "{text}");
        }
    }

    #[test]
    fn test_unicode_name() {
        assert_eq!(lex_one("λx"), (TokenKind::Name, "λx".to_string()));
    }
}
