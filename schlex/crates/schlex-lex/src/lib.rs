//! schlex-lex - Lexical Analyzer for a small S-expression language
//!
//! This crate turns a character stream into a stream of classified tokens
//! for a Scheme-like language: parenthesized lists, the shorthand quote,
//! `#t`/`#f`, digit runs, double-quoted strings, names, and the keywords
//! `lambda`, `define`, `quote`, `car`, `cdr`, `cons`, `add1` and `sub1`.
//!
//! # Example Usage
//!
//! ```
//! use schlex_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_str("(add1 41)").unwrap();
//!
//! // Get tokens one at a time
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::LParen);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Add1Kw);
//!
//! // Or iterate over the rest
//! for token in &mut scanner {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Character sources (strings, buffered readers)
//! - [`cursor`] - One-character lookahead over a source
//! - [`class`] - Character classification
//! - [`token`] - Token kinds and the keyword table
//! - [`scanner`] - The scan loop
//! - [`span`] - Positions for tokens and errors
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! | Kind           | Example          |
//! |----------------|------------------|
//! | `LParen`       | `(`              |
//! | `RParen`       | `)`              |
//! | `Quote`        | `'`              |
//! | `BoolLiteral`  | `#t`, `#f`       |
//! | `NumLiteral`   | `42`             |
//! | `StrLiteral`   | `"hi"`           |
//! | `Name`         | `x`, `null?`     |
//! | keywords       | `lambda`, `car`  |
//! | `EndOfInput`   |                  |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod class;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod source;
pub mod span;
pub mod token;

mod edge_cases;

pub use class::CharClass;
pub use error::{ErrorCategory, Result, ScanError};
pub use scanner::{Scanner, MAX_LEXEME_LENGTH};
pub use source::{ReaderSource, Source, StrSource};
pub use span::{Position, Span};
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans all of `text`, returning every token including the final
/// end-of-input token.
///
/// # Errors
///
/// Returns the first error the scanner hits.
///
/// # Example
///
/// ```
/// use schlex_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("'x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Quote, TokenKind::Name, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::from_str(text)?;
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
