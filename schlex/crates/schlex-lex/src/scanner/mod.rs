//! Scanner module.
//!
//! - `core` - Scanner struct, the lexeme accumulator and dispatch
//! - `identifier` - Names and keywords
//! - `literal` - Number, boolean and string literals

mod core;
mod identifier;
mod literal;

pub use self::core::{Scanner, MAX_LEXEME_LENGTH};
