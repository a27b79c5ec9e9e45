//! Edge case tests for schlex-lex
