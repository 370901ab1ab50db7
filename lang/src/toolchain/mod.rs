//! Tools that turn C source text into tokens and report on what they find.

pub mod diagnostics;
pub mod lexer;
pub mod source;
