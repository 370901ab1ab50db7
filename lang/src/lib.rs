//! Lexical analysis toolchain for C-family source text.
//!
//! clex turns raw source text into a linear sequence of classified tokens, the first stage of a
//! compiler front end. The [toolchain::lexer] module holds the scanning engine, while
//! [toolchain::source] and [toolchain::diagnostics] provide the input buffers and the feedback
//! channel the lexer reports through.
//!

#[macro_use]
extern crate static_assertions;

// Re-exported so the `clang!` macro resolves from other crates.
#[doc(hidden)]
pub use const_format;

pub mod toolchain;
