//! A C lexer, which splits input source text into classified tokens for parsing.
//!
//! [TokenizedBuffer::tokenize()] drives a [Lexer] over a [SourceCursor] until the input is
//! exhausted and returns every [Token] in source order. Consumers that want to pull tokens one at
//! a time can drive the [Lexer] directly with [Lexer::next_token()].
//!
//! The lexer is tolerant of erroneous or incomplete input. Unterminated comments and literals
//! close at the end of input, and characters that fit no token class are skipped, each reported
//! as a warning to the [crate::toolchain::diagnostics::DiagnosticConsumer]. The only failure that
//! stops lexing is running out of memory, reported as a [LexError].
//!
//! The lexer does no validation or processing of the input beyond tokenization. It does not
//! convert number strings into their binary representation, for example.
//!

pub mod cursor;
pub mod error;
pub mod escape;
pub mod keywords;
pub mod options;
pub mod scanner;
pub mod token;
pub mod tokenized_buffer;


pub use cursor::SourceCursor;
pub use error::{AllocationTarget, LexError};
pub use options::{LexerOptions, NegativeLiterals};
pub use scanner::{LexStep, Lexer};
pub use token::{Token, TokenKind};
pub use tokenized_buffer::TokenizedBuffer;

/// Position of a [Token] within a [TokenizedBuffer].
pub type TokenIndex = usize;

assert_impl_all!(Token: Send, Sync);
