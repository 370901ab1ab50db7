//! In-memory source buffers handed to the lexer.
//!
//! A [SourceBuffer] keeps the source bytes and a display name together, so that every token and
//! diagnostic produced from the buffer can borrow both for the same lifetime. The lexer performs
//! no I/O of its own; buffers are fully materialized here before scanning starts.
//!

pub mod source_buffer;


pub use source_buffer::SourceBuffer;
pub use source_buffer::SourceError;

/// Builds a `&SourceBuffer` over a string literal, named after the invocation site.
#[macro_export]
macro_rules! clang {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            $crate::const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
