use std::fmt;

/// A failure that aborts lexing.
///
/// Everything short of this degrades to best-effort classification plus a diagnostic, see
/// [crate::toolchain::diagnostics::LexerDiagnosticKind].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("out of memory growing the {target} at line {line}")]
    AllocationFailure { target: AllocationTarget, line: u32 },
}

/// The buffer that failed to grow in a [LexError::AllocationFailure].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationTarget {
    Lexeme,
    TokenStream,
}

impl fmt::Display for AllocationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationTarget::Lexeme => f.write_str("lexeme buffer"),
            AllocationTarget::TokenStream => f.write_str("token stream"),
        }
    }
}
