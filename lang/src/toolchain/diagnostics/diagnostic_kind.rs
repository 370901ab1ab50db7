use std::fmt;

/// The enumerated type of all diagnostics clex emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// One or more characters outside every token class were skipped.
    UnknownCharacter,

    /// One or more bytes did not form valid utf-8 and were skipped or replaced.
    InvalidEncoding,

    /// A `/*` comment ran to the end of input without a closing `*/`.
    UnterminatedBlockComment,

    /// A quoted literal hit a line break or the end of input before its closing quote.
    UnterminatedLiteral,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::LexerError { kind } => kind.fmt(f),
        }
    }
}

impl fmt::Display for LexerDiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LexerDiagnosticKind::UnknownCharacter => "unknown character",
            LexerDiagnosticKind::InvalidEncoding => "invalid encoding",
            LexerDiagnosticKind::UnterminatedBlockComment => "unterminated block comment",
            LexerDiagnosticKind::UnterminatedLiteral => "unterminated literal",
        };
        f.write_str(s)
    }
}
