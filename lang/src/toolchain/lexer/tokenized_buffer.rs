use std::io::Write;

use bstr::BStr;
use bstr::ByteSlice;

use super::cursor::SourceCursor;
use super::error::AllocationTarget;
use super::error::LexError;
use super::options::LexerOptions;
use super::scanner::LexStep;
use super::scanner::Lexer;
use super::{Token, TokenIndex};
use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::diagnostics::{DiagnosticLocation, DiagnosticLocationTranslator};
use crate::toolchain::source;

/// The complete, ordered token sequence of one source buffer.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token>,
    lines: Vec<&'s BStr>,
    file_name: &'s str,
}

// Each scan owns its own state, so finished buffers may move freely between threads.
assert_impl_all!(TokenizedBuffer<'static>: Send, Sync);

impl<'s> TokenizedBuffer<'s> {
    /// Lexes all of `source` with the default [LexerOptions].
    pub fn tokenize(
        source: &'s source::SourceBuffer,
        diags: &mut impl DiagnosticConsumer,
    ) -> Result<TokenizedBuffer<'s>, LexError> {
        TokenizedBuffer::tokenize_with_options(source, LexerOptions::default(), diags)
    }

    /// Lexes all of `source`. On error, the tokens gathered so far are discarded.
    pub fn tokenize_with_options(
        source: &'s source::SourceBuffer,
        options: LexerOptions,
        diags: &mut impl DiagnosticConsumer,
    ) -> Result<TokenizedBuffer<'s>, LexError> {
        let code = source.code();
        let mut cursor = SourceCursor::new(code);
        let mut lexer = Lexer::new(source.file_name(), options, diags);
        let mut tokens = Vec::new();

        loop {
            match lexer.next_token(&mut cursor) {
                LexStep::Token(token) => {
                    if tokens.try_reserve(1).is_err() {
                        return Err(LexError::AllocationFailure {
                            target: AllocationTarget::TokenStream,
                            line: token.line,
                        });
                    }
                    tokens.push(token);
                }
                LexStep::EndOfInput => break,
                LexStep::Error(error) => return Err(error),
            }
        }

        let lines = code.lines().map(BStr::new).collect();
        Ok(TokenizedBuffer { tokens, lines, file_name: source.file_name() })
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token> {
        self.tokens.get(i)
    }

    pub fn tokens(&self) -> &Vec<Token> {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Source lines without terminators, index 0 holding line 1.
    pub fn lines(&self) -> &[&'s BStr] {
        &self.lines
    }

    pub fn file_name(&self) -> &'s str {
        self.file_name
    }

    /// Writes each token's lexeme on its own line.
    pub fn write_lexemes(&self, out: &mut impl Write) -> std::io::Result<()> {
        for token in self.tokens.iter() {
            writeln!(out, "{}", token.lexeme)?;
        }
        Ok(())
    }

    /// Writes each token as `line:column KIND text`, one per line.
    pub fn write_tokens(&self, out: &mut impl Write) -> std::io::Result<()> {
        for token in self.tokens.iter() {
            writeln!(out, "{}", token)?;
        }
        Ok(())
    }
}

impl<'s> DiagnosticLocationTranslator<'s, TokenIndex> for TokenizedBuffer<'s> {
    fn get_location(&self, token_index: &TokenIndex) -> DiagnosticLocation<'s> {
        let token = match self.tokens.get(*token_index) {
            Some(token) => token,
            // Only the file is known for indices past the end, such as an end-of-input location.
            None => {
                return DiagnosticLocation {
                    file_name: self.file_name,
                    line_number: 0,
                    column_number: 0,
                    line: BStr::new(""),
                }
            }
        };
        // Switch to zero-based line counting.
        let line_index = (token.line - 1) as usize;
        DiagnosticLocation {
            file_name: self.file_name,
            line_number: token.line,
            column_number: token.column,
            line: self.lines.get(line_index).copied().unwrap_or_else(|| BStr::new("")),
        }
    }
}
