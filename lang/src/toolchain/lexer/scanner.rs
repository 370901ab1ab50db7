use bstr::ByteSlice;

use crate::toolchain::diagnostics::Diagnostic;
use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::diagnostics::DiagnosticKind;
use crate::toolchain::diagnostics::DiagnosticLevel;
use crate::toolchain::diagnostics::DiagnosticLocation;
use crate::toolchain::diagnostics::DiagnosticMessage;
use crate::toolchain::diagnostics::LexerDiagnosticKind;

use super::cursor::SourceCursor;
use super::error::AllocationTarget;
use super::error::LexError;
use super::escape;
use super::keywords;
use super::options::LexerOptions;
use super::options::NegativeLiterals;
use super::token::Token;
use super::token::TokenKind;

/// One step produced by [Lexer::next_token()].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexStep {
    /// A token was produced.
    Token(Token),

    /// The input is exhausted. Every later call returns this again.
    EndOfInput,

    /// Lexing failed and can't continue.
    Error(LexError),
}

/// Where a token or skipped construct started.
#[derive(Clone, Copy)]
struct Start {
    offset: usize,
    line: u32,
    column: u32,
    line_start: usize,
}

impl Start {
    fn of(cursor: &SourceCursor<'_>) -> Start {
        Start {
            offset: cursor.offset(),
            line: cursor.current_line(),
            column: cursor.current_column(),
            line_start: cursor.line_start(),
        }
    }
}

/// Classifies characters from a [SourceCursor] into [Token]s, one per call to
/// [Lexer::next_token()].
///
/// Each call starts from a clean state, skips blank space and comments, and fully resolves the
/// next token before returning. No token is ever left half-built between calls.
pub struct Lexer<'s, 'd> {
    file_name: &'s str,
    options: LexerOptions,
    diags: &'d mut dyn DiagnosticConsumer,
    // Whether the last token produced could end an operand, for NegativeLiterals::AfterOperator.
    after_operand: bool,
    done: bool,
}

impl<'s, 'd> Lexer<'s, 'd> {
    pub fn new(
        file_name: &'s str,
        options: LexerOptions,
        diags: &'d mut dyn DiagnosticConsumer,
    ) -> Lexer<'s, 'd> {
        Lexer { file_name, options, diags, after_operand: false, done: false }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// `true` once [LexStep::EndOfInput] or [LexStep::Error] has been returned.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Scans and returns the next token from `cursor`.
    pub fn next_token(&mut self, cursor: &mut SourceCursor<'s>) -> LexStep {
        if self.done {
            return LexStep::EndOfInput;
        }
        match self.scan(cursor) {
            Ok(Some(token)) => {
                self.after_operand = ends_operand(&token);
                LexStep::Token(token)
            }
            Ok(None) => {
                self.done = true;
                LexStep::EndOfInput
            }
            Err(error) => {
                self.done = true;
                LexStep::Error(error)
            }
        }
    }

    fn scan(&mut self, cursor: &mut SourceCursor<'s>) -> Result<Option<Token>, LexError> {
        loop {
            // Collect string position at the start of the token.
            let start = Start::of(cursor);
            let invalid = cursor.at_invalid();

            let first_char = match cursor.advance() {
                Some(c) => c,
                None => return Ok(None),
            };

            let kind = match first_char {
                c if is_blank_space(c) => continue,

                // The cursor counts the line as it consumes the newline.
                '\n' => continue,

                '/' if cursor.peek() == '/' => {
                    // The newline is left for the next iteration.
                    cursor.eat_while(|c| c != '\n');
                    continue;
                }

                '/' if cursor.peek() == '*' => {
                    self.block_comment(cursor, start);
                    continue;
                }

                c if is_identifier_start(c) => {
                    cursor.eat_while(is_identifier);
                    TokenKind::Identifier
                }

                c if c.is_ascii_digit() => {
                    cursor.eat_while(|c| c.is_ascii_digit());
                    TokenKind::Number
                }

                '-' if cursor.peek().is_ascii_digit() && self.minus_joins_number() => {
                    cursor.eat_while(|c| c.is_ascii_digit());
                    TokenKind::Number
                }

                '\'' | '"' => return self.literal(cursor, first_char, start).map(Some),

                c if is_operator(c) => {
                    if extends_operator(c, cursor.peek()) {
                        cursor.advance();
                    }
                    TokenKind::Operator
                }

                c if is_delimiter(c) => TokenKind::Delimiter,

                _ => {
                    self.skip_unknown(cursor, invalid, start);
                    continue;
                }
            };

            // End of token, extract the substring. Everything that reaches here is ASCII.
            let text = cursor.slice_from(start.offset).to_str_lossy();
            let mut lexeme = String::new();
            if lexeme.try_reserve_exact(text.len()).is_err() {
                return Err(LexError::AllocationFailure {
                    target: AllocationTarget::Lexeme,
                    line: start.line,
                });
            }
            lexeme.push_str(&text);
            debug_assert!(!lexeme.is_empty());

            // Fixup identifiers to match against reserved words.
            let kind = match kind {
                TokenKind::Identifier if keywords::is_keyword(&lexeme) => TokenKind::Keyword,
                _ => kind,
            };
            return Ok(Some(Token::new(kind, lexeme, start.line, start.column)));
        }
    }

    fn minus_joins_number(&self) -> bool {
        match self.options.negative_literals {
            NegativeLiterals::Legacy => true,
            NegativeLiterals::AfterOperator => !self.after_operand,
        }
    }

    // The opening `/` has been consumed, the `*` has not. The `*` of the opener can't also begin
    // the closer, so `/*/` is still an open comment.
    fn block_comment(&mut self, cursor: &mut SourceCursor<'s>, start: Start) {
        cursor.advance();
        loop {
            match cursor.advance() {
                Some('*') if cursor.peek() == '/' => {
                    cursor.advance();
                    return;
                }
                Some(_) => (),
                None => {
                    let end = Start::of(cursor);
                    self.warn(
                        cursor,
                        LexerDiagnosticKind::UnterminatedBlockComment,
                        start,
                        "Block comment is missing its closing '*/'.".to_string(),
                        Some((end, "comment closed by the end of input here".to_string())),
                    );
                    return;
                }
            }
        }
    }

    // The opening quote has been consumed. Scanning stops at the matching quote, a line break,
    // or the end of input, whichever comes first. Only the matching quote is consumed.
    fn literal(
        &mut self,
        cursor: &mut SourceCursor<'s>,
        quote: char,
        start: Start,
    ) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        let mut has_invalid = false;

        let terminated = loop {
            if cursor.is_eof() || cursor.peek() == '\n' {
                break false;
            }
            has_invalid |= cursor.at_invalid();
            let c = match cursor.advance() {
                Some(c) => c,
                None => break false,
            };
            if c == quote {
                break true;
            }
            if c != '\\' {
                push_char(&mut lexeme, c, start.line)?;
                continue;
            }

            // Unrecognized escapes keep both the backslash and the character, and a trailing
            // backslash at the end of input is kept on its own.
            has_invalid |= cursor.at_invalid();
            match cursor.advance() {
                Some(escaped) => match escape::decode(escaped) {
                    Some(decoded) => push_char(&mut lexeme, decoded, start.line)?,
                    None => {
                        push_char(&mut lexeme, '\\', start.line)?;
                        push_char(&mut lexeme, escaped, start.line)?;
                    }
                },
                None => push_char(&mut lexeme, '\\', start.line)?,
            }
        };

        if !terminated {
            let end = Start::of(cursor);
            let closed_by =
                if cursor.is_eof() { "the end of input" } else { "the end of the line" };
            self.warn(
                cursor,
                LexerDiagnosticKind::UnterminatedLiteral,
                start,
                format!("Literal is missing its closing {:?}.", quote),
                Some((end, format!("literal closed by {} here", closed_by))),
            );
        }
        if has_invalid {
            self.warn(
                cursor,
                LexerDiagnosticKind::InvalidEncoding,
                start,
                "Invalid utf-8 sequence in literal, replaced with U+FFFD.".to_string(),
                None,
            );
        }

        Ok(Token::new(TokenKind::StringLiteral, lexeme, start.line, start.column))
    }

    // We coalesce a run of skipped characters into a single diagnostic, to cut down on the
    // number of diagnostics we report from a string of garbage input.
    fn skip_unknown(&mut self, cursor: &mut SourceCursor<'s>, invalid: bool, start: Start) {
        while !cursor.is_eof() && is_unknown(cursor.peek()) && cursor.at_invalid() == invalid {
            cursor.advance();
        }
        if invalid {
            self.warn(
                cursor,
                LexerDiagnosticKind::InvalidEncoding,
                start,
                "Invalid utf-8 sequence skipped.".to_string(),
                None,
            );
        } else {
            let skipped = cursor.slice_from(start.offset);
            self.warn(
                cursor,
                LexerDiagnosticKind::UnknownCharacter,
                start,
                format!("Unrecognized character sequence '{}' skipped.", skipped),
                None,
            );
        }
    }

    fn warn(
        &mut self,
        cursor: &SourceCursor<'s>,
        kind: LexerDiagnosticKind,
        start: Start,
        body: String,
        note: Option<(Start, String)>,
    ) {
        let kind = DiagnosticKind::LexerError { kind };
        let location = self.location(cursor, start);
        let msg = DiagnosticMessage { kind, location, body };
        let notes = match note {
            Some((at, body)) => {
                vec![DiagnosticMessage { kind, location: self.location(cursor, at), body }]
            }
            None => Vec::new(),
        };
        let diag = Diagnostic::new(DiagnosticLevel::Warning, msg, notes);
        self.diags.handle_diagnostic(&diag);
    }

    fn location(&self, cursor: &SourceCursor<'s>, at: Start) -> DiagnosticLocation<'s> {
        DiagnosticLocation {
            file_name: self.file_name,
            line_number: at.line,
            column_number: at.column,
            line: cursor.line_text_at(at.line_start),
        }
    }
}

fn push_char(lexeme: &mut String, c: char, line: u32) -> Result<(), LexError> {
    if lexeme.try_reserve(c.len_utf8()).is_err() {
        return Err(LexError::AllocationFailure { target: AllocationTarget::Lexeme, line });
    }
    lexeme.push(c);
    Ok(())
}

// A `-` after one of these is a binary operator under NegativeLiterals::AfterOperator.
fn ends_operand(token: &Token) -> bool {
    match token.kind {
        TokenKind::Identifier | TokenKind::Number | TokenKind::StringLiteral => true,
        TokenKind::Delimiter => token.lexeme == ")" || token.lexeme == "]",
        _ => false,
    }
}

// Newlines are not blank space, they're tracked separately.
fn is_blank_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\u{0008}')
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_operator(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '!' | '+' | '-' | '|' | '&')
}

// A following `=` always extends an operator, then a doubled `+ - | &`, then `->`.
fn extends_operator(first: char, next: char) -> bool {
    next == '='
        || (next == first && matches!(first, '+' | '-' | '|' | '&'))
        || (first == '-' && next == '>')
}

fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '^' | '%' | '#' | '*' | '?' | '~' | ',' | ';' | '[' | ']' | '(' | ')' | '{' | '}' | '.'
    )
}

// Characters that could start something are never swallowed into a skipped run. The `/` is
// excluded too, as it might open a comment.
fn is_unknown(c: char) -> bool {
    !(is_blank_space(c)
        || c == '\n'
        || c == '/'
        || is_identifier(c)
        || c == '\''
        || c == '"'
        || is_operator(c)
        || is_delimiter(c))
}
