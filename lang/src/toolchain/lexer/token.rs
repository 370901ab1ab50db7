use std::borrow::Cow;
use std::fmt::Display;

use super::escape;

/// Represents a single lexical token of C source.
///
/// Blank space, comments, and skipped characters produce no [Token]. The lexer reports skipped
/// characters as diagnostics instead, so that every byte of input is still accounted for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of Token.
    pub kind: TokenKind,

    /// The token text. For [TokenKind::StringLiteral] this is the decoded body, without quotes
    /// and with escape sequences resolved.
    pub lexeme: String,

    /// The 1-based line of the first character of the token.
    pub line: u32,

    /// The 1-based character column of the first character of the token.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: u32, column: u32) -> Token {
        Token { kind, lexeme, line, column }
    }

    /// Renders the token back into source text that lexes to the same kind and lexeme.
    ///
    /// String literals are re-quoted with `"` and their contents re-escaped, so the quote style
    /// of the original literal is not preserved. All other tokens are their lexeme.
    pub fn source_text(&self) -> Cow<'_, str> {
        match self.kind {
            TokenKind::StringLiteral => {
                let mut text = String::with_capacity(self.lexeme.len() + 2);
                text.push('"');
                for c in self.lexeme.chars() {
                    match escape::encode(c) {
                        Some(sequence) => text.push_str(sequence),
                        None => text.push(c),
                    }
                }
                text.push('"');
                Cow::Owned(text)
            }
            _ => Cow::Borrowed(self.lexeme.as_str()),
        }
    }
}

/// An enumeration of all possible Token types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name starting with an ASCII letter or `_` and followed by letters, digits, or `_`, that
    /// isn't a reserved word.
    Identifier,

    /// One of the 32 reserved words, see [super::keywords::KEYWORDS].
    Keyword,

    /// A run of decimal digits, optionally preceded by `-`.
    Number,

    /// A single- or double-quoted literal.
    StringLiteral,

    /// One of `= < > ! + - | &`, or a two-character operator such as `==`, `++` or `->`.
    Operator,

    /// A single punctuation character, one of `^ % # * ? ~ , ; [ ] ( ) { } .`.
    Delimiter,

    /// Placeholder kind. The lexer never produces it.
    Unknown,
}

// TokenKind is stored in every Token, keep it to a single byte.
assert_eq_size!(TokenKind, u8);

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}:{} {} {}",
            self.line,
            self.column,
            self.kind,
            self.source_text()
        ))
    }
}
