//! Backslash escape sequences inside quoted literals.

/// Decodes the character following a `\`. Returns `None` for characters without an escape
/// meaning, which the lexer then keeps verbatim along with the backslash.
pub fn decode(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{000B}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// The escape sequence that represents `c` inside a double-quoted literal, if `c` needs one.
pub fn encode(c: char) -> Option<&'static str> {
    match c {
        '\u{0008}' => Some("\\b"),
        '\u{000C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        '\u{000B}' => Some("\\v"),
        '\\' => Some("\\\\"),
        '"' => Some("\\\""),
        _ => None,
    }
}
