use bstr::BStr;
use bstr::ByteSlice;

/// Character cursor over a source buffer.
///
/// Tracks the position in the input by byte offset, line, and column. The input is not required
/// to be valid utf-8; each invalid byte sequence reads as a single [SourceCursor::INVALID]
/// character.
///
/// Design roughly inspired by the rustc lexer Cursor.
#[derive(Clone)]
pub struct SourceCursor<'s> {
    bytes: &'s [u8],
    // An iterator over the remaining input characters.
    chars: bstr::Chars<'s>,
    line: u32,
    column: u32,
    // Byte offset where the current line begins.
    line_start: usize,
}

impl<'s> SourceCursor<'s> {
    /// Returned by [SourceCursor::peek()] and [SourceCursor::peek_next()] past the end of input.
    pub const EOF: char = '\0';

    /// The utf-8 replacement character, which stands in for invalid byte sequences.
    pub const INVALID: char = '\u{fffd}';

    pub fn new(input: &'s BStr) -> SourceCursor<'s> {
        let bytes: &'s [u8] = input;
        SourceCursor { bytes, chars: bytes.chars(), line: 1, column: 1, line_start: 0 }
    }

    /// The character at the current position.
    pub fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    /// The character one past the current position.
    pub fn peek_next(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(Self::EOF)
    }

    /// Consumes the current character. Consuming a newline moves to the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.line_start = self.offset();
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// `true` if the current character stands in for invalid utf-8 rather than an actual
    /// U+FFFD in the source.
    pub fn at_invalid(&self) -> bool {
        match self.chars.clone().next() {
            Some(Self::INVALID) => !self.chars.as_bytes().starts_with("\u{fffd}".as_bytes()),
            _ => false,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_bytes().is_empty()
    }

    pub fn current_line(&self) -> u32 {
        self.line
    }

    pub fn current_column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the current position from the start of input.
    pub fn offset(&self) -> usize {
        self.bytes.len() - self.chars.as_bytes().len()
    }

    /// The input between byte offset `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'s BStr {
        BStr::new(&self.bytes[start..self.offset()])
    }

    /// Byte offset where the current line begins.
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// The full text of the line beginning at byte offset `line_start`.
    pub fn line_text_at(&self, line_start: usize) -> &'s BStr {
        let rest = &self.bytes[line_start.min(self.bytes.len())..];
        let end = rest.find_byte(b'\n').unwrap_or(rest.len());
        let line = match rest[..end].last() {
            Some(b'\r') => &rest[..end - 1],
            _ => &rest[..end],
        };
        BStr::new(line)
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.peek()) {
            self.advance();
        }
    }
}
