//! The reserved words of C.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Every reserved word, in alphabetical order.
pub const KEYWORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

fn keyword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| KEYWORDS.into_iter().collect())
}

/// Exact, case-sensitive test for membership in [KEYWORDS].
pub fn is_keyword(word: &str) -> bool {
    keyword_set().contains(word)
}
