use std::path::{Path, PathBuf};

use clex::toolchain::diagnostics::{
    CollectedDiagnostic, CollectingDiagnosticConsumer, DiagnosticKind, DiagnosticLevel,
    LexerDiagnosticKind,
};
use clex::toolchain::lexer::{keywords, Token, TokenKind, TokenizedBuffer};
use clex::toolchain::source::SourceBuffer;

fn corpus() -> Vec<PathBuf> {
    let files: Vec<PathBuf> = glob::glob(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/corpus/*.c"))
        .expect("corpus pattern is valid")
        .map(|entry| entry.expect("corpus entry is readable"))
        .collect();
    assert!(!files.is_empty());
    files
}

fn corpus_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/corpus").join(name)
}

// Lexes the file at `path`, which must open and lex without a fatal error.
fn lex(path: &Path) -> (Vec<Token>, Vec<CollectedDiagnostic>) {
    let source = SourceBuffer::new_from_file(path).expect("corpus file opens");
    let mut diags = CollectingDiagnosticConsumer::new();
    let buffer = TokenizedBuffer::tokenize(&source, &mut diags).expect("corpus file lexes");
    (buffer.into_tokens(), diags.diagnostics().to_vec())
}

fn lexer_kinds(diags: &[CollectedDiagnostic]) -> Vec<LexerDiagnosticKind> {
    diags
        .iter()
        .map(|d| match d.kind {
            DiagnosticKind::LexerError { kind } => kind,
        })
        .collect()
}

#[test]
fn corpus_token_invariants() {
    for path in corpus() {
        let (tokens, diags) = lex(&path);
        let mut line = 1;
        for token in &tokens {
            assert!(token.line >= line, "{}: {:?} out of order", path.display(), token);
            line = token.line;
            assert!(token.column >= 1);
            assert_ne!(token.kind, TokenKind::Unknown);
            if token.kind != TokenKind::StringLiteral {
                assert!(!token.lexeme.is_empty());
            }
            match token.kind {
                TokenKind::Keyword => assert!(keywords::is_keyword(&token.lexeme)),
                TokenKind::Identifier => assert!(!keywords::is_keyword(&token.lexeme)),
                _ => (),
            }
        }
        assert!(diags.iter().all(|d| d.level == DiagnosticLevel::Warning));
    }
}

#[test]
fn corpus_matches_golden_kinds() {
    for path in corpus() {
        let golden = path.with_extension("kinds");
        if !golden.exists() {
            continue;
        }
        let source = SourceBuffer::new_from_file(&path).unwrap();
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(&source, &mut diags).unwrap();
        let mut out = Vec::new();
        buffer.write_tokens(&mut out).unwrap();
        let expected = std::fs::read_to_string(&golden).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected, "{}", golden.display());
    }
}

#[test]
fn clean_files_report_nothing() {
    for name in ["hello.c", "expressions.c", "literals.c"] {
        let (tokens, diags) = lex(&corpus_file(name));
        assert!(!tokens.is_empty());
        assert!(diags.is_empty(), "{}: {:?}", name, diags);
    }
}

#[test]
fn literals_file() {
    let (tokens, _) = lex(&corpus_file("literals.c"));
    let literals: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StringLiteral)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(literals, vec!["tab\there", "'", "say \"hi\" \\ done", "\\q is kept", ""]);
}

#[test]
fn unterminated_file_recovers() {
    let (tokens, diags) = lex(&corpus_file("unterminated.c"));
    assert_eq!(
        lexer_kinds(&diags),
        vec![
            LexerDiagnosticKind::UnknownCharacter,
            LexerDiagnosticKind::UnknownCharacter,
            LexerDiagnosticKind::UnterminatedLiteral,
            LexerDiagnosticKind::UnterminatedBlockComment,
        ]
    );
    let lines: Vec<u32> = diags.iter().map(|d| d.line_number).collect();
    assert_eq!(lines, vec![1, 1, 2, 4]);

    let literal = tokens.iter().find(|t| t.kind == TokenKind::StringLiteral).unwrap();
    assert_eq!(literal.lexeme, "no closing quote");
    let last = tokens.last().unwrap();
    assert_eq!((last.lexeme.as_str(), last.line), (";", 3));
}

// Invalid utf-8 must neither crash the lexer nor end the scan early.
#[test]
fn invalid_utf8_file() {
    let (tokens, diags) = lex(&corpus_file("invalid_utf8.c"));
    assert_eq!(
        lexer_kinds(&diags),
        vec![LexerDiagnosticKind::InvalidEncoding, LexerDiagnosticKind::InvalidEncoding]
    );
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["int", "a", "=", "1", ";", "char", "*", "s", "=", "bad \u{fffd} byte", ";"]
    );
}
