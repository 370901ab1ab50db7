#![no_main]

use clex::toolchain::diagnostics::CollectingDiagnosticConsumer;
use clex::toolchain::lexer::{LexStep, Lexer, LexerOptions, NegativeLiterals, SourceCursor};
use clex::toolchain::source::SourceBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source = SourceBuffer::new_from_bytes(data, "fuzz_targets/lex.rs");
    let negative_literals = match data.first() {
        Some(b) if b % 2 == 1 => NegativeLiterals::AfterOperator,
        _ => NegativeLiterals::Legacy,
    };
    let options = LexerOptions::default().with_negative_literals(negative_literals);
    let mut cursor = SourceCursor::new(source.code());
    let mut diags = CollectingDiagnosticConsumer::new();
    let mut lexer = Lexer::new(source.file_name(), options, &mut diags);
    assert_eq!(lexer.options().negative_literals, negative_literals);

    // Every step consumes input, so the scan can't outlast the input.
    let mut steps = 0;
    loop {
        match lexer.next_token(&mut cursor) {
            LexStep::Token(token) => {
                assert!(token.line >= 1 && token.column >= 1);
                steps += 1;
                assert!(steps <= data.len());
            }
            LexStep::EndOfInput => break,
            LexStep::Error(error) => panic!("unexpected lexing error: {}", error),
        }
    }
    assert!(lexer.is_done());
    assert_eq!(lexer.next_token(&mut cursor), LexStep::EndOfInput);
    assert!(cursor.is_eof());
});
