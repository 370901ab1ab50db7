#![no_main]

use clex::toolchain::diagnostics::NullDiagnosticConsumer;
use clex::toolchain::lexer::TokenizedBuffer;
use clex::toolchain::source::SourceBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source = SourceBuffer::new_from_bytes(data, "fuzz_targets/tokenized_buffer.rs");
    let mut diags = NullDiagnosticConsumer {};
    let _ = TokenizedBuffer::tokenize(&source, &mut diags);
});
