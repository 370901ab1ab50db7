//! Criterion benchmarks for lexing throughput.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use clex::toolchain::diagnostics::NullDiagnosticConsumer;
use clex::toolchain::lexer::{LexerOptions, NegativeLiterals, TokenizedBuffer};
use clex::toolchain::source::SourceBuffer;

fn generate_functions(n: usize) -> String {
    let mut source = String::new();
    for i in 0..n {
        source.push_str(&format!(
            "/* function {i} */\nstatic int f_{i}(int a, char *s) {{\n    \
             if (a >= {i} && s != 0) return a-{i}; // early\n    \
             while (a-- > 0) {{ s[a] = 'x'; }}\n    \
             return printf(\"%d\\n\", a);\n}}\n"
        ));
    }
    source
}

fn generate_noise(n: usize) -> String {
    let mut source = String::new();
    for i in 0..n {
        source.push_str(&format!("@ x{i} $ \"unterminated {i}\n"));
    }
    source
}

fn lex(text: &str, options: LexerOptions) -> usize {
    let source = SourceBuffer::new_from_string(text, "bench.c");
    let mut diags = NullDiagnosticConsumer {};
    TokenizedBuffer::tokenize_with_options(&source, options, &mut diags)
        .expect("lexing should succeed")
        .len()
}

fn bench_tokenize(c: &mut Criterion) {
    let small = generate_functions(10);
    let large = generate_functions(1000);
    let noise = generate_noise(1000);
    let after_operator =
        LexerOptions::default().with_negative_literals(NegativeLiterals::AfterOperator);

    let mut group = c.benchmark_group("tokenize");

    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| lex(&small, LexerOptions::default()));
    });

    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| lex(&large, LexerOptions::default()));
    });

    group.bench_function("large_after_operator", |b| {
        b.iter(|| lex(&large, after_operator));
    });

    group.throughput(Throughput::Bytes(noise.len() as u64));
    group.bench_function("diagnostic_heavy", |b| {
        b.iter(|| lex(&noise, LexerOptions::default()));
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
