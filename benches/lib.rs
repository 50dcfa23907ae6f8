//! # pytoc benchmarks
//!
//! Criterion benchmarks for each stage.
//!
//! ## Groups
//! - `lexer`: corrected token stream
//! - `parser`: tokens to tree
//! - `codegen`: tree to C, and the whole pipeline
//!
//! ## Usage
//! ```bash
//! cargo bench          # everything
//! cargo bench codegen  # one group
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use pytoc::frontend::lexer::tokenize;
use pytoc::frontend::parser::parse;
use pytoc::CGenerator;
use std::hint::black_box;

/// A program with nested blocks, repeated to a useful size
fn program(copies: usize) -> String {
    let block = "\
n = int(input())
total = 0
for i in range(n):
    if i < 10 and not i == 3:
        total = total + i * 2
    elif i > 100:
        while total > 0:
            total = total - 1
    else:
        print(\"skip\", i)
print(total)
";
    block.repeat(copies)
}

fn bench_tokenize(c: &mut Criterion) {
    let source = program(200);
    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&source))));
}

fn bench_parse(c: &mut Criterion) {
    let source = program(200);
    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&source)).expect("benchmark program parses"))
    });
}

fn bench_generate(c: &mut Criterion) {
    let tree = parse(&program(200)).expect("benchmark program parses");
    let mut generator = CGenerator::new();
    c.bench_function("generate", |b| {
        b.iter(|| generator.generate(black_box(&tree)).expect("generation succeeds"))
    });
}

fn bench_translate(c: &mut Criterion) {
    let source = program(200);
    c.bench_function("translate", |b| {
        b.iter(|| pytoc::translate(black_box(&source)).expect("translation succeeds"))
    });
}

criterion_group!(lexer, bench_tokenize);
criterion_group!(parser, bench_parse);
criterion_group!(codegen, bench_generate, bench_translate);
criterion_main!(lexer, parser, codegen);
