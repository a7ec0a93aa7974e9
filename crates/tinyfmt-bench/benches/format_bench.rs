//! Format engine benchmarks.
//!
//! Compares the printf engine against `std::fmt` for equivalent output, and
//! isolates the literal scanner and the space-pad side buffer.

use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tinyfmt_core::{FormatArg, StringSink, format, format_to};

fn bench_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_scan");
    for len in [16usize, 256, 4096] {
        let text = "a%%b".repeat(len / 4);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            let mut sink = StringSink::new();
            b.iter(|| {
                sink.clear();
                format_to(&mut sink, black_box(text), &[]).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_directives(c: &mut Criterion) {
    let name = "worker-7";
    let count = 1234u32;
    let ratio = 0.8125f64;
    let args: [&dyn FormatArg; 3] = [&name, &count, &ratio];

    let mut group = c.benchmark_group("directives");
    group.bench_function("tinyfmt", |b| {
        b.iter(|| format(black_box("%-10s|%08x|%+.3e"), black_box(&args)).unwrap());
    });
    group.bench_function("std_fmt", |b| {
        b.iter(|| {
            let mut out = String::new();
            write!(
                out,
                "{:<10}|{:08x}|{:+.3e}",
                black_box(name),
                black_box(count),
                black_box(ratio)
            )
            .unwrap();
            out
        });
    });
    group.finish();
}

fn bench_space_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("space_pad");
    group.bench_function("plus", |b| {
        b.iter(|| format(black_box("%+8d"), &[&42]).unwrap());
    });
    group.bench_function("space", |b| {
        b.iter(|| format(black_box("% 8d"), &[&42]).unwrap());
    });
    group.finish();
}

fn bench_variable_width(c: &mut Criterion) {
    c.bench_function("star_width_precision", |b| {
        b.iter(|| format(black_box("%*.*f"), &[&12, &3, &3.14159]).unwrap());
    });
}

criterion_group!(
    benches,
    bench_literal,
    bench_directives,
    bench_space_pad,
    bench_variable_width
);
criterion_main!(benches);
