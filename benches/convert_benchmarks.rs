#![allow(missing_docs)]
//! Benchmarks for the marconv conversion pipeline.
//!
//! Measures the MARC-8 decoder on catalog-style text and the plain UTF
//! transcoding paths, using Criterion.rs for statistical analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use marconv::Converter;

/// Convert a whole buffer through a fresh descriptor.
fn convert_all(to: &str, from: &str, input: &[u8]) -> Vec<u8> {
    let mut converter = Converter::open(to, from).expect("open failed");
    let mut output = vec![0u8; input.len() * 4 + 16];
    let capacity = output.len();
    let written = {
        let mut src = input;
        let mut dst: &mut [u8] = &mut output;
        while !src.is_empty() {
            converter.convert(&mut src, &mut dst).expect("conversion failed");
        }
        converter.flush(&mut dst).expect("flush failed");
        capacity - dst.len()
    };
    output.truncate(written);
    output
}

/// A catalog-style MARC-8 field mixing ASCII, ANSEL diacritics, a shift
/// into Cyrillic, and an EACC code point.
fn marc8_corpus() -> Vec<u8> {
    let field: &[u8] =
        b"Bibliothe\xE2eque nationale : catalogue ge\xE2ene\xE2eral / \
          \x1B(NMIR\x1B(B ; \x1B$1\x21\x23\x20\x1B(B 1925.";
    field.repeat(200)
}

fn benchmark_marc8_to_utf8(c: &mut Criterion) {
    let corpus = marc8_corpus();
    let mut group = c.benchmark_group("marc8_decode");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("marc8_to_utf8", |b| {
        b.iter(|| convert_all("UTF-8", "MARC-8", black_box(&corpus)));
    });
    group.finish();
}

fn benchmark_marc8_ascii_fast_path(c: &mut Criterion) {
    let corpus = b"The quick brown fox jumps over the lazy dog; 0123456789. ".repeat(400);
    let mut group = c.benchmark_group("marc8_ascii");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("marc8_ascii_to_utf8", |b| {
        b.iter(|| convert_all("UTF-8", "MARC-8", black_box(&corpus)));
    });
    group.finish();
}

fn benchmark_utf_transcoding(c: &mut Criterion) {
    let utf8 = "Пушкин, Александр Сергеевич — Евгений Онегин (1833) ✓ "
        .repeat(400)
        .into_bytes();
    let utf16 = convert_all("UTF-16", "UTF-8", &utf8);

    let mut group = c.benchmark_group("utf_transcode");
    group.throughput(Throughput::Bytes(utf8.len() as u64));
    group.bench_function("utf8_to_utf16", |b| {
        b.iter(|| convert_all("UTF-16", "UTF-8", black_box(&utf8)));
    });
    group.bench_function("utf16_to_utf32", |b| {
        b.iter(|| convert_all("UTF-32", "UTF-16", black_box(&utf16)));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_marc8_to_utf8,
    benchmark_marc8_ascii_fast_path,
    benchmark_utf_transcoding
);
criterion_main!(benches);
