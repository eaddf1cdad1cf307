// Scoring benchmarks for MSC
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msc::SimilarityEngine;
use rand::prelude::*;

const WORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn generate_random_text(words: usize) -> String {
    let mut rng = rand::rng();
    (0..words)
        .map(|_| {
            let len = rng.random_range(1..12);
            (0..len)
                .map(|_| WORD_ALPHABET[rng.random_range(0..WORD_ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_similarity");
    let engine = SimilarityEngine::new(false);

    for words in [10, 100, 1000].iter() {
        let left = generate_random_text(*words);
        let right = generate_random_text(*words);
        group.bench_with_input(BenchmarkId::new("msc", words), words, |b, _| {
            b.iter(|| engine.similarity(black_box(&left), black_box(&right)))
        });
    }

    group.finish();
}

fn benchmark_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields_similarity");
    let engine = SimilarityEngine::new(false);

    for fields in [4, 32].iter() {
        let left: Vec<String> = (0..*fields).map(|_| generate_random_text(8)).collect();
        let right: Vec<String> = (0..*fields).map(|_| generate_random_text(8)).collect();
        group.bench_with_input(BenchmarkId::new("msc", fields), fields, |b, _| {
            b.iter(|| engine.fields_similarity(black_box(&left), black_box(&right)))
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let engine = SimilarityEngine::new(false);
    let pairs: Vec<(String, String)> = (0..1000)
        .map(|_| (generate_random_text(20), generate_random_text(20)))
        .collect();

    c.bench_function("similarity_batch_1000", |b| {
        b.iter(|| engine.similarity_batch(black_box(&pairs)))
    });
}

criterion_group!(benches, benchmark_text, benchmark_fields, benchmark_batch);
criterion_main!(benches);
