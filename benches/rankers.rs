//! Criterion benchmarks for the rankers
//!
//! Tracks:
//! - Corpus construction (CSR build + dead-end normalization)
//! - Iterative `PageRank` to the default tolerance
//! - Random-surfer sampling at the default sample count

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use surfer_rank::{iterate_pagerank, sample_pagerank, Corpus, DAMPING, SAMPLES};

/// Generate a web-like corpus: a few links per page, roughly one page in ten a dead end
fn generate_corpus(num_pages: usize, links_per_page: usize) -> Vec<(String, Vec<String>)> {
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    (0..num_pages)
        .map(|page| {
            let mut links = Vec::new();
            if page % 10 != 9 {
                for _ in 0..links_per_page {
                    rng_state = rng_state.wrapping_mul(1_103_515_245).wrapping_add(12345);
                    let target = (rng_state % num_pages as u64) as usize;
                    if target != page {
                        links.push(format!("{target}.html"));
                    }
                }
            }
            (format!("{page}.html"), links)
        })
        .collect()
}

/// Benchmark: corpus construction from raw links
fn bench_corpus_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_construction");

    for size in [100, 500, 1000].iter() {
        let raw = generate_corpus(*size, 3);

        group.bench_with_input(BenchmarkId::new("from_links", size), &raw, |b, raw| {
            b.iter(|| {
                let corpus = Corpus::from_links(black_box(raw.clone())).unwrap();
                black_box(corpus);
            });
        });
    }

    group.finish();
}

/// Benchmark: iterative PageRank
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");

    for size in [100, 500, 1000].iter() {
        let corpus = Corpus::from_links(generate_corpus(*size, 3)).unwrap();

        group.bench_with_input(BenchmarkId::new("default_tolerance", size), &corpus, |b, corpus| {
            b.iter(|| {
                let ranks = iterate_pagerank(black_box(corpus), DAMPING).unwrap();
                black_box(ranks);
            });
        });
    }

    group.finish();
}

/// Benchmark: random-surfer sampling
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pagerank");

    for size in [100, 500, 1000].iter() {
        let corpus = Corpus::from_links(generate_corpus(*size, 3)).unwrap();

        group.bench_with_input(BenchmarkId::new("10k_samples", size), &corpus, |b, corpus| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let ranks = sample_pagerank(black_box(corpus), DAMPING, SAMPLES, &mut rng).unwrap();
                black_box(ranks);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_corpus_construction, bench_iterate, bench_sample);
criterion_main!(benches);
