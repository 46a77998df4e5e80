//! Streaming scanner benchmarks for `imp_lexer_core`.
//!
//! Measures end-to-end tokenization throughput through the bounded buffer,
//! and how the refill block size affects it.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imp_lexer_core::{ScanConfig, Scanner, Trie};

/// Generate N small functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "int func{i}(int x) {{\n    /* step {i} */\n    return x + {i}; // done\n}}\n"
            )
        })
        .collect()
}

/// Scan without collecting, so only tokenization is measured.
fn scan_all(src: &[u8], trie: &Trie, config: &ScanConfig) {
    let Ok(scanner) = Scanner::new(src, trie, config) else {
        return;
    };
    for token in scanner {
        let _ = black_box(token);
    }
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");
    let trie = Trie::standard();
    let config = ScanConfig::default();

    for num_functions in [10, 100, 1000, 10_000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| b.iter(|| scan_all(src.as_bytes(), &trie, &config)),
        );
    }

    group.finish();
}

fn bench_block_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/block_size");
    let trie = Trie::standard();
    let source = generate_n_functions(5000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    for block_size in [64, 512, 4096, 32_768] {
        let config = ScanConfig::with_multiplier(block_size, 16);
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &config,
            |b, config| b.iter(|| scan_all(source.as_bytes(), &trie, config)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_block_size);
criterion_main!(benches);
