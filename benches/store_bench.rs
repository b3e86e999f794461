//! Benchmarks for stash store operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stash::codec::{decode, encode};
use stash::{Config, Store};
use tempfile::TempDir;

fn codec_benchmarks(c: &mut Criterion) {
    let binary: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let token = encode(&binary);

    c.bench_function("percent_encode_4k_binary", |b| {
        b.iter(|| encode(black_box(&binary)))
    });

    c.bench_function("percent_decode_4k_binary", |b| {
        b.iter(|| decode(black_box(&token)).unwrap())
    });
}

fn store_benchmarks(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let store = Store::new(
        Config::builder()
            .store_path(temp.path().join("store"))
            .build(),
    );

    // Populate so each set pays the full read-filter-rewrite cost
    for i in 0..100 {
        store
            .set(format!("key{:03}", i).as_bytes(), b"some value")
            .unwrap();
    }

    c.bench_function("set_over_100_records", |b| {
        b.iter(|| store.set(black_box(b"key050"), black_box(b"updated")).unwrap())
    });

    c.bench_function("get_over_100_records", |b| {
        b.iter(|| store.get(black_box(b"key099")).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks, store_benchmarks);
criterion_main!(benches);
