use std::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const SIZES: [usize; 3] = [100, 1_000, 10_000];
const SEED: u64 = 0x5EED_CAFE;

fn make_keys(count: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| format!("key_{:016X}", rng.random::<u64>()))
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let keys = make_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("chain_hash", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainHashMap::new();
                for (i, key) in keys.iter().enumerate() {
                    map.set(key.clone(), i as u64);
                }
                black_box(map.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = std::collections::HashMap::new();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(key.clone(), i as u64);
                }
                black_box(map.len())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in SIZES {
        let keys = make_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        let mut chain_map = ChainHashMap::new();
        let mut std_map = std::collections::HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            chain_map.set(key.clone(), i as u64);
            std_map.insert(key.clone(), i as u64);
        }

        group.bench_with_input(BenchmarkId::new("chain_hash", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    if chain_map.get(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    if std_map.get(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in SIZES {
        let keys = make_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("chain_hash", size), &keys, |b, keys| {
            b.iter_batched(
                || {
                    let mut map = ChainHashMap::new();
                    for (i, key) in keys.iter().enumerate() {
                        map.set(key.clone(), i as u64);
                    }
                    map
                },
                |mut map| {
                    let mut removed = 0usize;
                    for key in keys {
                        if map.remove(key) {
                            removed += 1;
                        }
                    }
                    black_box(removed)
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter_batched(
                || {
                    let mut map = std::collections::HashMap::new();
                    for (i, key) in keys.iter().enumerate() {
                        map.insert(key.clone(), i as u64);
                    }
                    map
                },
                |mut map| {
                    let mut removed = 0usize;
                    for key in keys {
                        if map.remove(key).is_some() {
                            removed += 1;
                        }
                    }
                    black_box(removed)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
