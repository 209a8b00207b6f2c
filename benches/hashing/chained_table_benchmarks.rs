use chaintable::ChainedTable;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[100, 1_000, 10_000];

/// Generate address-like keys: a house number followed by a random street name.
fn generate_addresses(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let street: String = (0..8).map(|_| rng.sample(Alphanumeric) as char).collect();
            format!("{} {} St", i, street)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_table_insert");
    for &size in SIZES {
        let keys = generate_addresses(size);
        // Starting from one bucket exercises every doubling on the way up.
        group.bench_with_input(BenchmarkId::new("from_one_bucket", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainedTable::with_capacity(1).unwrap();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(key, i).unwrap();
                }
                black_box(map.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("presized", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainedTable::with_capacity(keys.len()).unwrap();
                for (i, key) in keys.iter().enumerate() {
                    map.insert(key, i).unwrap();
                }
                black_box(map.len())
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_table_lookup");
    for &size in SIZES {
        let keys = generate_addresses(size);
        let mut map = ChainedTable::with_capacity(16).unwrap();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key, i).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);
        let probes: Vec<&str> = (0..1_000)
            .map(|_| keys[rng.gen_range(0..size)].as_str())
            .collect();

        group.bench_with_input(BenchmarkId::new("hit", size), &probes, |b, probes| {
            b.iter(|| {
                let mut sum = 0usize;
                for key in probes {
                    if let Some(v) = map.get(key) {
                        sum += *v;
                    }
                }
                black_box(sum)
            });
        });
        let absent: Vec<String> = probes.iter().map(|key| format!("{} Apt 9", key)).collect();
        group.bench_with_input(BenchmarkId::new("miss", size), &absent, |b, absent| {
            b.iter(|| {
                let mut misses = 0usize;
                for key in absent {
                    if !map.contains_key(key) {
                        misses += 1;
                    }
                }
                black_box(misses)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
