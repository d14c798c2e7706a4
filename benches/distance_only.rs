//! Benchmark: rolling-row distance against the full table.
//!
//! Run with:
//! `cargo bench --bench distance_only`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_edit::{distance, DistanceTable};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_only");

    for &len in &[500usize, 2_000, 5_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("rolling", len), &(&s, &t), |b, (s, t)| {
            b.iter(|| criterion::black_box(distance(s.as_slice(), t.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("full_table", len), &(&s, &t), |b, (s, t)| {
            b.iter(|| criterion::black_box(DistanceTable::build(s.as_slice(), t.as_slice()).distance()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance);
criterion_main!(benches);
