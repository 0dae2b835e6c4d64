use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{simulate, PageRef, Policy};

// Deterministic reference string with some locality: a sliding window of
// pages plus periodic jumps.
fn reference_string(len: usize) -> Vec<PageRef> {
    (0..len)
        .map(|i| {
            let base = (i / 16) as i64;
            let jitter = ((i * 7) % 5) as i64;
            if i % 11 == 0 {
                PageRef((i % 97) as i64)
            } else {
                PageRef(base + jitter)
            }
        })
        .collect()
}

fn simulation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulation");

    for len in [100usize, 1_000].iter() {
        let seq = reference_string(*len);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &seq, |b, seq| {
                b.iter(|| simulate(policy, seq, 8).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, simulation_benchmark);
criterion_main!(benches);
