use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use warren::core::resolver::{Resolver, Strategy};
use warren::core::store::{ConfigMap, MemoryStore, ParameterEntry};

/// Seed a store with `count` parameters under `/bench/`.
fn seeded_store(count: usize) -> MemoryStore {
    let entries = (0..count)
        .map(|i| ParameterEntry::new(format!("/bench/KEY{:04}", i), format!("value{}", i)))
        .collect();
    MemoryStore::new(entries)
}

/// Benchmark full resolution with varying parameter counts.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let base: ConfigMap = (0..50)
        .map(|i| (format!("BASE{:02}", i), "value".to_string()))
        .collect();

    let counts = [10, 100, 1000];

    for count in counts {
        let store = seeded_store(count);

        group.throughput(Throughput::Elements(count as u64));

        for (name, strategy) in [("path", Strategy::Path), ("enumerate", Strategy::Enumerate)] {
            let resolver = Resolver::new(&store).with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(name, count),
                &base,
                |b, base| {
                    b.iter(|| {
                        let merged = resolver
                            .resolve(black_box(base), black_box("/bench/"))
                            .unwrap();
                        black_box(merged);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
