use criterion::{Criterion, criterion_group, criterion_main};
use elision_core::{BenchConfig, Suite, run_suite};
use std::hint::black_box;

// Whole suites at a reduced scale, to catch regressions in the harness itself.
fn bench_suites(c: &mut Criterion) {
    let mut config = BenchConfig::default()
        .with_repetitions(1_000)
        .expect("valid reduced repetition count");
    config.items.start = 100;
    config.items.end = 1_000;
    config.items.step = 300;
    for suite in Suite::ALL {
        c.bench_function(&format!("suite_{}", suite.key()), |b| {
            b.iter(|| {
                let report = run_suite(suite, &config).expect("suite run failed while benchmarking");
                black_box(report);
            })
        });
    }
}

criterion_group! {
    name = suites;
    config = Criterion::default().sample_size(10);
    targets = bench_suites
}
criterion_main!(suites);
