// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Engine Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use backfill_engineering::engine::{compute, compute_value};
use backfill_engineering::scan::scan_parameter;
use backfill_types::config::ParameterSet;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_compute(c: &mut Criterion) {
    let params = ParameterSet::plant_defaults();
    c.bench_function("compute_reference_plant", |b| {
        b.iter(|| compute(black_box(&params)))
    });

    let doc = serde_json::to_value(params).expect("serialize parameters");
    c.bench_function("compute_value_json", |b| {
        b.iter(|| compute_value(black_box(&doc)).expect("object input"))
    });
}

fn bench_scan(c: &mut Criterion) {
    let params = ParameterSet::plant_defaults();
    let mut group = c.benchmark_group("scan_parameter");
    for steps in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                scan_parameter(black_box(&params), "q", 10.0, 200.0, steps)
                    .expect("known parameter")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_scan);
criterion_main!(benches);
