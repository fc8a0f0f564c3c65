//! Search pipeline benchmarks.
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `normalize` | Cost of the comparison form for short and accented names |
//! | `pipeline` | search, filter and sort over the bundled sample |
//! | `scaling` | Full `SearchEngine::run` as the collection grows |
//!
//! ```sh
//! cargo bench -p scrutin-core --bench benchmarks
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scrutin_core::loader::sample_countries;
use scrutin_core::prelude::*;
use scrutin_core::text::normalize;
use std::hint::black_box;

fn synthetic(n: usize) -> Vec<DynRecord> {
    let base = sample_countries().expect("bundled sample parses");
    (0..n)
        .map(|i| {
            let template = &base[i % base.len()];
            let mut record = template.clone();
            record.id = format!("{}-{i}", template.id);
            record
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for input in ["Kenya", "São Tomé-et-Principe", "  Côte d'Ivoire  "] {
        group.bench_with_input(BenchmarkId::from_parameter(input.trim()), &input, |b, s| {
            b.iter(|| normalize(black_box(s)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Individual stages over the sample
// ---------------------------------------------------------------------------

fn pipeline_bench(c: &mut Criterion) {
    let records = sample_countries().expect("bundled sample parses");
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("search_name_and_languages", |b| {
        b.iter(|| search_items(black_box(records), &["name", "languages"], black_box("fran")))
    });

    let spec = FilterSpec::new()
        .regions(["Afrique de l'Ouest", "Afrique Centrale"])
        .year_range(YearRange::between(2021, 2025));
    group.bench_function("filter_region_and_year", |b| {
        b.iter(|| filter_items(black_box(records), black_box(&spec)))
    });

    for mode in [SortMode::Alphabetic, SortMode::Date] {
        group.bench_with_input(BenchmarkId::new("sort", mode), &mode, |b, &m| {
            b.iter(|| sort_items(black_box(records), m))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let request = SearchRequest::new("a")
        .filters(FilterSpec::new().year_range(YearRange::between(2020, 2024)))
        .sort(SortMode::Alphabetic);

    for size in [1_000usize, 10_000, 100_000] {
        let engine = SearchEngine::with_keys(synthetic(size), ["name", "languages"]);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("run", size), &engine, |b, e| {
            b.iter(|| e.run(black_box(&request)).len())
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_bench, pipeline_bench, scaling_bench);
criterion_main!(benches);
