//! Transformer benchmarks
//!
//! Measures name splitting for both strategies on short and long names.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use influx_naming::tagging::TaggedCounter;
use influx_naming::transformer::{MeasurementTransformer, Transformer};
use std::hint::black_box;

fn benchmark_transform(c: &mut Criterion) {
    let short = "server.actarus.cpu_load";
    let long = "dc.eu.host.web01.service.api.route.users.method.get.status.200.requests";

    let key_value = Transformer::key_value();
    let categories = Transformer::categories(["dc", "host", "service", "route"]);

    let mut group = c.benchmark_group("transform");

    for (label, name) in [("short", short), ("long", long)] {
        group.bench_with_input(BenchmarkId::new("key_value", label), &name, |b, name| {
            b.iter(|| key_value.transform(black_box(name)))
        });
        group.bench_with_input(BenchmarkId::new("categories", label), &name, |b, name| {
            b.iter(|| categories.transform(black_box(name)))
        });
    }

    group.finish();
}

fn benchmark_tagged_counter(c: &mut Criterion) {
    let counter = TaggedCounter::new();

    c.bench_function("tagged_counter/inc_tagged", |b| {
        b.iter(|| counter.inc_tagged(black_box(["eu", "web01", "GET"])))
    });
}

criterion_group!(benches, benchmark_transform, benchmark_tagged_counter);
criterion_main!(benches);
