//! Performance benchmarks for the class definition lifecycle.
//!
//! This suite measures the three phases a host program goes through:
//! - Fragment compilation (lexing + parsing member source)
//! - Bulk definition (catalog growth)
//! - Materialization and method invocation

use classforge::default_registry;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_fragment_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment_compilation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("field", |b| {
        b.iter(|| {
            let mut registry = default_registry();
            registry.define("C", &[], &[]).unwrap();
            registry
                .add_field("C", black_box("public int counter = 42;"))
                .unwrap();
        })
    });

    group.bench_function("method", |b| {
        b.iter(|| {
            let mut registry = default_registry();
            registry.define("C", &["int x = 1;", "int y = 2;"], &[]).unwrap();
            registry
                .add_method(
                    "C",
                    black_box("int combine(int k) { int t = x * y; return t + k; }"),
                )
                .unwrap();
        })
    });

    group.finish();
}

fn bench_bulk_define(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_define");
    for count in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("classes_{count}"), |b| {
            b.iter(|| {
                let mut registry = default_registry();
                for i in 0..count {
                    let name = format!("Class{i}");
                    registry
                        .define(&name, &["int x = 1;"], &["int get() { return x; }"])
                        .unwrap();
                }
                black_box(registry.class_count())
            })
        });
    }
    group.finish();
}

fn bench_materialize_and_invoke(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");

    group.bench_function("freeze_and_first_instance", |b| {
        b.iter(|| {
            let mut registry = default_registry();
            registry
                .define(
                    "Point",
                    &["int x = 1;", "int y = 2;"],
                    &["int getSum() { return x + y; }"],
                )
                .unwrap();
            black_box(registry.materialize("Point").unwrap())
        })
    });

    group.bench_function("invoke", |b| {
        let mut registry = default_registry();
        registry
            .define(
                "Point",
                &["int x = 1;", "int y = 2;"],
                &["int getSum() { return x + y; }"],
            )
            .unwrap();
        let mut point = registry.materialize("Point").unwrap();
        b.iter(|| black_box(point.invoke("getSum", &[]).unwrap()));
    });

    group.bench_function("repeat_instantiation", |b| {
        let mut registry = default_registry();
        registry
            .define("Point", &["int x = 1;"], &["int get() { return x; }"])
            .unwrap();
        registry.materialize("Point").unwrap();
        b.iter(|| black_box(registry.materialize("Point").unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fragment_compilation,
    bench_bulk_define,
    bench_materialize_and_invoke
);
criterion_main!(benches);
