use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unit_circle::core::{coordinates_for_input_boxes, lookup};
use unit_circle::models::AngleMode;
use unit_circle::parsing::parse_radians;

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let points = coordinates_for_input_boxes();

    group.bench_function("degrees_all_points", |b| {
        b.iter(|| {
            for p in points.iter() {
                black_box(lookup(AngleMode::Degrees, black_box(*p)).ok());
            }
        });
    });

    group.bench_function("radians_all_points", |b| {
        b.iter(|| {
            for p in points.iter() {
                black_box(lookup(AngleMode::Radians, black_box(*p)).ok());
            }
        });
    });

    group.finish();
}

fn bench_answer_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer_parsing");

    group.bench_function("parse_radians", |b| {
        b.iter(|| black_box(parse_radians(black_box("11π/6")).ok()));
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_answer_parsing);
criterion_main!(benches);
