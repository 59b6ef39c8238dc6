//! Benchmarks for row construction, hashing and formatting

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use oxirow::{Row, Value};

fn sample_fields(width: usize) -> Vec<Value> {
    (0..width)
        .map(|i| match i % 4 {
            0 => Value::Integer(i as i64),
            1 => Value::Text(format!("field_{i}")),
            2 => Value::Float(i as f64 / 3.0),
            _ => Value::Boolean(i % 2 == 0),
        })
        .collect()
}

/// Benchmark the checked factory, which copies its input
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for width in [0usize, 8, 64] {
        let fields = sample_fields(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_function(format!("fields_{width}"), |b| {
            b.iter(|| Row::create(black_box("row_key"), Some(black_box(fields.as_slice()))))
        });
    }
    group.finish();
}

fn bench_hash_code(c: &mut Criterion) {
    let row = Row::new("row_key", sample_fields(64));
    c.bench_function("hash_code_64", |b| b.iter(|| black_box(&row).hash_code()));
}

fn bench_display(c: &mut Criterion) {
    let row = Row::new("row_key", sample_fields(64));
    c.bench_function("display_64", |b| b.iter(|| black_box(&row).to_string()));
}

criterion_group!(benches, bench_create, bench_hash_code, bench_display);
criterion_main!(benches);
