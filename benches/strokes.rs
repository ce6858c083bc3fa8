//! Benchmarks for stroke concatenation, bounding boxes and merging.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use strokes::{bounding_box, concat, merge_strokes, Point2, Stroke};

/// Generates a random walk split into strokes of `stroke_len` points that
/// chain end to start.
fn generate_chain(num_strokes: usize, stroke_len: usize, seed: u64) -> Vec<Stroke<f64>> {
    let mut strokes = Vec::with_capacity(num_strokes);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut state = seed;

    for _ in 0..num_strokes {
        let mut points = Vec::with_capacity(stroke_len);
        points.push(Point2::new(x, y));
        for _ in 1..stroke_len {
            // Simple xorshift for deterministic "random" steps
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let angle = (state as f64 / u64::MAX as f64) * 2.0 * std::f64::consts::PI;
            x += angle.cos() * 0.1;
            y += angle.sin() * 0.1;
            points.push(Point2::new(x, y));
        }
        strokes.push(Stroke::new(points).unwrap());
    }

    strokes
}

/// Generates short strokes on a grid; none of them touch.
fn generate_hatching(num_strokes: usize) -> Vec<Stroke<f64>> {
    (0..num_strokes)
        .map(|i| {
            let x = i as f64;
            Stroke::new(vec![Point2::new(x, 0.0), Point2::new(x, 10.0)]).unwrap()
        })
        .collect()
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");

    for count in [10, 100, 1000] {
        let strokes = generate_chain(count, 20, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("chain", count), &strokes, |b, s| {
            b.iter(|| concat(black_box(s)))
        });
    }

    group.finish();
}

fn bench_bounding_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounding_box");

    for count in [10, 100, 1000] {
        let strokes = generate_chain(count, 20, 54321);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("collection", count), &strokes, |b, s| {
            b.iter(|| bounding_box(black_box(s)))
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_strokes");

    for count in [10, 100, 1000] {
        let chain = generate_chain(count, 20, 99999);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("chain", count), &chain, |b, s| {
            b.iter(|| merge_strokes(black_box(s)))
        });

        let hatching = generate_hatching(count);
        group.bench_with_input(BenchmarkId::new("disjoint", count), &hatching, |b, s| {
            b.iter(|| merge_strokes(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_concat, bench_bounding_box, bench_merge);
criterion_main!(benches);
