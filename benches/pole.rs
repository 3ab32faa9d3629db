//! Benchmarks for the pole search and its distance oracle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use visual_center::{find_pole_with, Point2, PoleOptions, Polygon, QueueOrder};

/// Regular `n`-gon of the given radius about the origin.
fn circle(radius: f64, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
}

fn donut(n: usize) -> Polygon<f64> {
    Polygon::with_holes(circle(300.0, n), vec![circle(100.0, n)]).expect("valid donut")
}

fn bench_signed_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_distance");

    for n in [16, 128, 1024] {
        let polygon = donut(n);
        group.bench_with_input(BenchmarkId::new("donut", n), &polygon, |b, poly| {
            b.iter(|| poly.signed_distance(black_box(Point2::new(180.0, 40.0))))
        });
    }

    group.finish();
}

fn bench_find_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pole");
    let polygon = donut(100);

    for order in [QueueOrder::BestFirst, QueueOrder::Fifo] {
        for precision in [10.0, 1.0, 0.1] {
            let options = PoleOptions::with_precision(precision).with_order(order);
            let id = BenchmarkId::new(format!("{order:?}"), precision);
            group.bench_with_input(id, &options, |b, opts| {
                b.iter(|| find_pole_with(black_box(&polygon), opts))
            });
        }
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use visual_center::find_pole_parallel;

    let mut group = c.benchmark_group("find_pole_parallel");
    let polygon = donut(1024);
    let options = PoleOptions::with_precision(0.5);

    group.bench_function("donut_1024", |b| {
        b.iter(|| find_pole_parallel(black_box(&polygon), &options))
    });
    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_: &mut Criterion) {}

criterion_group!(benches, bench_signed_distance, bench_find_pole, bench_parallel);
criterion_main!(benches);
