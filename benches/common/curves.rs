use criterion::{black_box, Criterion};
use spline_drawer::insert::find_insertion;
use spline_drawer::periodic::{PeriodicSpline, DEFAULT_RESOLUTION};
use spline_drawer::Point;
use crate::common::samples::SHAPES;

pub fn fit(c: &mut Criterion) {
    c.bench_function("fit", |b| {
        for points in SHAPES.iter() {
            b.iter(|| black_box(PeriodicSpline::fit(points)))
        }
    });
}

pub fn sample(c: &mut Criterion) {
    c.bench_function("sample", |b| {
        for points in SHAPES.iter() {
            let spline = PeriodicSpline::fit(points).unwrap();
            b.iter(|| black_box(spline.sample(DEFAULT_RESOLUTION)))
        }
    });
}

pub fn insertion(c: &mut Criterion) {
    let click = Point::new(5.0, -1.0);
    c.bench_function("find_insertion", |b| {
        for points in SHAPES.iter() {
            b.iter(|| black_box(find_insertion(points, &click, 10.0)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    fit(c);
    sample(c);
    insertion(c);
}
