// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for viewport geometry operations.
//!
//! Measures the performance of:
//! - Scale bounds computation
//! - Scale-around-a-point zoom steps
//! - Resample strategy selection and execution

use criterion::{criterion_group, criterion_main, Criterion};
use iced_glance::domain::scale::ScaleBounds;
use iced_glance::media::{resample, ImageData, ResampleStrategy};
use iced_glance::ViewportState;
use std::hint::black_box;

fn fitted_viewport() -> ViewportState {
    let mut state = ViewportState::new();
    state.set_viewport_size(iced::Size::new(1920.0, 1080.0));
    state.set_image(6000, 4000);
    state.update_bounds().unwrap();
    state.fit_all();
    state
}

/// Benchmark bounds computation across a spread of image sizes.
fn bench_scale_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_geometry");

    group.bench_function("scale_bounds_compute", |b| {
        b.iter(|| {
            for (w, h) in [(640, 480), (1920, 1080), (6000, 4000), (12_000, 8000)] {
                black_box(ScaleBounds::compute(w, h, 1920.0, 1080.0).unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark a zoom gesture: repeated scale-around steps with alignment.
fn bench_scale_around(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_geometry");

    group.bench_function("scale_around_steps", |b| {
        b.iter(|| {
            let mut state = fitted_viewport();
            let anchor = iced::Point::new(960.0, 540.0);
            for step in 0..50 {
                state.scale_around(anchor, 0.3 + step as f32 * 0.01);
            }
            black_box(state.visible_rect());
        });
    });

    group.finish();
}

/// Benchmark the resample path for a medium downscale.
fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    group.sample_size(20);

    let source = ImageData::from_rgba(1920, 1080, vec![100; 1920 * 1080 * 4]);

    group.bench_function("quality_downscale", |b| {
        b.iter(|| {
            black_box(resample(&source, 960, 540, ResampleStrategy::Quality).unwrap());
        });
    });

    group.bench_function("fast_downscale", |b| {
        b.iter(|| {
            black_box(
                resample(&source, 960, 540, ResampleStrategy::Fast { smooth: false }).unwrap(),
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scale_bounds,
    bench_scale_around,
    bench_resample
);
criterion_main!(benches);
