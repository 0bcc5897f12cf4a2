use std::hint::black_box;

use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use glam::Vec3;
use kinema::prelude::*;

fn bounce_track() -> KeyframeTrack {
    let keys = vec![0.0, 0.2, 0.25, 0.375, 0.5, 0.9, 1.0];
    let values = keys
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let v = if i % 2 == 0 { 0.0 } else { 0.5 };
            Value::from([("x", v), ("y", -v * 0.5), ("z", v)])
        })
        .collect();
    KeyframeTrack::new(keys, values).unwrap()
}

fn populated_registry(count: usize, loop_mode: LoopMode) -> AnimationRegistry {
    let mut registry = AnimationRegistry::new();
    for i in 0..count {
        let position = shared(Vec3::ZERO);
        let animator = KeyframeAnimator::builder()
            .track(PropertyBinding::new(bounce_track(), position).unwrap())
            .duration(1000.0 + i as f64)
            .loop_mode(loop_mode)
            .easing(Easing::Bounce(EaseMode::InOut))
            .build()
            .unwrap();
        let handle = registry.insert(animator);
        registry.start(handle, 0.0);
    }
    registry
}

fn bench_tick(count: usize, b: &mut Bencher) {
    let mut registry = populated_registry(count, LoopMode::Loop);
    let mut now = 0.0;
    b.iter(|| {
        now += 16.0;
        black_box(registry.tick(black_box(now)));
    });
}

fn registry_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_tick");
    group.bench_function("tick_10", |b| bench_tick(10, b));
    group.bench_function("tick_100", |b| bench_tick(100, b));
    group.bench_function("tick_1000", |b| bench_tick(1000, b));
    group.finish();
}

fn track_sampling(c: &mut Criterion) {
    let track = bounce_track();

    c.bench_function("sample_binary_search", |b| {
        let mut t = 0.0_f32;
        b.iter(|| {
            t = (t + 0.003) % 1.0;
            black_box(track.sample(black_box(t)));
        });
    });

    c.bench_function("sample_with_cursor", |b| {
        let mut cursor = KeyframeCursor::default();
        let mut t = 0.0_f32;
        b.iter(|| {
            t = (t + 0.003) % 1.0;
            black_box(track.sample_with_cursor(black_box(t), &mut cursor));
        });
    });
}

fn easing_curves(c: &mut Criterion) {
    c.bench_function("ease_elastic_in_out", |b| {
        let easing = Easing::Elastic(EaseMode::InOut);
        let mut t = 0.0_f32;
        b.iter(|| {
            t = (t + 0.001) % 1.0;
            black_box(easing.ease(black_box(t)));
        });
    });
}

criterion_group!(benches, registry_tick, track_sampling, easing_curves);
criterion_main!(benches);
