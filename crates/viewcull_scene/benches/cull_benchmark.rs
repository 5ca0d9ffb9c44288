//! # Cull Pass Benchmark
//!
//! A tiled world of layers, each holding a grid of sprites, viewed through a
//! screen-sized window. Measures one cull pass per frame.
//!
//! Run with: `cargo bench --package viewcull_scene`

// Benchmarks don't need docs
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use viewcull::{Culler, CullerConfig, Rect};
use viewcull_scene::{Affine2, NodeId, Scene};

/// Sprite edge length in world units.
const SPRITE: f32 = 32.0;

/// Screen-sized view.
const VIEW: Rect = Rect::from_edges(0.0, 0.0, 1920.0, 1080.0);

/// Builds `layers` layers of `side * side` sprites, laid out left to right.
#[allow(clippy::cast_precision_loss)]
fn build_world(layers: usize, side: usize) -> (Scene, Vec<NodeId>) {
    let mut scene = Scene::with_capacity(layers * (side * side + 1));
    let mut roots = Vec::with_capacity(layers);
    let layer_extent = side as f32 * SPRITE;

    for layer_index in 0..layers {
        let layer = scene.spawn(None);
        scene
            .set_transform(layer, Affine2::translation(layer_index as f32 * layer_extent, 0.0))
            .unwrap();

        for row in 0..side {
            for col in 0..side {
                let sprite = scene.spawn(Some(Rect::new(0.0, 0.0, SPRITE, SPRITE)));
                scene
                    .set_transform(
                        sprite,
                        Affine2::translation(col as f32 * SPRITE, row as f32 * SPRITE),
                    )
                    .unwrap();
                scene.add_child(layer, sprite).unwrap();
            }
        }
        roots.push(layer);
    }

    (scene, roots)
}

/// Recursive pass with transform refresh, as a render loop would run it.
fn bench_cull_recursive(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull_recursive");

    for layers in [4, 16, 64] {
        let (mut scene, roots) = build_world(layers, 16);
        let mut culler = Culler::new();
        culler.register_all(roots);

        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, _| {
            b.iter(|| {
                culler.cull(&mut scene, black_box(&VIEW), false);
                culler.last_stats().hidden
            });
        });
    }

    group.finish();
}

/// Same world with transforms already refreshed.
fn bench_cull_skip_refresh(c: &mut Criterion) {
    let (mut scene, roots) = build_world(16, 16);
    let mut culler = Culler::new();
    culler.register_all(roots);
    culler.cull(&mut scene, &VIEW, false);

    c.bench_function("cull_skip_refresh_16_layers", |b| {
        b.iter(|| {
            culler.cull(&mut scene, black_box(&VIEW), true);
            culler.last_stats().visited
        });
    });
}

/// Layer-level culling only.
fn bench_cull_flat(c: &mut Criterion) {
    let (mut scene, roots) = build_world(16, 16);
    let mut culler = Culler::with_config(CullerConfig::default().with_recursive(false));
    culler.register_all(roots);

    c.bench_function("cull_flat_16_layers", |b| {
        b.iter(|| {
            culler.cull(&mut scene, black_box(&VIEW), false);
            culler.last_stats().visible
        });
    });
}

fn bench_uncull(c: &mut Criterion) {
    let (mut scene, roots) = build_world(16, 16);
    let mut culler = Culler::new();
    culler.register_all(roots);

    c.bench_function("uncull_16_layers", |b| {
        b.iter(|| {
            culler.uncull(black_box(&mut scene));
        });
    });
}

criterion_group!(
    benches,
    bench_cull_recursive,
    bench_cull_skip_refresh,
    bench_cull_flat,
    bench_uncull
);
criterion_main!(benches);
