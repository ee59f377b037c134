// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use roadnet_geometry::{DrawSink, Frame, MapSnapshot};
use roadnet_view2d::{Clamped, PanZoom, Viewport};
use roadnet_viewer::{RoadMapViewer, ViewerConfig};

/// Sink that drops every frame.
struct Discard;

impl DrawSink for Discard {
    fn present(&mut self, frame: Frame) {
        black_box(frame);
    }
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/clamp");

    group.bench_function("zoom_in_out", |b| {
        b.iter_batched(
            || Clamped::new(Viewport::new(500.0)),
            |mut view| {
                for _ in 0..32 {
                    view.zoom(black_box(0.8));
                }
                for _ in 0..32 {
                    view.zoom(black_box(1.25));
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pan_against_edge", |b| {
        b.iter_batched(
            || {
                let mut view = Clamped::new(Viewport::new(500.0));
                view.zoom(0.25);
                view
            },
            |mut view| {
                for _ in 0..64 {
                    view.pan(black_box(Vec2::new(-3.0, 1.5)));
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let roads: Vec<u8> = (0..64 * 64).map(|i| (i % 16) as u8).collect();
    let snap = MapSnapshot::grid(64, 64, roads);

    c.bench_function("viewer/snapshot_then_zoom/64", |b| {
        b.iter_batched(
            || RoadMapViewer::new(ViewerConfig::unit(), Discard),
            |mut viewer| {
                viewer.on_snapshot(snap.clone());
                for _ in 0..8 {
                    viewer.zoom(0.7);
                }
                viewer.pan_pixels(Vec2::new(40.0, -25.0));
                black_box(viewer.revision());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_clamp, bench_session);
criterion_main!(benches);
