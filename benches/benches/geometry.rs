// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use roadnet_geometry::{GeometryConfig, MapSnapshot, RoadGeometryBuilder, text};

/// Deterministic road bytes: every mask value appears, in a scrambled order.
fn roads(n: usize) -> Vec<u8> {
    (0..n).map(|i| ((i * 7 + i / 13) % 16) as u8).collect()
}

fn snapshot(side: u32) -> MapSnapshot {
    let n = (side * side) as usize;
    MapSnapshot::grid(side, side, roads(n))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/build");

    for side in [8_u32, 32, 128, 512] {
        let snap = snapshot(side);
        group.throughput(Throughput::Elements(snap.tile_count() as u64));

        for (name, config) in [
            ("unit", GeometryConfig::unit()),
            ("metric", GeometryConfig::metric()),
        ] {
            let builder = RoadGeometryBuilder::new(config);
            group.bench_with_input(BenchmarkId::new(name, side), &snap, |b, snap| {
                b.iter(|| black_box(builder.build(black_box(snap), 0.01)));
            });
        }
    }

    group.finish();
}

fn bench_short_roads(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/short_roads");

    // Half the masks missing: the build stops at the first gap.
    for side in [32_u32, 128] {
        let n = (side * side) as usize;
        let snap = MapSnapshot::grid(side, side, roads(n / 2));
        let builder = RoadGeometryBuilder::default();
        group.bench_with_input(BenchmarkId::from_parameter(side), &snap, |b, snap| {
            b.iter(|| black_box(builder.build(black_box(snap), 0.01)));
        });
    }

    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/wire");

    for side in [32_u32, 128] {
        let snap = snapshot(side);
        let json = serde_json::to_string(&snap).unwrap();
        let list = RoadGeometryBuilder::default().build(&snap, 0.01).list;
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode_snapshot", side), &json, |b, json| {
            b.iter(|| {
                let snap: MapSnapshot = serde_json::from_str(black_box(json)).unwrap();
                black_box(snap);
            });
        });
        group.bench_with_input(BenchmarkId::new("encode_draw_list", side), &list, |b, list| {
            b.iter(|| black_box(serde_json::to_string(black_box(list)).unwrap()));
        });
    }

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let snap = snapshot(128);
    c.bench_function("geometry/render_rows/128", |b| {
        b.iter(|| black_box(text::render_rows(black_box(&snap))));
    });
}

criterion_group!(benches, bench_build, bench_short_roads, bench_wire, bench_text);
criterion_main!(benches);
