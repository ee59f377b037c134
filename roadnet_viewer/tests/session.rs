// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end viewer sessions against the recording sink.

use kurbo::Vec2;
use roadnet_geometry::{Layer, MapSnapshot};
use roadnet_render_ref::RecordingSink;
use roadnet_view2d::ClampMode;
use roadnet_viewer::{RoadMapViewer, ViewerConfig};
use tracing_test::traced_test;

fn metric_snapshot(roads: Vec<u8>) -> MapSnapshot {
    MapSnapshot {
        height: 4.0,
        width: 4.0,
        tiles_y: 2,
        tiles_x: 2,
        roads,
    }
}

#[test]
fn revisions_strictly_increase() {
    let mut viewer = RoadMapViewer::new(ViewerConfig::metric(), RecordingSink::new());
    viewer.on_snapshot(metric_snapshot(vec![1, 2, 4, 8]));
    viewer.zoom(0.5);
    viewer.pan(Vec2::new(0.5, 0.0));
    viewer.pan_pixels(Vec2::new(-10.0, 10.0));
    viewer.on_snapshot(metric_snapshot(vec![15, 0, 0, 15]));
    viewer.on_snapshot(metric_snapshot(Vec::new()));

    let sink = viewer.into_sink();
    assert_eq!(sink.dropped(), 0);
    let revisions: Vec<u64> = sink.presented_revisions().collect();
    assert_eq!(revisions, [1, 2, 3, 4, 5, 6]);
    assert!(sink.picture().is_empty());
}

#[test]
fn metric_session_widths_follow_scale() {
    let mut viewer = RoadMapViewer::new(ViewerConfig::metric(), RecordingSink::new());
    viewer.on_snapshot(metric_snapshot(vec![1, 2, 4, 8]));

    // 4.8 world units across 500 virtual pixels.
    let wupp = 4.8 / 500.0;
    let picture = viewer.sink().picture();
    assert_eq!(picture.len(), 10);
    for obj in picture {
        let px = match obj.layer {
            Layer::Grid => 1.0,
            Layer::Road => 3.0,
        };
        assert!((obj.line_width - px * wupp).abs() < 1e-12);
    }

    viewer.zoom(0.25);
    let wupp = viewer.viewport().world_units_per_pixel();
    assert!((wupp - 1.2 / 500.0).abs() < 1e-12);
    for obj in viewer.sink().picture() {
        assert!(obj.line_width < 3.0 * 4.8 / 500.0 * 0.5);
    }
}

#[test]
fn clamped_session_never_leaves_the_map() {
    let mut viewer = RoadMapViewer::new(ViewerConfig::unit(), RecordingSink::new());
    viewer.on_snapshot(MapSnapshot::grid(10, 10, vec![5; 100]));
    let bounds = viewer.viewport().default_view().extent();

    for _ in 0..20 {
        viewer.zoom(0.1);
    }
    let span = viewer.viewport().span();
    assert!(span.x >= 0.5 && span.y >= 0.5);

    for _ in 0..50 {
        viewer.pan(Vec2::new(-1000.0, 1000.0));
    }
    let extent = viewer.viewport().extent();
    assert!(extent.x0 >= bounds.x0);
    assert!(extent.y1 <= bounds.y1);

    viewer.set_clamp_mode(ClampMode::None);
    viewer.pan(Vec2::new(-1000.0, 0.0));
    assert!(viewer.viewport().xmin() < bounds.x0);
}

#[test]
#[traced_test]
fn short_snapshot_is_reported_and_drawn_partially() {
    let mut viewer = RoadMapViewer::new(ViewerConfig::unit(), RecordingSink::new());
    viewer.on_snapshot(MapSnapshot::grid(3, 3, vec![15, 15, 15, 15]));

    assert_eq!(viewer.skipped_tiles(), 5);
    assert_eq!(viewer.sink().picture().len(), 8 + 16);
    assert!(logs_contain("skipping remaining tiles"));
}

#[test]
#[traced_test]
fn empty_snapshot_is_logged() {
    let mut viewer = RoadMapViewer::new(ViewerConfig::unit(), RecordingSink::new());
    viewer.on_snapshot(MapSnapshot::grid(3, 3, Vec::new()));

    assert_eq!(viewer.revision(), 1);
    assert!(logs_contain("snapshot has no roads"));
}
