// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics emitted while degrading on malformed snapshots.

use roadnet_geometry::{MapSnapshot, RoadGeometryBuilder};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn short_roads_warn_and_keep_grid() {
    let snap = MapSnapshot::grid(3, 2, vec![15, 15, 15, 15]);
    let geometry = RoadGeometryBuilder::default().build(&snap, 1.0);

    assert_eq!(geometry.skipped_tiles, 2);
    assert_eq!(geometry.list.grid_lines().len(), 7);
    assert_eq!(geometry.list.road_segments().len(), 16);
    assert!(logs_contain("road data missing for tile"));
    assert!(logs_contain("index=4"));
}

#[traced_test]
#[test]
fn complete_snapshot_is_quiet() {
    let snap = MapSnapshot::grid(2, 2, vec![1, 2, 4, 8]);
    let geometry = RoadGeometryBuilder::default().build(&snap, 1.0);

    assert_eq!(geometry.skipped_tiles, 0);
    assert!(!logs_contain("road data missing"));
}

#[traced_test]
#[test]
fn empty_roads_note_the_clear() {
    let snap = MapSnapshot::grid(4, 4, Vec::new());
    assert!(RoadGeometryBuilder::default().build(&snap, 1.0).list.is_clear());
    assert!(logs_contain("snapshot has no roads"));
}
