// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for geometry building.

use kurbo::{Point, Size};
use proptest::prelude::*;
use roadnet_geometry::{
    GeometryConfig, Layer, MapSnapshot, RoadGeometryBuilder, RoadMask, TileFrame, TileLayout,
    grid_line_count,
};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn configs() -> [GeometryConfig; 2] {
    [GeometryConfig::unit(), GeometryConfig::metric()]
}

proptest! {
    #[test]
    fn grid_line_count_matches_lattice(
        tiles_x in 0_u32..40,
        tiles_y in 0_u32..40,
        fill in any::<u8>(),
    ) {
        // One extra mask keeps `roads` non-empty even for an empty grid.
        let len = (tiles_x * tiles_y) as usize + 1;
        let snap = MapSnapshot {
            height: 12.0,
            width: 30.0,
            tiles_y,
            tiles_x,
            roads: vec![fill; len],
        };
        for config in configs() {
            let geometry = RoadGeometryBuilder::new(config).build(&snap, 0.1);
            prop_assert_eq!(
                geometry.list.grid_lines().len(),
                (tiles_x as usize + 1) + (tiles_y as usize + 1)
            );
            prop_assert_eq!(geometry.list.grid_lines().len(), grid_line_count(tiles_x, tiles_y));
        }
    }

    #[test]
    fn road_count_is_total_popcount(
        tiles_x in 1_u32..12,
        tiles_y in 1_u32..12,
        seed in prop::collection::vec(any::<u8>(), 144),
    ) {
        let roads: Vec<u8> = seed.into_iter().take((tiles_x * tiles_y) as usize).collect();
        let expected: usize = roads.iter().map(|b| (b & 0x0F).count_ones() as usize).sum();
        let snap = MapSnapshot::grid(tiles_x, tiles_y, roads);

        let geometry = RoadGeometryBuilder::default().build(&snap, 1.0);
        prop_assert_eq!(geometry.list.road_segments().len(), expected);
        prop_assert_eq!(snap.segment_count(), expected);
        prop_assert!(geometry.list.road_segments().iter().all(|o| o.layer == Layer::Road));
        prop_assert!(geometry.list.grid_lines().iter().all(|o| o.layer == Layer::Grid));
    }

    #[test]
    fn single_tile_segments_match_popcount(mask in 0_u8..16) {
        let snap = MapSnapshot::grid(1, 1, vec![mask]);
        let geometry = RoadGeometryBuilder::default().build(&snap, 1.0);
        prop_assert_eq!(geometry.list.road_segments().len(), mask.count_ones() as usize);
        prop_assert_eq!(geometry.list.len(), 4 + mask.count_ones() as usize);
    }

    #[test]
    fn segments_start_at_tile_center(
        tiles_x in 1_u32..8,
        tiles_y in 1_u32..8,
        x in 0_u32..8,
        y in 0_u32..8,
    ) {
        let (x, y) = (x % tiles_x, y % tiles_y);
        let mut roads = vec![0_u8; (tiles_x * tiles_y) as usize];
        roads[(y * tiles_x + x) as usize] = (RoadMask::NORTH | RoadMask::EAST).bits();
        let snap = MapSnapshot {
            height: 7.0,
            width: 11.0,
            tiles_y,
            tiles_x,
            roads,
        };

        for config in configs() {
            let builder = RoadGeometryBuilder::new(config);
            let layout = builder.layout(&snap);
            let frame = layout.frame();
            let rect = layout.tile_rect(x, y);
            let center = frame.to_world(rect.center());
            let top = frame.to_world(Point::new(rect.center().x, rect.y0));
            let right = frame.to_world(Point::new(rect.x1, rect.center().y));

            let geometry = builder.build(&snap, 1.0);
            let roads = geometry.list.road_segments();
            prop_assert_eq!(roads.len(), 2);
            prop_assert!(close(roads[0].line.p0, center));
            prop_assert!(close(roads[0].line.p1, top));
            prop_assert!(close(roads[1].line.p0, center));
            prop_assert!(close(roads[1].line.p1, right));
        }
    }

    #[test]
    fn tile_frame_roundtrips(
        w in 0.0_f64..1e4,
        h in 0.0_f64..1e4,
        gx in -1e4_f64..1e4,
        gy in -1e4_f64..1e4,
    ) {
        let frame = TileFrame::new(Size::new(w, h));
        let world = frame.to_world(Point::new(gx, gy));
        prop_assert!((world.x - (gx - w / 2.0)).abs() < 1e-6);
        prop_assert!((world.y + (gy - h / 2.0)).abs() < 1e-6);

        let back = frame.to_grid(world);
        prop_assert!((back.x - gx).abs() < 1e-6);
        prop_assert!((back.y - gy).abs() < 1e-6);
    }

    #[test]
    fn geometry_stays_inside_extent(tiles_x in 1_u32..20, tiles_y in 1_u32..20) {
        let snap = MapSnapshot::grid(tiles_x, tiles_y, vec![15; (tiles_x * tiles_y) as usize]);
        let layout = TileLayout::new(&snap, GeometryConfig::unit().layout);
        let extent = layout.extent();
        let half = Size::new(extent.width / 2.0, extent.height / 2.0);
        let geometry = RoadGeometryBuilder::default().build(&snap, 1.0);
        for obj in &geometry.list {
            for p in [obj.line.p0, obj.line.p1] {
                prop_assert!(p.x.abs() <= half.width + 1e-9);
                prop_assert!(p.y.abs() <= half.height + 1e-9);
            }
        }
    }
}

#[test]
fn four_tile_compass_scenario() {
    let snap = MapSnapshot {
        height: 4.0,
        width: 4.0,
        tiles_y: 2,
        tiles_x: 2,
        roads: vec![1, 2, 4, 8],
    };
    let builder = RoadGeometryBuilder::new(GeometryConfig::unit());
    let geometry = builder.build(&snap, 1.0);

    assert_eq!(geometry.list.grid_lines().len(), 6);
    let roads = geometry.list.road_segments();
    assert_eq!(roads.len(), 4);

    // Direction of each segment relative to its tile center.
    let axis = |v: f64| if v.abs() < 1e-9 { 0.0 } else { v.signum() };
    let dirs: Vec<(f64, f64)> = roads
        .iter()
        .map(|o| {
            let d = o.line.p1 - o.line.p0;
            (axis(d.x), axis(d.y))
        })
        .collect();
    // World space is Y-up: north points to +y.
    assert_eq!(dirs, [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0)]);
}

#[test]
fn empty_roads_produce_empty_list() {
    for (tiles_x, tiles_y) in [(0, 0), (1, 1), (5, 3)] {
        let snap = MapSnapshot::grid(tiles_x, tiles_y, Vec::new());
        for config in configs() {
            assert!(RoadGeometryBuilder::new(config).build(&snap, 1.0).list.is_empty());
        }
    }
}
