// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roadnet Geometry: tile road networks as drawable line segments.
//!
//! A road map arrives as a [`MapSnapshot`]: a `tiles_x x tiles_y` grid with
//! one byte per tile whose low four bits say which edges carry a road
//! ([`RoadMask`]: NORTH=1, EAST=2, SOUTH=4, WEST=8). This crate turns a
//! snapshot into a [`DrawList`] of world-space [`DrawObject`]s:
//!
//! - The tile lattice: `tiles_x + 1` vertical and `tiles_y + 1` horizontal
//!   grid lines.
//! - One segment per set bit, from the tile center to the midpoint of the
//!   matching edge.
//!
//! # Position in the stack
//!
//! - **Transport** delivers snapshots (out of scope here).
//! - **Geometry (this crate)**: [`TileLayout`] sizes tiles, [`TileFrame`]
//!   moves grid space (top-left origin, Y down) into world space (centered,
//!   Y up), and [`RoadGeometryBuilder`] emits the draw list plus the
//!   [`DefaultView`](roadnet_view2d::DefaultView) that frames the map.
//! - **Rasterizers** implement [`DrawSink`] and paint each [`Frame`] in
//!   order.
//!
//! # Example
//!
//! ```rust
//! use roadnet_geometry::{GeometryConfig, MapSnapshot, RoadGeometryBuilder};
//!
//! let snapshot = MapSnapshot::grid(2, 2, vec![1, 2, 4, 8]);
//! let builder = RoadGeometryBuilder::new(GeometryConfig::unit());
//!
//! // Stroke widths are given in virtual pixels; pass the viewport's current
//! // world units per pixel so they look the same at every zoom level.
//! let geometry = builder.build(&snapshot, 0.01);
//! assert_eq!(geometry.list.grid_lines().len(), 6);
//! assert_eq!(geometry.list.road_segments().len(), 4);
//! ```
//!
//! # Layout modes
//!
//! [`LayoutMode::Unit`] (the default) draws every tile as a `1 x 1` square,
//! so the map measures `tiles_x x tiles_y`. [`LayoutMode::Metric`] divides
//! the declared `width x height` among the tiles instead. Both are supported;
//! pick one per viewer.
//!
//! # Features
//!
//! - `std` (default): build against the standard library.
//! - `serde` (default): decode [`MapSnapshot`] from the transport message and
//!   encode [`DrawObject`] in the rasterizer wire form
//!   `{"type":"path","data":[x1,y1,x2,y2],"lineWidth":w,"color":"#rrggbb"}`.
//! - `libm`: float math for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod draw;
mod layout;
mod mask;
mod snapshot;
mod stream;
pub mod text;
mod transform;

pub use builder::{GeometryConfig, RoadGeometry, RoadGeometryBuilder, grid_line_count};
pub use draw::{CssColor, DrawKind, DrawObject, GRID_COLOR, Layer, ROAD_COLOR, RoadStyle};
pub use layout::{DEFAULT_VIEW_MARGIN, LayoutMode, TileLayout};
pub use mask::{Direction, RoadMask};
pub use snapshot::{MapSnapshot, SnapshotError};
pub use stream::{DrawList, DrawSink, Frame};
pub use transform::TileFrame;
