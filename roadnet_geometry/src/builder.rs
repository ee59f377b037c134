// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot to draw objects.

use kurbo::Line;
use roadnet_view2d::DefaultView;

use crate::draw::{DrawObject, Layer, RoadStyle};
use crate::layout::{LayoutMode, TileLayout};
use crate::mask::RoadMask;
use crate::snapshot::{MapSnapshot, SnapshotError};
use crate::stream::DrawList;

/// Layout and style used by [`RoadGeometryBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryConfig {
    /// Tile sizing policy.
    pub layout: LayoutMode,
    /// Stroke widths and colors.
    pub style: RoadStyle,
}

impl GeometryConfig {
    /// Unit tiles with the unit style.
    pub const fn unit() -> Self {
        Self {
            layout: LayoutMode::Unit,
            style: RoadStyle::unit(),
        }
    }

    /// Metric tiles with the metric style.
    pub const fn metric() -> Self {
        Self {
            layout: LayoutMode::Metric,
            style: RoadStyle::metric(),
        }
    }

    /// Returns a copy of `self` using `style`.
    #[must_use]
    pub const fn with_style(mut self, style: RoadStyle) -> Self {
        self.style = style;
        self
    }
}

/// Output of [`RoadGeometryBuilder::build`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadGeometry {
    /// Draw objects in paint order.
    pub list: DrawList,
    /// View framing the whole map, or `None` when the picture was cleared.
    pub default_view: Option<DefaultView>,
    /// Tiles skipped because `roads` had no entry for them.
    pub skipped_tiles: usize,
}

impl RoadGeometry {
    /// A result that clears the canvas.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            list: DrawList::cleared(),
            default_view: None,
            skipped_tiles: 0,
        }
    }
}

/// Number of grid lines drawn for a `tiles_x x tiles_y` map.
#[must_use]
pub const fn grid_line_count(tiles_x: u32, tiles_y: u32) -> usize {
    tiles_x as usize + 1 + tiles_y as usize + 1
}

/// Decodes tile bitmasks into grid lines and road segments.
///
/// Building never fails. Malformed input degrades to a partial or empty
/// picture with a `tracing` diagnostic:
/// - Empty `roads` produces an empty list (clear the canvas).
/// - Tiles past the end of `roads` are skipped; the grid is still drawn.
/// - A non-finite declared extent clears the canvas in metric layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoadGeometryBuilder {
    config: GeometryConfig,
}

impl RoadGeometryBuilder {
    /// Creates a builder using `config`.
    #[must_use]
    pub const fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Returns the builder configuration.
    #[must_use]
    pub const fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Returns the layout `snapshot` gets under this builder.
    #[must_use]
    pub fn layout(&self, snapshot: &MapSnapshot) -> TileLayout {
        TileLayout::new(snapshot, self.config.layout)
    }

    /// The view framing `snapshot`, or `None` if it would be cleared.
    #[must_use]
    pub fn default_view(&self, snapshot: &MapSnapshot) -> Option<DefaultView> {
        if snapshot.is_empty() {
            return None;
        }
        self.layout(snapshot).default_view()
    }

    /// Builds the draw list for `snapshot`.
    ///
    /// `world_units_per_pixel` is the current on-screen scale; stroke widths
    /// from [`RoadStyle`] are multiplied by it.
    pub fn build(&self, snapshot: &MapSnapshot, world_units_per_pixel: f64) -> RoadGeometry {
        if snapshot.is_empty() {
            tracing::debug!(%snapshot, "snapshot has no roads, clearing");
            return RoadGeometry::cleared();
        }
        match snapshot.validate() {
            Err(err @ SnapshotError::InvalidExtent { .. })
                if self.config.layout == LayoutMode::Metric =>
            {
                tracing::warn!(%err, "cannot lay out snapshot, clearing");
                return RoadGeometry::cleared();
            }
            Err(err) => tracing::debug!(%err, "building geometry from inconsistent snapshot"),
            Ok(()) => {}
        }

        let wupp = if world_units_per_pixel.is_finite() && world_units_per_pixel > 0.0 {
            world_units_per_pixel
        } else {
            tracing::trace!(world_units_per_pixel, "invalid scale, using 1.0");
            1.0
        };
        let style = &self.config.style;
        let grid_width = style.grid_width_px * wupp;
        let road_width = style.road_width_px * wupp;

        let layout = self.layout(snapshot);
        let frame = layout.frame();
        let (tiles_x, tiles_y) = layout.tiles();
        let mut list = DrawList::with_capacity(
            grid_line_count(tiles_x, tiles_y),
            snapshot.segment_count(),
        );

        let grid = |line: Line| {
            DrawObject::path(
                Layer::Grid,
                frame.line_to_world(line),
                grid_width,
                style.grid_color,
            )
        };
        for i in 0..=tiles_x {
            list.push_grid(grid(layout.vertical_line(i)));
        }
        for j in 0..=tiles_y {
            list.push_grid(grid(layout.horizontal_line(j)));
        }

        let mut skipped_tiles = 0;
        'rows: for y in 0..tiles_y {
            for x in 0..tiles_x {
                let index = y as usize * tiles_x as usize + x as usize;
                let Some(&byte) = snapshot.roads.get(index) else {
                    // Row-major order: every later tile is missing too.
                    skipped_tiles = snapshot.tile_count() - index;
                    tracing::warn!(
                        x,
                        y,
                        index,
                        missing = skipped_tiles,
                        "road data missing for tile, skipping remaining tiles"
                    );
                    break 'rows;
                };
                let rect = layout.tile_rect(x, y);
                let center = frame.to_world(rect.center());
                for dir in RoadMask::from_wire(byte).directions() {
                    let end = frame.to_world(dir.edge_midpoint(rect));
                    list.push_road(DrawObject::path(
                        Layer::Road,
                        Line::new(center, end),
                        road_width,
                        style.road_color,
                    ));
                }
            }
        }

        RoadGeometry {
            list,
            default_view: layout.default_view(),
            skipped_tiles,
        }
    }
}
