// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile sizing policies.

use kurbo::{Line, Point, Rect, Size};
use roadnet_view2d::DefaultView;

use crate::snapshot::MapSnapshot;
use crate::transform::TileFrame;

/// Margin applied to the larger map dimension when framing the whole map.
pub const DEFAULT_VIEW_MARGIN: f64 = 1.2;

/// How tile sizes are derived from a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// Tiles divide the declared `width x height`, so the rendered map has
    /// the declared world size.
    Metric,
    /// Every tile is `1 x 1`; the rendered map is `tiles_x x tiles_y` and
    /// the declared size is ignored.
    #[default]
    Unit,
}

/// Tile geometry of one snapshot under a [`LayoutMode`].
///
/// All rectangles and lines returned here are in grid space; use
/// [`TileLayout::frame`] to move them into world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayout {
    tile: Size,
    tiles_x: u32,
    tiles_y: u32,
}

impl TileLayout {
    /// Computes the layout of `snapshot`.
    ///
    /// An axis with zero tiles has zero tile size rather than an infinite one.
    #[must_use]
    pub fn new(snapshot: &MapSnapshot, mode: LayoutMode) -> Self {
        let (tiles_x, tiles_y) = (snapshot.tiles_x, snapshot.tiles_y);
        let per_tile = |len: f64, count: u32| {
            if count == 0 { 0.0 } else { len / f64::from(count) }
        };
        let tile = match mode {
            LayoutMode::Metric => Size::new(
                per_tile(snapshot.width, tiles_x),
                per_tile(snapshot.height, tiles_y),
            ),
            LayoutMode::Unit => Size::new(
                if tiles_x == 0 { 0.0 } else { 1.0 },
                if tiles_y == 0 { 0.0 } else { 1.0 },
            ),
        };
        Self {
            tile,
            tiles_x,
            tiles_y,
        }
    }

    /// Size of a single tile in world units.
    #[must_use]
    pub fn tile_size(&self) -> Size {
        self.tile
    }

    /// Number of tile columns and rows.
    #[must_use]
    pub fn tiles(&self) -> (u32, u32) {
        (self.tiles_x, self.tiles_y)
    }

    /// Rendered extent of the whole map.
    #[must_use]
    pub fn extent(&self) -> Size {
        Size::new(
            self.tile.width * f64::from(self.tiles_x),
            self.tile.height * f64::from(self.tiles_y),
        )
    }

    /// The grid-to-world frame for this layout.
    #[must_use]
    pub fn frame(&self) -> TileFrame {
        TileFrame::new(self.extent())
    }

    /// Grid-space rectangle of tile `(x, y)`.
    #[must_use]
    pub fn tile_rect(&self, x: u32, y: u32) -> Rect {
        let origin = Point::new(
            f64::from(x) * self.tile.width,
            f64::from(y) * self.tile.height,
        );
        Rect::from_origin_size(origin, self.tile)
    }

    /// Vertical grid line `i`, `0 <= i <= tiles_x`, spanning the full height.
    #[must_use]
    pub fn vertical_line(&self, i: u32) -> Line {
        let x = f64::from(i) * self.tile.width;
        Line::new((x, 0.0), (x, self.extent().height))
    }

    /// Horizontal grid line `j`, `0 <= j <= tiles_y`, spanning the full width.
    #[must_use]
    pub fn horizontal_line(&self, j: u32) -> Line {
        let y = f64::from(j) * self.tile.height;
        Line::new((0.0, y), (self.extent().width, y))
    }

    /// The view that frames the whole map with [`DEFAULT_VIEW_MARGIN`].
    ///
    /// Returns `None` for an empty or non-finite extent.
    #[must_use]
    pub fn default_view(&self) -> Option<DefaultView> {
        let extent = self.extent();
        let scale = extent.width.max(extent.height) * DEFAULT_VIEW_MARGIN;
        (scale.is_finite() && scale > 0.0).then(|| DefaultView::new(Point::ORIGIN, scale))
    }
}
