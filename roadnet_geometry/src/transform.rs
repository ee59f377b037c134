// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid space to world space.

use kurbo::{Affine, Line, Point, Size};

/// Maps tile-grid space into viewport world space.
///
/// Grid space has its origin at the top-left corner of the map with Y
/// growing down. World space is centered on the map with Y growing up:
///
/// ```text
/// (sx, sy) = (gx - W/2, -(gy - H/2))
/// ```
///
/// All map geometry goes through one `TileFrame`, so grid lines and road
/// segments always share the same convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileFrame {
    extent: Size,
    to_world: Affine,
    to_grid: Affine,
}

impl TileFrame {
    /// Creates the frame for a map of the given rendered extent.
    #[must_use]
    pub fn new(extent: Size) -> Self {
        let to_world = Affine::new([
            1.0,
            0.0,
            0.0,
            -1.0,
            -extent.width * 0.5,
            extent.height * 0.5,
        ]);
        Self {
            extent,
            to_world,
            to_grid: to_world.inverse(),
        }
    }

    /// Rendered extent of the map in world units.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Converts a grid-space point into world space.
    #[inline]
    #[must_use]
    pub fn to_world(&self, pt: Point) -> Point {
        self.to_world * pt
    }

    /// Converts a world-space point back into grid space.
    #[inline]
    #[must_use]
    pub fn to_grid(&self, pt: Point) -> Point {
        self.to_grid * pt
    }

    /// Converts both endpoints of a grid-space line.
    #[inline]
    #[must_use]
    pub fn line_to_world(&self, line: Line) -> Line {
        Line::new(self.to_world(line.p0), self.to_world(line.p1))
    }

    /// The affine transform used by [`TileFrame::to_world`].
    #[must_use]
    pub fn world_transform(&self) -> Affine {
        self.to_world
    }
}
