// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw objects handed to the rasterizer.

use core::fmt;

use kurbo::Line;
use peniko::Color;

/// Color of tile boundary lines (`#334155`).
pub const GRID_COLOR: Color = Color::from_rgb8(0x33, 0x41, 0x55);
/// Color of road segments (`#cbd5e1`).
pub const ROAD_COLOR: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);

/// Kind of a [`DrawObject`].
///
/// The rasterizer protocol only defines open paths today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// An open polyline, serialized as `"path"`.
    #[default]
    Path,
}

impl DrawKind {
    /// Wire name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
        }
    }
}

/// Which part of the picture a [`DrawObject`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Tile boundary lattice.
    Grid,
    /// Road segment inside a tile.
    Road,
}

/// Stroke widths and colors for map geometry.
///
/// Widths are in virtual pixels; the builder multiplies them by the current
/// world units per pixel so strokes look the same at every zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadStyle {
    /// Grid line color.
    pub grid_color: Color,
    /// Road segment color.
    pub road_color: Color,
    /// Grid line width in virtual pixels.
    pub grid_width_px: f64,
    /// Road segment width in virtual pixels.
    pub road_width_px: f64,
}

impl RoadStyle {
    /// Style used with [`crate::LayoutMode::Unit`]: 2 px grid, 6 px roads.
    pub const fn unit() -> Self {
        Self {
            grid_color: GRID_COLOR,
            road_color: ROAD_COLOR,
            grid_width_px: 2.0,
            road_width_px: 6.0,
        }
    }

    /// Style used with [`crate::LayoutMode::Metric`]: 1 px grid, 3 px roads.
    pub const fn metric() -> Self {
        Self {
            grid_width_px: 1.0,
            road_width_px: 3.0,
            ..Self::unit()
        }
    }

    /// Returns a copy of `self` with the given colors.
    #[must_use]
    pub const fn with_colors(mut self, grid: Color, road: Color) -> Self {
        self.grid_color = grid;
        self.road_color = road;
        self
    }
}

impl Default for RoadStyle {
    fn default() -> Self {
        Self::unit()
    }
}

/// One stroked line segment in world space.
///
/// Objects carry no identity: a list of them is always the complete picture
/// for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawObject {
    /// Object kind.
    pub kind: DrawKind,
    /// Grid line or road segment.
    pub layer: Layer,
    /// Segment endpoints in world space.
    pub line: Line,
    /// Stroke width in world units.
    pub line_width: f64,
    /// Stroke color.
    pub color: Color,
}

impl DrawObject {
    /// Creates a path object.
    #[inline]
    pub fn path(layer: Layer, line: Line, line_width: f64, color: Color) -> Self {
        Self {
            kind: DrawKind::Path,
            layer,
            line,
            line_width,
            color,
        }
    }

    /// Endpoints as `[x1, y1, x2, y2]`.
    #[inline]
    pub fn data(&self) -> [f64; 4] {
        [self.line.p0.x, self.line.p0.y, self.line.p1.x, self.line.p1.y]
    }

    /// The stroke color formatted for the rasterizer.
    #[inline]
    pub fn css_color(&self) -> CssColor {
        CssColor(self.color)
    }
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not opaque.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssColor(pub Color);

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0.to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b)?;
        if c.a != u8::MAX {
            write!(f, "{:02x}", c.a)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{CssColor, DrawObject};

    impl Serialize for CssColor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for DrawObject {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut s = serializer.serialize_struct("DrawObject", 4)?;
            s.serialize_field("type", self.kind.as_str())?;
            s.serialize_field("data", &self.data())?;
            s.serialize_field("lineWidth", &self.line_width)?;
            s.serialize_field("color", &self.css_color())?;
            s.end()
        }
    }
}
