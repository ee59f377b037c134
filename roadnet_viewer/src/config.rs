// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use roadnet_geometry::{GeometryConfig, LayoutMode, RoadStyle};
use roadnet_view2d::{ClampMode, DEFAULT_VIEW_SIZE, ZoomLimits};

/// Configuration for a [`crate::RoadMapViewer`].
///
/// Start from one of the presets and adjust with the `with_*` setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Tile sizing policy.
    pub layout: LayoutMode,
    /// Stroke widths (virtual pixels) and colors.
    pub style: RoadStyle,
    /// Whether pan/zoom stays inside the default view.
    pub clamp: ClampMode,
    /// Zoom-in limit used while clamping.
    pub limits: ZoomLimits,
    /// Side of the square virtual canvas, in virtual pixels.
    pub view_size: f64,
}

impl ViewerConfig {
    /// One world unit per tile, 2 px grid lines, 6 px roads.
    #[must_use]
    pub fn unit() -> Self {
        Self::from_geometry(GeometryConfig::unit())
    }

    /// Tiles sized from the declared extent, 1 px grid lines, 3 px roads.
    #[must_use]
    pub fn metric() -> Self {
        Self::from_geometry(GeometryConfig::metric())
    }

    fn from_geometry(geometry: GeometryConfig) -> Self {
        Self {
            layout: geometry.layout,
            style: geometry.style,
            clamp: ClampMode::DefaultView,
            limits: ZoomLimits::default(),
            view_size: DEFAULT_VIEW_SIZE,
        }
    }

    /// Sets the stroke style.
    #[must_use]
    pub fn with_style(mut self, style: RoadStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the grid and road colors, keeping the widths.
    #[must_use]
    pub fn with_colors(mut self, grid: Color, road: Color) -> Self {
        self.style = self.style.with_colors(grid, road);
        self
    }

    /// Sets the clamp mode.
    #[must_use]
    pub fn with_clamp(mut self, clamp: ClampMode) -> Self {
        self.clamp = clamp;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the virtual canvas size.
    #[must_use]
    pub fn with_view_size(mut self, view_size: f64) -> Self {
        self.view_size = view_size;
        self
    }

    /// The geometry half of this configuration.
    #[must_use]
    pub fn geometry(&self) -> GeometryConfig {
        GeometryConfig {
            layout: self.layout,
            style: self.style,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::unit()
    }
}
