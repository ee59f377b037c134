// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Default width and height of the virtual canvas, in virtual pixels.
pub const DEFAULT_VIEW_SIZE: f64 = 500.0;

/// The camera extent that frames a whole map.
///
/// A default view is a square of side `scale` centered on `center`, in world
/// units. It is both the extent the viewport resets to and the boundary used
/// by [`crate::Clamped`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultView {
    /// World-space center of the view.
    pub center: Point,
    /// Span of the view on each axis, in world units.
    pub scale: f64,
}

impl DefaultView {
    /// Creates a default view centered on `center` spanning `scale` world units.
    #[must_use]
    pub const fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Returns the world-space rectangle covered by this view.
    #[must_use]
    pub fn extent(&self) -> Rect {
        let half = self.scale * 0.5;
        Rect::new(
            self.center.x - half,
            self.center.y - half,
            self.center.x + half,
            self.center.y + half,
        )
    }

    fn is_valid(&self) -> bool {
        self.center.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }
}

impl Default for DefaultView {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 40.0)
    }
}

/// Pan and zoom operations over a [`Viewport`].
///
/// [`Viewport`] implements this trait with unconstrained behavior. Policies
/// such as [`crate::Clamped`] wrap another implementation and decide whether
/// (and how far) a request is forwarded.
pub trait PanZoom {
    /// Returns the viewport state after all previous operations.
    fn viewport(&self) -> &Viewport;

    /// Re-initializes the viewport to `view` and records it as the default.
    fn set_default_view(&mut self, view: DefaultView);

    /// Multiplies the current span by `factor` about the view center.
    ///
    /// Values below `1.0` zoom in, values above `1.0` zoom out.
    fn zoom(&mut self, factor: f64);

    /// Translates the view by `delta` world units.
    fn pan(&mut self, delta: Vec2);
}

/// 2D viewport over a Y-up world plane.
///
/// `Viewport` tracks the visible world extent (`xmin..xmax`, `ymin..ymax`)
/// shown on a square virtual canvas of `size` virtual pixels, plus the
/// [`DefaultView`] that frames the current map. It can be used to:
/// - Convert points between world space and virtual-pixel space.
/// - Derive line widths that stay constant on screen via
///   [`Viewport::world_units_per_pixel`].
/// - Pan and zoom the view; see [`PanZoom`].
#[derive(Clone, Debug)]
pub struct Viewport {
    extent: Rect,
    size: f64,
    default_view: DefaultView,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport on a canvas of `size` virtual pixels.
    ///
    /// The viewport starts at [`DefaultView::default`]. A non-positive or
    /// non-finite `size` falls back to [`DEFAULT_VIEW_SIZE`].
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self::with_default_view(size, DefaultView::default())
    }

    /// Creates a viewport showing `view`.
    ///
    /// An invalid `view` (non-finite center, non-positive scale) falls back
    /// to [`DefaultView::default`].
    #[must_use]
    pub fn with_default_view(size: f64, view: DefaultView) -> Self {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            DEFAULT_VIEW_SIZE
        };
        let view = if view.is_valid() {
            view
        } else {
            DefaultView::default()
        };
        let mut vp = Self {
            extent: view.extent(),
            size,
            default_view: view,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the visible world extent.
    #[must_use]
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Left edge of the visible extent.
    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.extent.x0
    }

    /// Right edge of the visible extent.
    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.extent.x1
    }

    /// Bottom edge of the visible extent (world space is Y-up).
    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.extent.y0
    }

    /// Top edge of the visible extent.
    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.extent.y1
    }

    /// Returns the visible span on each axis, in world units.
    #[must_use]
    pub fn span(&self) -> Vec2 {
        Vec2::new(self.extent.width(), self.extent.height())
    }

    /// Returns the center of the visible extent.
    #[must_use]
    pub fn center(&self) -> Point {
        self.extent.center()
    }

    /// Returns the size of the virtual canvas, in virtual pixels.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the current default view.
    #[must_use]
    pub fn default_view(&self) -> DefaultView {
        self.default_view
    }

    /// Records `view` as the default and resets the extent to it.
    ///
    /// Invalid views are ignored.
    pub fn set_default_view(&mut self, view: DefaultView) {
        if !view.is_valid() {
            tracing::trace!(scale = view.scale, "ignoring invalid default view");
            return;
        }
        self.default_view = view;
        self.extent = view.extent();
        self.rebuild_transforms();
    }

    /// Multiplies the span on both axes by `factor`, keeping the center fixed.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            return;
        }
        let center = self.extent.center();
        let half = self.span() * (factor * 0.5);
        let extent = Rect::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        );
        if extent.width() <= 0.0 || extent.height() <= 0.0 {
            return;
        }
        self.extent = extent;
        self.rebuild_transforms();
    }

    /// Translates the view by `delta` world units.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.extent = self.extent + delta;
        self.rebuild_transforms();
    }

    /// Returns the current world-units-per-pixel ratio.
    ///
    /// Multiply a width in virtual pixels by this value to get a stroke width
    /// in world units that looks the same at every zoom level.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        self.extent.width() / self.size
    }

    /// Converts a pixel-space delta (Y down) into a world-space delta (Y up).
    #[must_use]
    pub fn view_to_world_vec(&self, delta: Vec2) -> Vec2 {
        let wupp = self.world_units_per_pixel();
        Vec2::new(delta.x * wupp, -delta.y * self.extent.height() / self.size)
    }

    /// Converts a world-space point into virtual-pixel coordinates.
    ///
    /// The top-left corner of the visible extent maps to `(0, 0)`.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a virtual-pixel point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            extent: self.extent,
            size: self.size,
            default_view: self.default_view,
            default_extent: self.default_view.extent(),
            world_units_per_pixel: self.world_units_per_pixel(),
        }
    }

    fn rebuild_transforms(&mut self) {
        let sx = self.size / self.extent.width();
        let sy = self.size / self.extent.height();
        // World -> view: shift the top-left corner to the origin, then scale
        // with a Y flip.
        self.world_to_view = Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            -self.extent.x0 * sx,
            self.extent.y1 * sy,
        ]);
        self.view_to_world = self.world_to_view.inverse();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_SIZE)
    }
}

impl PanZoom for Viewport {
    fn viewport(&self) -> &Viewport {
        self
    }

    fn set_default_view(&mut self, view: DefaultView) {
        Self::set_default_view(self, view);
    }

    fn zoom(&mut self, factor: f64) {
        self.zoom_by(factor);
    }

    fn pan(&mut self, delta: Vec2) {
        self.pan_by(delta);
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Visible world extent.
    pub extent: Rect,
    /// Virtual canvas size in virtual pixels.
    pub size: f64,
    /// Current default view.
    pub default_view: DefaultView,
    /// World extent of the default view.
    pub default_extent: Rect,
    /// World units per virtual pixel.
    pub world_units_per_pixel: f64,
}
