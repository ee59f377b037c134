// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::modes::{ClampMode, ZoomLimits};
use crate::viewport::{DefaultView, PanZoom, Viewport};

/// Pan/zoom decorator that keeps the view inside the default view extent.
///
/// `Clamped` wraps any [`PanZoom`] implementation. Each request is checked
/// against the wrapped viewport's *current* extent before it is forwarded, so
/// a single call can never overshoot the bounds:
///
/// - Zooming out is rejected once either axis already spans the default
///   scale; zooming in is rejected once either axis is already at
///   [`ZoomLimits::min_span`]. Otherwise the factor is limited so the result
///   stays inside `[min_span, scale]`.
/// - Panning zeroes the delta on any axis where it would move the view edge
///   past the matching edge of the default extent.
///
/// Rejected requests are no-ops, logged at `trace` level.
#[derive(Clone, Debug)]
pub struct Clamped<V> {
    inner: V,
    mode: ClampMode,
    limits: ZoomLimits,
}

impl<V: PanZoom> Clamped<V> {
    /// Wraps `inner` with [`ClampMode::DefaultView`] and default limits.
    #[must_use]
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            mode: ClampMode::default(),
            limits: ZoomLimits::default(),
        }
    }

    /// Returns a copy of `self` using `mode`.
    #[must_use]
    pub fn with_mode(mut self, mode: ClampMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy of `self` using `limits`.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn mode(&self) -> ClampMode {
        self.mode
    }

    /// Sets the clamp mode.
    pub fn set_mode(&mut self, mode: ClampMode) {
        self.mode = mode;
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the wrapped implementation.
    #[must_use]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwraps the decorator.
    #[must_use]
    pub fn into_inner(self) -> V {
        self.inner
    }

    fn clamp_factor(&self, factor: f64) -> Option<f64> {
        let vp = self.inner.viewport();
        let span = vp.span();
        let max_span = vp.default_view().scale;
        let min_span = self.limits.min_span;

        if factor > 1.0 {
            if span.x >= max_span || span.y >= max_span {
                return None;
            }
            Some(factor.min(max_span / span.x.max(span.y)))
        } else if factor < 1.0 {
            if span.x <= min_span || span.y <= min_span {
                return None;
            }
            Some(factor.max(min_span / span.x.min(span.y)))
        } else {
            None
        }
    }

    fn clamp_delta(&self, delta: Vec2) -> Vec2 {
        let vp = self.inner.viewport();
        let bounds = vp.default_view().extent();
        let extent = vp.extent();
        Vec2::new(
            clamp_axis(extent.x0, extent.x1, delta.x, bounds.x0, bounds.x1),
            clamp_axis(extent.y0, extent.y1, delta.y, bounds.y0, bounds.y1),
        )
    }
}

/// Zeroes `delta` if it would move `[min, max]` past `[lower, upper]`.
fn clamp_axis(min: f64, max: f64, delta: f64, lower: f64, upper: f64) -> f64 {
    if delta < 0.0 && min + delta < lower {
        0.0
    } else if delta > 0.0 && max + delta > upper {
        0.0
    } else {
        delta
    }
}

impl<V: PanZoom> PanZoom for Clamped<V> {
    fn viewport(&self) -> &Viewport {
        self.inner.viewport()
    }

    fn set_default_view(&mut self, view: DefaultView) {
        self.inner.set_default_view(view);
    }

    fn zoom(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if self.mode == ClampMode::None {
            self.inner.zoom(factor);
            return;
        }
        match self.clamp_factor(factor) {
            Some(f) => self.inner.zoom(f),
            None => tracing::trace!(factor, "zoom rejected at limit"),
        }
    }

    fn pan(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        let delta = match self.mode {
            ClampMode::None => delta,
            ClampMode::DefaultView => self.clamp_delta(delta),
        };
        if delta != Vec2::ZERO {
            self.inner.pan(delta);
        }
    }
}
