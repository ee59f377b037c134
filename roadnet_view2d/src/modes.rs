// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for panning and zooming relative to the default view.
///
/// This enum is consulted by [`crate::Clamped`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the view may move/zoom freely.
    None,
    /// Keep the view inside the default view extent.
    ///
    /// Zooming out stops once either axis spans the default scale, zooming
    /// in stops at [`ZoomLimits::min_span`], and panning never moves an edge
    /// of the view past the matching edge of the default extent.
    #[default]
    DefaultView,
}

/// Smallest span a clamped view may shrink to, in world units.
pub const DEFAULT_MIN_SPAN: f64 = 0.5;

/// Zoom limits applied by [`crate::Clamped`].
///
/// The upper limit is not stored here: it is always the scale of the
/// viewport's current [`crate::DefaultView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Minimum span on either axis, in world units.
    pub min_span: f64,
}

impl ZoomLimits {
    /// Creates limits with the given minimum span.
    ///
    /// Non-finite or negative spans fall back to [`DEFAULT_MIN_SPAN`].
    #[must_use]
    pub fn new(min_span: f64) -> Self {
        if min_span.is_finite() && min_span >= 0.0 {
            Self { min_span }
        } else {
            Self::default()
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_span: DEFAULT_MIN_SPAN,
        }
    }
}
