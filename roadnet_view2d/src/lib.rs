// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roadnet View 2D: a span-based viewport with pan/zoom and clamping.
//!
//! This crate provides a small, headless model of the camera used by tile
//! map viewers. The view is described directly by its visible world extent
//! (`xmin..xmax`, `ymin..ymax`, Y-up) on a square virtual canvas of fixed
//! size. It focuses on:
//! - Camera state and a [`DefaultView`] that frames the whole map.
//! - Coordinate conversion between world space and virtual pixels.
//! - A [`PanZoom`] trait with an unconstrained base implementation
//!   ([`Viewport`]) and a clamping decorator ([`Clamped`]).
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to derive stroke widths from [`Viewport::world_units_per_pixel`] and to
//! route user gestures into [`PanZoom::zoom`] / [`PanZoom::pan`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use roadnet_view2d::{Clamped, DefaultView, PanZoom, Viewport};
//!
//! let mut view = Clamped::new(Viewport::new(500.0));
//! view.set_default_view(DefaultView::new(Point::ORIGIN, 20.0));
//!
//! // Zooming out past the default view is rejected.
//! view.zoom(2.0);
//! assert_eq!(view.viewport().span(), Vec2::new(20.0, 20.0));
//!
//! // Panning past the default extent is rejected on that axis.
//! view.zoom(0.5);
//! view.pan(Vec2::new(-1000.0, 0.0));
//! assert!(view.viewport().xmin() >= -10.0);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and always about the view center.
//! - Pan deltas are world units; use [`Viewport::view_to_world_vec`] to
//!   convert pointer deltas.
//! - Clamping is a decorator rather than a mode baked into the viewport, so
//!   other policies can wrap the same base operations.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod modes;
mod viewport;

pub use clamp::Clamped;
pub use modes::{ClampMode, DEFAULT_MIN_SPAN, ZoomLimits};
pub use viewport::{DEFAULT_VIEW_SIZE, DefaultView, PanZoom, Viewport, ViewportDebugInfo};
