// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roadnet Viewer: the event loop glue between map snapshots, the clamped
//! viewport, and a [`DrawSink`](roadnet_geometry::DrawSink).
//!
//! [`RoadMapViewer`] reacts to three kinds of events:
//!
//! - A new [`MapSnapshot`](roadnet_geometry::MapSnapshot) arrives. If the map
//!   extent changed, the viewport is reset to frame it. The snapshot is
//!   rebuilt into a draw list and presented.
//! - The user zooms or pans. The request goes through
//!   [`Clamped`](roadnet_view2d::Clamped); if the view moved, the last
//!   snapshot is rebuilt at the new scale so stroke widths stay constant on
//!   screen.
//! - A snapshot without roads arrives. The canvas is cleared.
//!
//! Every presented [`Frame`](roadnet_geometry::Frame) carries a revision one
//! higher than the previous one.
//!
//! ```rust
//! use roadnet_geometry::{DrawSink, Frame, MapSnapshot};
//! use roadnet_viewer::{RoadMapViewer, ViewerConfig};
//!
//! #[derive(Default)]
//! struct Count(usize);
//!
//! impl DrawSink for Count {
//!     fn present(&mut self, frame: Frame) {
//!         self.0 = frame.list.len();
//!     }
//! }
//!
//! let mut viewer = RoadMapViewer::new(ViewerConfig::unit(), Count::default());
//! viewer.on_snapshot(MapSnapshot::grid(2, 2, vec![1, 2, 4, 8]));
//! assert_eq!(viewer.sink().0, 10);
//!
//! viewer.zoom(0.5);
//! assert_eq!(viewer.revision(), 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod viewer;

pub use config::ViewerConfig;
pub use viewer::RoadMapViewer;
