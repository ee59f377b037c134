// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};
use roadnet_geometry::{DrawList, DrawSink, Frame, MapSnapshot, RoadGeometryBuilder};
use roadnet_view2d::{ClampMode, Clamped, PanZoom, Viewport};

use crate::config::ViewerConfig;

/// Road map viewer controller.
///
/// Owns the clamped viewport, the last snapshot with roads, and the sink
/// that receives frames. Every handler takes `&mut self` and presents at
/// most one frame before returning.
#[derive(Debug)]
pub struct RoadMapViewer<S> {
    view: Clamped<Viewport>,
    builder: RoadGeometryBuilder,
    snapshot: Option<MapSnapshot>,
    skipped_tiles: usize,
    revision: u64,
    sink: S,
}

impl<S: DrawSink> RoadMapViewer<S> {
    /// Creates a viewer presenting to `sink`.
    ///
    /// Nothing is presented until the first snapshot arrives.
    pub fn new(config: ViewerConfig, sink: S) -> Self {
        let view = Clamped::new(Viewport::new(config.view_size))
            .with_mode(config.clamp)
            .with_limits(config.limits);
        Self {
            view,
            builder: RoadGeometryBuilder::new(config.geometry()),
            snapshot: None,
            skipped_tiles: 0,
            revision: 0,
            sink,
        }
    }

    /// Handles a new map snapshot.
    ///
    /// If the map's default view differs from the current one, the viewport
    /// is reset to it. A snapshot without roads clears the canvas and is not
    /// retained.
    pub fn on_snapshot(&mut self, snapshot: MapSnapshot) {
        if snapshot.is_empty() {
            tracing::debug!(%snapshot, "snapshot has no roads, clearing");
            self.snapshot = None;
            self.skipped_tiles = 0;
            self.present(DrawList::cleared());
            return;
        }

        if let Some(view) = self.builder.default_view(&snapshot) {
            if view != self.view.viewport().default_view() {
                tracing::debug!(
                    center_x = view.center.x,
                    center_y = view.center.y,
                    scale = view.scale,
                    "map extent changed, resetting view"
                );
                self.view.set_default_view(view);
            }
        }

        self.snapshot = Some(snapshot);
        self.redraw();
    }

    /// Zooms about the view center by `factor` and redraws.
    ///
    /// Values below `1.0` zoom in. Nothing is presented if the clamp rejects
    /// the request.
    pub fn zoom(&mut self, factor: f64) {
        let before = self.view.viewport().extent();
        self.view.zoom(factor);
        self.redraw_if_moved(before);
    }

    /// Pans by `delta` world units and redraws.
    pub fn pan(&mut self, delta: Vec2) {
        let before = self.view.viewport().extent();
        self.view.pan(delta);
        self.redraw_if_moved(before);
    }

    /// Pans by `delta_px` virtual pixels (Y down) and redraws.
    pub fn pan_pixels(&mut self, delta_px: Vec2) {
        let delta = self.view.viewport().view_to_world_vec(delta_px);
        self.pan(delta);
    }

    /// Rebuilds the retained snapshot at the current scale and presents it.
    ///
    /// Does nothing before the first snapshot with roads.
    pub fn redraw(&mut self) {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return;
        };
        let geometry = self
            .builder
            .build(snapshot, self.view.viewport().world_units_per_pixel());
        self.skipped_tiles = geometry.skipped_tiles;
        self.present(geometry.list);
    }

    fn redraw_if_moved(&mut self, before: Rect) {
        if self.view.viewport().extent() == before {
            tracing::trace!("view unchanged, skipping redraw");
            return;
        }
        self.redraw();
    }

    fn present(&mut self, list: DrawList) {
        self.revision += 1;
        tracing::trace!(revision = self.revision, objects = list.len(), "presenting frame");
        self.sink.present(Frame::new(self.revision, list));
    }

    /// Returns the current viewport.
    pub fn viewport(&self) -> &Viewport {
        self.view.viewport()
    }

    /// Returns the active clamp mode.
    pub fn clamp_mode(&self) -> ClampMode {
        self.view.mode()
    }

    /// Switches the clamp mode for later pan/zoom requests.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        self.view.set_mode(mode);
    }

    /// The retained snapshot, if any.
    pub fn snapshot(&self) -> Option<&MapSnapshot> {
        self.snapshot.as_ref()
    }

    /// Tiles skipped in the last frame because their mask was missing.
    pub fn skipped_tiles(&self) -> usize {
        self.skipped_tiles
    }

    /// Revision of the last presented frame; `0` before the first one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the viewer, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
