// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roadnet Reference Sink.
//!
//! This crate provides a small, stateful implementation of [`DrawSink`]
//! for **frame recording and ordering checks**.
//!
//! It is intentionally *not* a rasterizer:
//! - It does **not** paint pixels.
//! - It keeps the most recent frame as "the picture" and a log of every
//!   presentation, so tests can assert on what a real canvas would show.
//! - It enforces the frame ordering contract: a frame whose revision is not
//!   newer than the current picture is dropped and logged.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use roadnet_geometry::{DrawObject, DrawSink, Frame, Layer};

/// Event recorded by the reference sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A frame replaced the picture.
    Presented {
        /// Revision of the frame.
        revision: u64,
        /// Number of grid lines painted.
        grid: usize,
        /// Number of road segments painted.
        roads: usize,
    },
    /// A frame arrived out of order and was discarded.
    Dropped {
        /// Revision of the discarded frame.
        revision: u64,
        /// Revision of the picture that stayed on screen.
        current: u64,
    },
}

impl Event {
    /// Returns `true` if this presentation cleared the canvas.
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Presented { grid: 0, roads: 0, .. })
    }
}

/// Simple reference implementation of a draw sink.
///
/// This sink:
/// - Keeps the latest accepted [`Frame`] as the current picture,
/// - Records an [`Event`] for every frame it receives,
/// - Drops frames whose revision is not newer than the current picture.
#[derive(Default, Debug)]
pub struct RecordingSink {
    current: Option<Frame>,
    events: Vec<Event>,
}

impl RecordingSink {
    /// Creates an empty sink with no picture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Clears recorded events but keeps the current picture.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the frame currently on screen, if any.
    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// Returns the objects currently on screen in paint order.
    pub fn picture(&self) -> &[DrawObject] {
        self.current.as_ref().map_or(&[], |f| f.list.objects())
    }

    /// Revisions of every accepted frame, oldest first.
    pub fn presented_revisions(&self) -> impl Iterator<Item = u64> + '_ {
        self.events.iter().filter_map(|e| match *e {
            Event::Presented { revision, .. } => Some(revision),
            Event::Dropped { .. } => None,
        })
    }

    /// Number of frames dropped for arriving out of order.
    pub fn dropped(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Dropped { .. }))
            .count()
    }
}

impl DrawSink for RecordingSink {
    fn present(&mut self, frame: Frame) {
        if let Some(current) = self.current.as_ref().map(|f| f.revision) {
            if frame.revision <= current {
                tracing::warn!(
                    revision = frame.revision,
                    current,
                    "dropping stale frame"
                );
                self.events.push(Event::Dropped {
                    revision: frame.revision,
                    current,
                });
                return;
            }
        }

        let grid = frame.list.grid_lines().len();
        let roads = frame.list.road_segments().len();
        debug_assert!(
            frame.list.iter().take(grid).all(|o| o.layer == Layer::Grid),
            "grid lines must precede road segments"
        );
        self.events.push(Event::Presented {
            revision: frame.revision,
            grid,
            roads,
        });
        self.current = Some(frame);
    }
}
