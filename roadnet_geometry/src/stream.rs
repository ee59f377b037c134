// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered draw-object stream and the rasterizer boundary.

use alloc::vec::Vec;

use crate::draw::{DrawObject, Layer};

/// Ordered draw objects for one frame: grid lines first, then road segments.
///
/// Painting in list order leaves roads above the grid. An empty list means
/// "clear the canvas".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    objects: Vec<DrawObject>,
    grid_len: usize,
}

impl DrawList {
    /// An empty list that clears the canvas.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            objects: Vec::new(),
            grid_len: 0,
        }
    }

    /// Creates an empty list with room for the given number of objects.
    #[must_use]
    pub fn with_capacity(grid: usize, roads: usize) -> Self {
        Self {
            objects: Vec::with_capacity(grid + roads),
            grid_len: 0,
        }
    }

    /// Appends a grid line.
    ///
    /// Grid lines are kept ahead of every road segment.
    pub fn push_grid(&mut self, obj: DrawObject) {
        debug_assert_eq!(obj.layer, Layer::Grid, "grid object expected");
        self.objects.insert(self.grid_len, obj);
        self.grid_len += 1;
    }

    /// Appends a road segment.
    pub fn push_road(&mut self, obj: DrawObject) {
        debug_assert_eq!(obj.layer, Layer::Road, "road object expected");
        self.objects.push(obj);
    }

    /// Returns `true` if this list clears the canvas.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.objects.is_empty()
    }

    /// Total number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the list holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All objects in paint order.
    #[must_use]
    pub fn objects(&self) -> &[DrawObject] {
        &self.objects
    }

    /// The grid-line prefix of the list.
    #[must_use]
    pub fn grid_lines(&self) -> &[DrawObject] {
        &self.objects[..self.grid_len]
    }

    /// The road-segment suffix of the list.
    #[must_use]
    pub fn road_segments(&self) -> &[DrawObject] {
        &self.objects[self.grid_len..]
    }

    /// Iterates objects in paint order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawObject> {
        self.objects.iter()
    }

    /// Consumes the list, returning the objects in paint order.
    #[must_use]
    pub fn into_vec(self) -> Vec<DrawObject> {
        self.objects
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawObject;
    type IntoIter = core::slice::Iter<'a, DrawObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DrawList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.objects)
    }
}

/// A draw list tagged with the revision that produced it.
///
/// Revisions increase strictly per producer. A sink that has presented
/// revision `n` must not present any frame with revision `<= n` afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Monotonic revision of this frame.
    pub revision: u64,
    /// Objects to paint, replacing everything from earlier frames.
    pub list: DrawList,
}

impl Frame {
    /// Creates a frame.
    #[must_use]
    pub fn new(revision: u64, list: DrawList) -> Self {
        Self { revision, list }
    }

    /// Returns `true` if this frame clears the canvas.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.list.is_clear()
    }
}

/// The rasterizer boundary.
///
/// Implementations clear their canvas and paint every object of the frame in
/// order. Ownership of the frame moves into the sink.
pub trait DrawSink {
    /// Replaces the current picture with `frame`.
    fn present(&mut self, frame: Frame);
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
    fn present(&mut self, frame: Frame) {
        (**self).present(frame);
    }
}
