// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map snapshots as delivered by the transport layer.

use alloc::vec::Vec;
use core::fmt;

use crate::mask::RoadMask;

/// One complete map, replaced wholesale by the next snapshot.
///
/// Field names match the transport message, so with the `serde` feature a
/// snapshot decodes directly from it. Unknown fields are ignored and a
/// missing `roads` field decodes as an empty array.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MapSnapshot {
    /// Declared map height in world units.
    pub height: f64,
    /// Declared map width in world units.
    pub width: f64,
    /// Number of tile rows.
    pub tiles_y: u32,
    /// Number of tile columns.
    pub tiles_x: u32,
    /// Row-major road masks, one byte per tile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roads: Vec<u8>,
}

/// Problems found by [`MapSnapshot::validate`].
///
/// Geometry building never fails on these; it skips or clears instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    /// Fewer masks than tiles; trailing tiles have no road data.
    #[error("roads has {actual} entries but the grid has {expected} tiles")]
    ShortRoads {
        /// `tiles_x * tiles_y`.
        expected: usize,
        /// `roads.len()`.
        actual: usize,
    },
    /// More masks than tiles; the extra entries are never drawn.
    #[error("roads has {actual} entries but the grid has only {expected} tiles")]
    LongRoads {
        /// `tiles_x * tiles_y`.
        expected: usize,
        /// `roads.len()`.
        actual: usize,
    },
    /// Declared width or height is negative or not finite.
    #[error("declared extent {width} x {height} is not a finite, non-negative size")]
    InvalidExtent {
        /// Declared width.
        width: f64,
        /// Declared height.
        height: f64,
    },
}

impl MapSnapshot {
    /// Creates a snapshot whose declared extent equals its tile counts.
    #[must_use]
    pub fn grid(tiles_x: u32, tiles_y: u32, roads: Vec<u8>) -> Self {
        Self {
            height: f64::from(tiles_y),
            width: f64::from(tiles_x),
            tiles_y,
            tiles_x,
            roads,
        }
    }

    /// Number of tiles in the grid.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        (self.tiles_x as usize).saturating_mul(self.tiles_y as usize)
    }

    /// Returns `true` if there are no road masks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Linear index of tile `(x, y)` into [`MapSnapshot::roads`].
    ///
    /// Returns `None` if the tile lies outside the grid.
    #[must_use]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.tiles_x || y >= self.tiles_y {
            return None;
        }
        Some(y as usize * self.tiles_x as usize + x as usize)
    }

    /// Road mask of tile `(x, y)`, or `None` if the tile is outside the grid
    /// or has no entry in `roads`.
    #[must_use]
    pub fn mask_at(&self, x: u32, y: u32) -> Option<RoadMask> {
        let index = self.index_of(x, y)?;
        self.roads.get(index).copied().map(RoadMask::from_wire)
    }

    /// Total number of road segments the masks describe.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.roads
            .iter()
            .take(self.tile_count())
            .map(|&b| RoadMask::from_wire(b).segment_count())
            .sum()
    }

    /// Checks the declared extent and that `roads` has one entry per tile.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let extent_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !extent_ok(self.width) || !extent_ok(self.height) {
            return Err(SnapshotError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.tile_count();
        let actual = self.roads.len();
        if actual < expected {
            Err(SnapshotError::ShortRoads { expected, actual })
        } else if actual > expected {
            Err(SnapshotError::LongRoads { expected, actual })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for MapSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} world, {}x{} tiles",
            self.height, self.width, self.tiles_y, self.tiles_x
        )
    }
}
