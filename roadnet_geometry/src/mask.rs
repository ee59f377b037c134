// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Road bitmasks and compass directions.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Edges of a tile that carry a road.
    ///
    /// The bit values are the wire encoding and must not change.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RoadMask: u8 {
        /// Road leaves through the top edge.
        const NORTH = 0b0001;
        /// Road leaves through the right edge.
        const EAST  = 0b0010;
        /// Road leaves through the bottom edge.
        const SOUTH = 0b0100;
        /// Road leaves through the left edge.
        const WEST  = 0b1000;
    }
}

/// Box-drawing glyph for each mask value.
const GLYPHS: [char; 16] = [
    ' ', '╵', '╶', '╚', '╷', '║', '╔', '╠', '╴', '╝', '═', '╩', '╗', '╣', '╦', '╬',
];

impl RoadMask {
    /// Decodes a wire byte. Bits above the four compass bits are ignored.
    #[inline]
    pub const fn from_wire(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }

    /// Number of road segments this mask produces.
    #[inline]
    pub const fn segment_count(self) -> usize {
        (self.bits() & Self::all().bits()).count_ones() as usize
    }

    /// Iterates the set directions in north, east, south, west order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |dir| self.contains(dir.mask()))
    }

    /// Box-drawing character depicting this tile.
    #[inline]
    pub const fn glyph(self) -> char {
        GLYPHS[(self.bits() & Self::all().bits()) as usize]
    }
}

/// One edge of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top edge.
    North,
    /// Right edge.
    East,
    /// Bottom edge.
    South,
    /// Left edge.
    West,
}

impl Direction {
    /// All directions in emission order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The mask bit for this direction.
    #[inline]
    pub const fn mask(self) -> RoadMask {
        match self {
            Self::North => RoadMask::NORTH,
            Self::East => RoadMask::EAST,
            Self::South => RoadMask::SOUTH,
            Self::West => RoadMask::WEST,
        }
    }

    /// Midpoint of this edge of `tile`, in grid space (Y down).
    pub fn edge_midpoint(self, tile: Rect) -> Point {
        let center = tile.center();
        match self {
            Self::North => Point::new(center.x, tile.y0),
            Self::East => Point::new(tile.x1, center.y),
            Self::South => Point::new(center.x, tile.y1),
            Self::West => Point::new(tile.x0, center.y),
        }
    }
}
