// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text rendering of a road grid.

use alloc::string::String;

use crate::snapshot::MapSnapshot;

/// Glyph used for tiles that have no entry in `roads`.
pub const MISSING_GLYPH: char = '?';

/// Renders `snapshot` as box-drawing text, one line per tile row.
///
/// Each tile becomes the glyph from [`crate::RoadMask::glyph`]. Rows are
/// separated by `\n` with no trailing newline.
#[must_use]
pub fn render_rows(snapshot: &MapSnapshot) -> String {
    let mut out = String::with_capacity(snapshot.tile_count() * 3 + snapshot.tiles_y as usize);
    for y in 0..snapshot.tiles_y {
        if y != 0 {
            out.push('\n');
        }
        for x in 0..snapshot.tiles_x {
            out.push(snapshot.mask_at(x, y).map_or(MISSING_GLYPH, |m| m.glyph()));
        }
    }
    out
}
