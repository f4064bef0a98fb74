//! Committing a settled piece into the grid.

use crate::collision::can_place;
use crate::lines::clear_full_rows;
use gridfall_core::{Grid, Piece};

/// Write the piece's color into every grid cell it covers.
///
/// The caller must already have confirmed the piece does not collide; merge
/// does not re-validate. Filled cells above the top row are not stored.
pub fn merge(grid: &mut Grid, piece: Piece) {
    debug_assert!(can_place(grid, piece));
    let color = piece.color();
    for (x, y) in piece.cells() {
        if y >= 0 {
            grid.set(x as usize, y as usize, color);
        }
    }
}

/// Merge the piece, then sweep full rows. Returns the number of lines
/// cleared by this placement.
pub fn lock_piece(grid: &mut Grid, piece: Piece) -> u32 {
    merge(grid, piece);
    clear_full_rows(grid)
}
