//! collision detection - walls, floor, settled cells

use gridfall_core::{Grid, Piece};

/// does the piece overlap anything?
///
/// A filled cell collides when it is past a side wall, past the floor, or on
/// top of a settled cell. Cells above the top row are exempt from the
/// occupancy check (a spawning piece may protrude above the well) but still
/// respect the side walls.
#[inline]
pub fn collides(grid: &Grid, piece: Piece) -> bool {
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= grid.cols() as i32 {
            return true;
        }
        if y >= grid.rows() as i32 {
            return true;
        }
        y >= 0 && grid.get(x as usize, y as usize).is_some()
    })
}

/// can we place here? (just !collides)
#[inline]
pub fn can_place(grid: &Grid, piece: Piece) -> bool {
    !collides(grid, piece)
}
