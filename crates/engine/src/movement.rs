//! Horizontal shifts and gravity descent as pure piece transforms.

use crate::collision::can_place;
use gridfall_core::{Grid, Piece};

/// Try to move the piece `dx` columns.
/// Returns the moved piece, or None if the move is rejected.
pub fn try_shift(grid: &Grid, piece: Piece, dx: i32) -> Option<Piece> {
    let moved = piece.shifted(dx);
    if can_place(grid, moved) {
        Some(moved)
    } else {
        None
    }
}

/// Try to move the piece one row down.
/// Returns the lowered piece, or None if it is resting on something.
pub fn try_descend(grid: &Grid, piece: Piece) -> Option<Piece> {
    let dropped = piece.descended();
    if can_place(grid, dropped) {
        Some(dropped)
    } else {
        None
    }
}
