//! Clockwise rotation with a bounded wall-kick search.

use crate::collision::collides;
use gridfall_core::{Grid, Piece};

/// Try to rotate the piece 90 degrees clockwise, kicking horizontally if the
/// rotated shape does not fit in place. Returns None if no legal placement is
/// found, leaving the caller's piece untouched in both shape and position.
///
/// The search tests the original `x` first, then walks the offsets
/// `+1, -2, +3, -4` (each applied cumulatively, so the candidate columns are
/// `x, x+1, x-1, x+2`), and gives up once the next offset's magnitude exceeds
/// the rotated shape's width. Rotation never changes `y`.
pub fn try_rotate(grid: &Grid, piece: Piece) -> Option<Piece> {
    let mut candidate = piece.with_shape(piece.shape.rotated_cw());
    let mut offset: i32 = 1;
    while collides(grid, candidate) {
        candidate = candidate.shifted(offset);
        offset = -(offset + offset.signum());
        if offset.unsigned_abs() as usize > candidate.shape.width() {
            return None;
        }
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::can_place;
    use gridfall_core::{CellColor, PieceKind};

    /// Grid filled everywhere except the exact cells of `piece`.
    fn caged_grid(piece: Piece, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        let body: Vec<(i32, i32)> = piece.cells().collect();
        for y in 0..rows {
            for x in 0..cols {
                if !body.contains(&(x as i32, y as i32)) {
                    grid.set(x, y, CellColor::Purple);
                }
            }
        }
        grid
    }

    #[test]
    fn test_simple_rotation() {
        let grid = Grid::new(20, 10);
        let piece = Piece::spawn(PieceKind::T, 10).descended();
        let rotated = try_rotate(&grid, piece).unwrap();
        assert_eq!(rotated.shape, piece.shape.rotated_cw());
        assert_eq!(rotated.x, piece.x); // no kick needed
        assert_eq!(rotated.y, piece.y);
    }

    #[test]
    fn test_wall_kick_off_left_wall() {
        let grid = Grid::new(20, 10);
        // vertical I flush against the left wall: x = -1 puts its filled
        // column at 0; the horizontal result spans columns x..x+4, so the
        // in-place candidate pokes past the wall and needs a +1 kick
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.x = -1;
        piece.y = 5;
        let rotated = try_rotate(&grid, piece).unwrap();
        assert_eq!(rotated.x, 0);
        assert_eq!(rotated.y, 5);
    }

    #[test]
    fn test_wall_kick_off_right_wall() {
        let grid = Grid::new(20, 10);
        // vertical I one column short of flush right: the horizontal result
        // spans four columns and fits only after the -2 step lands it at x-1
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.x = 7;
        piece.y = 5;
        let rotated = try_rotate(&grid, piece).unwrap();
        assert!(can_place(&grid, rotated));
        assert_eq!(rotated.x, 6);
        assert_eq!(rotated.y, 5);
    }

    #[test]
    fn test_flush_right_vertical_bar_cannot_rotate() {
        let grid = Grid::new(20, 10);
        // filled column at 9: the kick walk reaches x-1 = 7 at best, which
        // still leaves the horizontal bar poking past the wall
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.x = 8;
        piece.y = 5;
        assert_eq!(try_rotate(&grid, piece), None);
    }

    #[test]
    fn test_kick_prefers_original_column() {
        let grid = Grid::new(20, 10);
        let piece = Piece::spawn(PieceKind::S, 10).descended().descended();
        let rotated = try_rotate(&grid, piece).unwrap();
        assert_eq!(rotated.x, piece.x);
    }

    #[test]
    fn test_rotation_rejected_when_caged() {
        // S caged in its exact footprint: the rotated footprint overlaps
        // settled cells at every kick column, so the rotation is abandoned
        let piece = Piece::spawn(PieceKind::S, 10).descended().descended();
        let grid = caged_grid(piece, 20, 10);
        assert!(can_place(&grid, piece));
        assert_eq!(try_rotate(&grid, piece), None);
    }

    #[test]
    fn test_rejection_leaves_piece_unchanged() {
        let piece = Piece::spawn(PieceKind::Z, 10).descended();
        let grid = caged_grid(piece, 20, 10);
        let before = piece;
        assert!(try_rotate(&grid, piece).is_none());
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotation_never_changes_row() {
        let grid = Grid::new(20, 10);
        for kind in PieceKind::ALL {
            let mut piece = Piece::spawn(kind, 10);
            piece.y = 10;
            if let Some(rotated) = try_rotate(&grid, piece) {
                assert_eq!(rotated.y, 10, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_kick_search_is_bounded() {
        // 3-wide well: a horizontal bar can never fit, so every kick column
        // fails and the search must terminate with a rejection
        let grid = Grid::new(8, 3);
        let piece = Piece::spawn(PieceKind::I, 3); // x = -1, filled column 0
        assert!(can_place(&grid, piece));
        assert_eq!(try_rotate(&grid, piece), None);
    }
}
