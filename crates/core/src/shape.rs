//! Shape bitmaps - one 4x4 binary matrix per rotation state.

use serde::{Deserialize, Serialize};

/// One rotation state of a piece, as a 4x4 occupancy matrix.
/// Shapes are values: rotation returns a new `Shape`, the catalog constants
/// are never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Shape {
    cells: [[bool; 4]; 4],
}

impl Shape {
    /// Matrix edge length. Every catalog shape lives in a 4x4 frame.
    pub const SIZE: usize = 4;

    /// Build a shape from 0/1 rows, top row first.
    pub const fn from_rows(rows: [[u8; Self::SIZE]; Self::SIZE]) -> Self {
        let mut cells = [[false; Self::SIZE]; Self::SIZE];
        let mut r = 0;
        while r < Self::SIZE {
            let mut c = 0;
            while c < Self::SIZE {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Shape { cells }
    }

    #[inline]
    pub const fn at(self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Column count of the matrix.
    pub const fn width(self) -> usize {
        Self::SIZE
    }

    /// Iterate the filled cells as `(row, col)` matrix coordinates.
    pub fn filled(self) -> impl Iterator<Item = (usize, usize)> {
        (0..Self::SIZE).flat_map(move |r| {
            (0..Self::SIZE).filter_map(move |c| if self.cells[r][c] { Some((r, c)) } else { None })
        })
    }

    /// 90-degree clockwise rotation: transpose and reverse,
    /// `rotated[c][N-1-r] = self[r][c]`.
    pub fn rotated_cw(self) -> Shape {
        let mut cells = [[false; Self::SIZE]; Self::SIZE];
        for r in 0..Self::SIZE {
            for c in 0..Self::SIZE {
                cells[c][Self::SIZE - 1 - r] = self.cells[r][c];
            }
        }
        Shape { cells }
    }
}
