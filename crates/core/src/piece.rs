//! Piece kinds, catalog bitmaps, and the piece value type.

use crate::grid::CellColor;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

const I_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 0, 0],
]);

const O_SHAPE: Shape = Shape::from_rows([
    [0, 1, 1, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const T_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const S_SHAPE: Shape = Shape::from_rows([
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const Z_SHAPE: Shape = Shape::from_rows([
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const L_SHAPE: Shape = Shape::from_rows([
    [1, 1, 1, 0],
    [1, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_rows([
    [1, 1, 1, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Rotation-0 bitmap for this kind.
    pub const fn shape(self) -> Shape {
        match self {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::J => J_SHAPE,
        }
    }

    /// Color token written into the grid when this kind settles.
    pub const fn color(self) -> CellColor {
        match self {
            PieceKind::I => CellColor::Cyan,
            PieceKind::O => CellColor::Yellow,
            PieceKind::T => CellColor::Purple,
            PieceKind::S => CellColor::Green,
            PieceKind::Z => CellColor::Red,
            PieceKind::L => CellColor::Orange,
            PieceKind::J => CellColor::Blue,
        }
    }
}

/// A falling piece: shape matrix plus the grid-space offset of the matrix's
/// top-left corner. Coordinates are signed - a legal piece may sit at `x < 0`
/// as long as every filled cell stays in bounds.
///
/// Pieces are immutable values; transforms return new pieces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// New piece of `kind` at the canonical spawn position for a well
    /// `cols` wide: horizontally centered frame, top row.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x: (cols / 2) as i32 - (Shape::SIZE as i32 + 1) / 2,
            y: 0,
        }
    }

    pub fn color(self) -> CellColor {
        self.kind.color()
    }

    /// Same piece moved `dx` columns.
    pub fn shifted(self, dx: i32) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }

    /// Same piece one row lower.
    pub fn descended(self) -> Self {
        Self {
            y: self.y + 1,
            ..self
        }
    }

    /// Same position, different shape matrix.
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    /// Iterate the filled cells as `(x, y)` grid coordinates.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.shape
            .filled()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }
}
