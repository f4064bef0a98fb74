//! Gridfall core crate - grid, shape, and piece types for the
//! falling-block engine.

mod grid;
mod piece;
mod shape;

pub use grid::{CellColor, Grid};
pub use piece::{Piece, PieceKind};
pub use shape::Shape;
