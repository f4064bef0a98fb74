//! grid representation - row-major cells holding settled piece colors
//! row 0 is the top of the well; indices are validated by the collision layer

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Color token written into a cell when a piece settles.
/// One token per piece kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Orange,
    Blue,
}

impl CellColor {
    /// Single-character tag used by the `Display` rendering.
    pub const fn glyph(self) -> char {
        match self {
            CellColor::Cyan => 'c',
            CellColor::Yellow => 'y',
            CellColor::Purple => 'p',
            CellColor::Green => 'g',
            CellColor::Red => 'r',
            CellColor::Orange => 'o',
            CellColor::Blue => 'b',
        }
    }
}

/// Fixed-size well of settled cells. Dimensions never change after creation;
/// every row holds exactly `cols` cells.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<CellColor>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<CellColor> {
        self.cells[y * self.cols + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: CellColor) {
        self.cells[y * self.cols + x] = Some(color);
    }

    pub fn row(&self, y: usize) -> &[Option<CellColor>] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| cell.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Remove `y`, shifting every row above it down one and inserting a fresh
    /// empty row at index 0. Rows below `y` are untouched.
    pub fn clear_row(&mut self, y: usize) {
        let w = self.cols;
        self.cells.copy_within(0..y * w, w);
        self.cells[..w].fill(None);
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for y in 0..self.rows {
            seq.serialize_element(self.row(y))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<Option<CellColor>>> = Vec::deserialize(deserializer)?;
        if rows.is_empty() {
            return Err(serde::de::Error::custom("expected at least one row"));
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(serde::de::Error::custom("expected at least one column"));
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(serde::de::Error::custom("expected rows of equal width"));
            }
            cells.extend_from_slice(row);
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.rows {
            for cell in self.row(y) {
                write!(f, "{}", cell.map_or('.', CellColor::glyph))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
