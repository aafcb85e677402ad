//! Board dimensions and the index arithmetic that goes with them.

use crate::{EngineError, Location, DEFAULT_EDGE_LENGTH};
use serde::{Deserialize, Serialize};

/// The dimensions of a board. Both sides are even and at least 2.
///
/// Deserializing re-checks these constraints, so a front end can read a
/// `BoardSize` straight out of its own configuration file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardSize")]
pub struct BoardSize {
    rows: usize,
    columns: usize,
}

#[derive(Deserialize)]
struct RawBoardSize {
    rows: usize,
    columns: usize,
}

impl TryFrom<RawBoardSize> for BoardSize {
    type Error = EngineError;

    fn try_from(raw: RawBoardSize) -> Result<Self, Self::Error> {
        BoardSize::new(raw.rows, raw.columns)
    }
}

impl Default for BoardSize {
    /// The standard 8x8 board.
    fn default() -> Self {
        Self {
            rows: DEFAULT_EDGE_LENGTH,
            columns: DEFAULT_EDGE_LENGTH,
        }
    }
}

impl BoardSize {
    /// Validate a board size. The cell count must fit in an `isize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, EngineError> {
        let valid = |n: usize| n >= 2 && n % 2 == 0;
        let fits = rows
            .checked_mul(columns)
            .map_or(false, |len| len <= isize::MAX as usize);
        if valid(rows) && valid(columns) && fits {
            Ok(Self { rows, columns })
        } else {
            Err(EngineError::InvalidConfiguration { rows, columns })
        }
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(self) -> usize {
        self.columns
    }

    /// The number of cells on the board.
    #[inline]
    pub fn len(self) -> usize {
        self.rows * self.columns
    }

    /// Whether `(row, col)` lies on the board. Takes signed coordinates so
    /// that a directional walk can step off any edge.
    #[inline]
    pub fn contains(self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    /// Reject an index outside `0..len()`.
    #[inline]
    pub fn check_index(self, index: usize) -> Result<usize, EngineError> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(EngineError::OutOfBoundsIndex {
                index,
                len: self.len(),
            })
        }
    }

    /// Convert a row-major index into a [`Location`].
    pub fn location(self, index: usize) -> Result<Location, EngineError> {
        let index = self.check_index(index)?;
        Ok(Location::new(index / self.columns, index % self.columns))
    }

    /// Convert a [`Location`] into a row-major index.
    pub fn index(self, loc: Location) -> Result<usize, EngineError> {
        if loc.row < self.rows && loc.col < self.columns {
            Ok(loc.row * self.columns + loc.col)
        } else {
            Err(EngineError::OutOfBoundsIndex {
                index: loc.row.saturating_mul(self.columns).saturating_add(loc.col),
                len: self.len(),
            })
        }
    }
}
