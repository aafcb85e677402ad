//! Code for working with [`Location`]s and directional walks on the board.

use crate::BoardSize;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};

/// Column letters used by the algebraic notation.
pub(crate) const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A square on the board, addressed by 0-based row and column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Convert this [`Location`] into algebraic notation ("D3").
/// Columns past Z fall back to "R3C27".
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match COLUMN_LETTERS.chars().nth(self.col) {
            Some(col_str) => {
                f.write_char(col_str)?;
                write!(f, "{}", self.row + 1)
            }
            None => write!(f, "R{}C{}", self.row + 1, self.col + 1),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from algebraic notation: a column letter followed by
/// a 1-based row number ("A4", "c12"). Bounds are checked against a
/// [`BoardSize`] separately.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseLocationError);
        }
        let row: usize = row_str.parse().or(Err(ParseLocationError))?;
        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, col))
    }
}

/// A unit step on the board as (row delta, column delta).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

/// The eight compass directions, in the order both move validation and flip
/// resolution walk them.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: -1, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: 0, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: 1, dc: 1 },
];

/// Walks outward from a starting square in one direction, yielding the index
/// of every square passed, and stops at the edge of the board.
/// The starting square itself is not yielded.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    size: BoardSize,
    row: isize,
    col: isize,
    direction: Direction,
}

impl Ray {
    pub fn new(size: BoardSize, from: Location, direction: Direction) -> Self {
        Self {
            size,
            row: from.row as isize,
            col: from.col as isize,
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let row = self.row + self.direction.dr;
        let col = self.col + self.direction.dc;
        if !self.size.contains(row, col) {
            return None;
        }

        self.row = row;
        self.col = col;
        Some(row as usize * self.size.columns() + col as usize)
    }
}

/// One [`Ray`] per entry of [`DIRECTIONS`], in order, from the square at
/// `index`. `index` must lie on the board.
pub fn rays(size: BoardSize, index: usize) -> impl Iterator<Item = Ray> {
    let from = Location::new(index / size.columns(), index % size.columns());
    DIRECTIONS
        .iter()
        .map(move |&direction| Ray::new(size, from, direction))
}
