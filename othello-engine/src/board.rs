//! The board: a fixed-size, row-major grid of [`Cell`]s.
//!
//! The board never changes size after construction, and every index handed
//! out by it lies in `0..rows * columns`. Game rules live in [`crate::GameState`];
//! the board only knows about occupancy.

use crate::{utils, BoardSize, Cell, EngineError, Location, Player, Score};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell occupancy for a whole board.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ParseBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.size.len() {
            return Err(ParseBoardError::WrongCellCount);
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    /// The standard 8x8 starting position.
    fn default() -> Self {
        Self::starting(BoardSize::default())
    }
}

impl Board {
    /// An empty board.
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.len()],
        }
    }

    /// The opening position: the four centre squares seeded diagonally,
    /// White on the main diagonal and Black on the other.
    pub fn starting(size: BoardSize) -> Self {
        let mut board = Self::empty(size);
        let mid_row = size.rows() / 2;
        let mid_col = size.columns() / 2;
        let columns = size.columns();

        board.cells[(mid_row - 1) * columns + (mid_col - 1)] = Cell::White;
        board.cells[(mid_row - 1) * columns + mid_col] = Cell::Black;
        board.cells[mid_row * columns + (mid_col - 1)] = Cell::Black;
        board.cells[mid_row * columns + mid_col] = Cell::White;
        board
    }

    /// Build a board from row-major cells. `cells` must hold exactly
    /// `size.len()` entries.
    pub fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Result<Self, ParseBoardError> {
        Self::try_from(RawBoard { size, cells })
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The number of cells on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a valid board has at least 4 cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell, EngineError> {
        self.size.check_index(index).map(|index| self.cells[index])
    }

    /// The cell at `loc`.
    pub fn at(&self, loc: Location) -> Result<Cell, EngineError> {
        self.get(self.size.index(loc)?)
    }

    /// Place `player`'s colour at `index` without any rule checks.
    pub(crate) fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = player.into();
    }

    /// Count the pieces of each colour.
    pub fn count_pieces(&self) -> Score {
        self.cells
            .iter()
            .fold(Score::default(), |mut score, cell| {
                match cell {
                    Cell::Black => score.black += 1,
                    Cell::White => score.white += 1,
                    Cell::Empty => {}
                }
                score
            })
    }

    /// Count the unoccupied cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.size, self.cells.iter().map(|cell| cell.to_char()), f)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unknown cell character")]
    InvalidCharacter,
    #[display(fmt = "rows have different lengths")]
    RaggedRows,
    #[display(fmt = "cell count does not match the board size")]
    WrongCellCount,
    #[display(fmt = "{}", _0)]
    InvalidSize(EngineError),
}

/// Parse a board from rows separated by `/`, one character per cell:
/// `.` empty, `#` or `X` black, `O` white. For example, the 4x4 opening is
/// `..../.O#./.#O./....`.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let columns = rows[0].chars().count();
        if rows.iter().any(|row| row.chars().count() != columns) {
            return Err(ParseBoardError::RaggedRows);
        }

        let size = BoardSize::new(rows.len(), columns).map_err(ParseBoardError::InvalidSize)?;
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| Cell::from_char(c).ok_or(ParseBoardError::InvalidCharacter))
            .collect::<Result<Vec<Cell>, _>>()?;

        Self::from_cells(size, cells)
    }
}
