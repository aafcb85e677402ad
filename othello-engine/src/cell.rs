//! Cell occupancy and player colours.

use crate::EngineError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The contents of one square on the board.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Whether no piece occupies this cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The opposing colour, or `None` for an empty cell.
    #[inline]
    pub fn opponent(self) -> Option<Cell> {
        Player::try_from(self).ok().map(|player| (!player).into())
    }

    /// The character used in the text board format.
    pub(crate) fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            '#' | 'X' | 'x' | 'B' | 'b' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }
}

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    #[default]
    Black,
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Gets the opponent of `player`.
#[inline]
pub fn opponent(player: Player) -> Player {
    !player
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = EngineError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Player::Black),
            Cell::White => Ok(Player::White),
            Cell::Empty => Err(EngineError::EmptyCell),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a player from its name ("black", "White") or board symbol ("#", "O").
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "#" | "x" | "b" => Ok(Player::Black),
            "white" | "o" | "w" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}
