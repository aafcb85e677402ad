//! Piece counts and game outcomes.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Pieces of each colour on the board.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[display(fmt = "Black {} - {} White", black, white)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[display(fmt = "{} wins", _0)]
    Win(Player),
    #[display(fmt = "Tie")]
    Tie,
}

impl Score {
    /// Pieces on the board of either colour.
    #[inline]
    pub fn total(self) -> usize {
        self.black + self.white
    }

    /// Unoccupied cells on a board of `len` cells.
    #[inline]
    pub fn empty(self, len: usize) -> usize {
        len - self.total()
    }

    /// Pieces of one colour.
    #[inline]
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Whoever has more pieces wins; equal counts tie.
    pub fn outcome(self) -> Outcome {
        use std::cmp::Ordering::*;
        match self.black.cmp(&self.white) {
            Greater => Outcome::Win(Player::Black),
            Less => Outcome::Win(Player::White),
            Equal => Outcome::Tie,
        }
    }
}

impl Outcome {
    /// The winning player, or `None` for a tie.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }
}
