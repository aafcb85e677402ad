//! `othello-engine` is a headless Othello (Reversi) rules engine for front ends.
//!
//! The engine is a set of operations over an explicit [`GameState`] value:
//!
//!  - [`Board`] holds the cells of a `rows × columns` grid, indexed row-major.
//!  - [`GameState::is_valid_move`] and [`GameState::valid_moves`] answer which
//!    placements are legal for the side to move.
//!  - [`GameState::play`] and [`GameState::apply_move`] place a piece, flip every
//!    captured line, and hand the turn to the opponent.
//!  - [`GameState::is_game_over`], [`GameState::winner`] and
//!    [`GameState::count_pieces`] report the end of the game and the score.
//!
//! The game ends as soon as the side to move has no legal placement. There is
//! no pass move.

pub mod test_utils;

mod board;
mod cell;
mod config;
mod error;
mod flips;
mod game;
mod location;
mod moves;
mod score;
mod utils;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use flips::flips;
pub use game::*;
pub use location::*;
pub use moves::*;
pub use score::*;

/// The number of spaces on one edge of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The number of spaces on a standard Othello board.
pub const DEFAULT_NUM_SPACES: usize = DEFAULT_EDGE_LENGTH * DEFAULT_EDGE_LENGTH;
