//! Flip resolution: which opponent pieces a placement converts.
//!
//! Unlike validation, which stops at the first capturing direction, resolution
//! walks all eight directions and keeps every capturing line.

use crate::location::{rays, Ray};
use crate::{moves, Board, Cell, EngineError, GameState, Player};
use tracing::trace;

/// The opponent pieces captured along `ray`: the run of opponent pieces
/// directly next to the start, if it is closed by one of `player`'s own pieces.
/// Otherwise nothing.
fn captures_along(board: &Board, ray: Ray, player: Player) -> Vec<usize> {
    let own = Cell::from(player);
    let mut candidates = Vec::new();

    for index in ray {
        match board.cells()[index] {
            Cell::Empty => break,
            cell if cell == own => return candidates,
            _ => candidates.push(index),
        }
    }

    Vec::new()
}

/// Every opponent piece captured by `player` placing at `index`, over all
/// directions. Each direction is resolved on its own. `index` must lie on the board.
pub(crate) fn captures(board: &Board, index: usize, player: Player) -> Vec<usize> {
    rays(board.size(), index)
        .flat_map(|ray| {
            let line = captures_along(board, ray, player);
            if !line.is_empty() {
                trace!(index, ?line, "captured line");
            }
            line
        })
        .collect()
}

/// The indices that playing at `index` would flip, without changing the game.
pub fn flips(state: &GameState, index: usize) -> Result<Vec<usize>, EngineError> {
    let board = state.board();
    let index = board.size().check_index(index)?;
    if !moves::is_legal(board, index, state.current_player()) {
        return Err(EngineError::IllegalMove { index });
    }

    Ok(captures(board, index, state.current_player()))
}
