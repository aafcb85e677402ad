//! Move validation: which empty squares the side to move may play.

use crate::location::{rays, Ray};
use crate::{Board, BoardSize, Cell, EngineError, Location, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether walking `ray` crosses a run of at least one `player`'s opponent
/// pieces that ends on one of `player`'s own pieces.
fn flanks(board: &Board, ray: Ray, player: Player) -> bool {
    let own = Cell::from(player);
    let mut seen_opponent = false;

    for index in ray {
        match board.cells()[index] {
            Cell::Empty => return false,
            cell if cell == own => return seen_opponent,
            _ => seen_opponent = true,
        }
    }

    false
}

/// Whether `player` may place a piece at `index`. Stops at the first
/// direction that captures. `index` must lie on the board.
pub(crate) fn is_legal(board: &Board, index: usize, player: Player) -> bool {
    board.cells()[index].is_empty()
        && rays(board.size(), index).any(|ray| flanks(board, ray, player))
}

/// Every legal placement for `player`.
pub(crate) fn legal_moves(board: &Board, player: Player) -> MoveList {
    MoveList {
        size: board.size(),
        indices: (0..board.len())
            .filter(|&index| is_legal(board, index, player))
            .collect(),
    }
}

/// Whether `player` has any legal placement.
pub(crate) fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..board.len()).any(|index| is_legal(board, index, player))
}

/// The legal placements out of a position, as row-major indices in
/// ascending order.
///
/// Deserializing sorts and deduplicates the indices and rejects any that
/// fall off the board.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMoveList")]
pub struct MoveList {
    size: BoardSize,
    indices: Vec<usize>,
}

#[derive(Deserialize)]
struct RawMoveList {
    size: BoardSize,
    indices: Vec<usize>,
}

impl TryFrom<RawMoveList> for MoveList {
    type Error = EngineError;

    fn try_from(raw: RawMoveList) -> Result<Self, Self::Error> {
        let mut indices = raw.indices;
        indices.sort_unstable();
        indices.dedup();
        if let Some(&last) = indices.last() {
            raw.size.check_index(last)?;
        }

        Ok(Self {
            size: raw.size,
            indices,
        })
    }
}

impl MoveList {
    /// Returns whether `index` is a legal placement.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The move indices in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.indices.iter().copied()
    }

    /// The moves as board locations.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        let columns = self.size.columns();
        self.iter()
            .map(move |index| Location::new(index / columns, index % columns))
    }
}

impl IntoIterator for MoveList {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .locations()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
