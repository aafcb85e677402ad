//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and for benchmarking.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! A position where the side to move is blocked ends the game, so it is
//! counted as a leaf. The published counts agree with this up to depth 8,
//! the first depth at which a pass can occur in standard play.

use crate::{BoardSize, GameState};

pub fn run_perft(size: BoardSize, depth: u64) -> u64 {
    leaves_below(&GameState::with_size(size), depth)
}

fn leaves_below(state: &GameState, depth: u64) -> u64 {
    // Leaf node for this depth, or a finished game
    if depth == 0 || state.is_game_over() {
        return 1;
    }

    state
        .valid_moves()
        .iter()
        .filter_map(|mv| state.apply_move(mv).ok())
        .map(|next| leaves_below(&next, depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(depth: u64) -> u64 {
        run_perft(BoardSize::default(), depth)
    }

    #[test]
    fn perft_01() {
        assert_eq!(standard(1), 4);
    }

    #[test]
    fn perft_02() {
        assert_eq!(standard(2), 12);
    }

    #[test]
    fn perft_03() {
        assert_eq!(standard(3), 56);
    }

    #[test]
    fn perft_04() {
        assert_eq!(standard(4), 244);
    }

    #[test]
    fn perft_05() {
        assert_eq!(standard(5), 1396);
    }

    #[test]
    fn perft_06() {
        assert_eq!(standard(6), 8200);
    }

    #[test]
    fn perft_small_board_terminates() {
        // Every 4x4 game ends within the 12 empty squares.
        assert_eq!(
            run_perft(BoardSize::new(4, 4).unwrap(), 12),
            run_perft(BoardSize::new(4, 4).unwrap(), 20)
        );
    }
}
