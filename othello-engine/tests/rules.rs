//! End-to-end checks of the rules through the public interface.

use othello_engine::{
    Board, BoardSize, Cell, EngineError, GameState, Location, Outcome, Player, Score,
};

fn index_of(state: &GameState, notation: &str) -> usize {
    let loc: Location = notation.parse().unwrap();
    state.size().index(loc).unwrap()
}

/// A full board: `black` Black pieces followed by White pieces, row-major.
fn filled_board(black: usize) -> Board {
    let size = BoardSize::default();
    let cells = (0..size.len())
        .map(|i| if i < black { Cell::Black } else { Cell::White })
        .collect();
    Board::from_cells(size, cells).unwrap()
}

#[test]
fn new_game_counts() {
    let state = GameState::new_game(8, 8).unwrap();
    let score = state.count_pieces();
    assert_eq!(score, Score { black: 2, white: 2 });
    assert_eq!(score.empty(state.board().len()), 60);
    assert_eq!(state.board().count_empty(), 60);
    assert_eq!(state.current_player(), Player::Black);
}

#[test]
fn occupied_cells_are_never_valid() {
    let mut state = GameState::default();
    for mv in ["D3", "C3", "C4"] {
        let index = index_of(&state, mv);
        state.play(index).unwrap();
    }

    for index in 0..state.board().len() {
        if !state.board().get(index).unwrap().is_empty() {
            assert_eq!(state.is_valid_move(index), Ok(false));
        }
    }
}

#[test]
fn opening_has_four_diagonal_moves() {
    let state = GameState::default();
    let moves = state.valid_moves();
    assert_eq!(moves.len(), 4);
    assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");
    for index in &moves {
        assert_eq!(state.is_valid_move(index), Ok(true));
    }
}

#[test]
fn opening_flip() {
    let state = GameState::default();
    let next = state.apply_move(2 * 8 + 3).unwrap();

    assert_eq!(next.board().at(Location::new(3, 3)), Ok(Cell::Black));
    let score = next.count_pieces();
    assert_eq!(score, Score { black: 4, white: 1 });
    assert_eq!(score.empty(64), 59);
    assert_eq!(next.current_player(), Player::White);

    // The original value is unchanged.
    assert_eq!(state, GameState::default());
}

#[test]
fn apply_move_errors() {
    let state = GameState::default();
    assert_eq!(
        state.apply_move(64),
        Err(EngineError::OutOfBoundsIndex { index: 64, len: 64 })
    );
    assert_eq!(
        state.apply_move(0),
        Err(EngineError::IllegalMove { index: 0 })
    );
}

#[test]
fn full_board_is_game_over() {
    let state = GameState::from_board(filled_board(32), Player::Black);
    assert!(state.is_game_over());
    assert!(state.valid_moves().is_empty());
    assert_eq!(state.winner(), Some(Outcome::Tie));
}

#[test]
fn winner_by_count() {
    let state = GameState::from_board(filled_board(33), Player::White);
    assert_eq!(state.count_pieces(), Score { black: 33, white: 31 });
    assert_eq!(state.winner(), Some(Outcome::Win(Player::Black)));
}

#[test]
fn in_progress_has_no_winner() {
    let state = GameState::default();
    assert_eq!(state.winner(), None);
    assert_eq!(state.count_pieces().outcome(), Outcome::Tie);
}

#[test]
fn new_game_resets_after_finished_game() {
    // Play the shortest game: Black wipes out White in nine moves.
    let mut state = GameState::default();
    for mv in ["E6", "F4", "E3", "F6", "G5", "D6", "E7", "F5", "C5"] {
        assert!(!state.is_game_over());
        let index = index_of(&state, mv);
        state.play(index).unwrap();
    }
    assert!(state.is_game_over());
    assert_eq!(state.count_pieces().white, 0);
    assert_eq!(state.winner(), Some(Outcome::Win(Player::Black)));

    let fresh = GameState::new_game(8, 8).unwrap();
    assert!(!fresh.is_game_over());
    assert_eq!(fresh.current_player(), Player::Black);
}

#[test]
fn text_positions() {
    let state: GameState = "......../......../......../...O#.../...#O.../......../......../........ black"
        .parse()
        .unwrap();
    assert_eq!(state, GameState::default());
    assert!(state.to_string().starts_with("   A B C D E F G H\n1  . . ."));
}
