//! Implements game-level Othello logic: turns, termination and the public
//! operations a front end calls.

use crate::{
    flips, moves, Board, BoardSize, EngineError, MoveList, Outcome, ParseBoardError,
    ParsePlayerError, Player, Score,
};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// The complete state of an Othello game.
///
/// `over` is a cache of "the side to move has no legal placement". It is
/// recomputed whenever the board or the side to move changes, including on
/// deserialization, and is never set directly.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGameState")]
pub struct GameState {
    board: Board,
    current_player: Player,
    over: bool,
}

#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
}

impl From<RawGameState> for GameState {
    fn from(raw: RawGameState) -> Self {
        Self::from_board(raw.board, raw.current_player)
    }
}

impl Default for GameState {
    /// A fresh game on the standard 8x8 board.
    fn default() -> Self {
        Self::with_size(BoardSize::default())
    }
}

impl GameState {
    /// Start a new game on a `rows × columns` board, Black to move.
    #[instrument(level = "debug")]
    pub fn new_game(rows: usize, columns: usize) -> Result<Self, EngineError> {
        Ok(Self::with_size(BoardSize::new(rows, columns)?))
    }

    /// Start a new game on a board of the given size, Black to move.
    pub fn with_size(size: BoardSize) -> Self {
        Self::from_board(Board::starting(size), Player::Black)
    }

    /// Build an arbitrary position with `player` to move.
    pub fn from_board(board: Board, player: Player) -> Self {
        let over = !moves::has_legal_move(&board, player);
        Self {
            board,
            current_player: player,
            over,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// The side to move. Never empty.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the side to move may place a piece at `index`.
    pub fn is_valid_move(&self, index: usize) -> Result<bool, EngineError> {
        let index = self.size().check_index(index)?;
        Ok(moves::is_legal(&self.board, index, self.current_player))
    }

    /// Every legal placement for the side to move.
    pub fn valid_moves(&self) -> MoveList {
        moves::legal_moves(&self.board, self.current_player)
    }

    /// Place a piece for the side to move at `index`, flip every captured
    /// line and pass the turn. Returns the flipped indices.
    ///
    /// On error the state is left untouched.
    pub fn play(&mut self, index: usize) -> Result<Vec<usize>, EngineError> {
        let player = self.current_player;
        let flipped = match flips::flips(self, index) {
            Ok(flipped) => flipped,
            Err(err) => {
                debug!(index, %player, %err, "rejected move");
                return Err(err);
            }
        };

        self.board.set(index, player);
        for &captured in &flipped {
            self.board.set(captured, player);
        }
        self.current_player = !player;
        self.over = !moves::has_legal_move(&self.board, self.current_player);

        debug!(index, %player, flipped = flipped.len(), "applied move");
        if self.over {
            let score = self.count_pieces();
            debug!(outcome = %score.outcome(), %score, "game over");
        }

        Ok(flipped)
    }

    /// The state after the side to move places a piece at `index`.
    pub fn apply_move(&self, index: usize) -> Result<Self, EngineError> {
        let mut next = self.clone();
        next.play(index)?;
        Ok(next)
    }

    /// Whether the side to move has no legal placement. The game ends here:
    /// there is no pass move, even if the opponent could still play.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.over
    }

    /// The outcome of a finished game, or `None` while it is in progress.
    pub fn winner(&self) -> Option<Outcome> {
        if self.over {
            Some(self.count_pieces().outcome())
        } else {
            None
        }
    }

    /// Pieces of each colour on the board.
    pub fn count_pieces(&self) -> Score {
        self.board.count_pieces()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.winner() {
            Some(outcome) => write!(f, "Game over: {} ({})", outcome, self.count_pieces()),
            None => write!(f, "{} to move", self.current_player),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseGameStateError {
    #[display(fmt = "missing board")]
    MissingBoard,
    #[display(fmt = "missing player")]
    MissingPlayer,
    #[display(fmt = "unexpected trailing input")]
    TrailingInput,
    #[display(fmt = "{}", _0)]
    Board(ParseBoardError),
    #[display(fmt = "{}", _0)]
    Player(ParsePlayerError),
}

impl From<ParseBoardError> for ParseGameStateError {
    fn from(err: ParseBoardError) -> Self {
        ParseGameStateError::Board(err)
    }
}

impl From<ParsePlayerError> for ParseGameStateError {
    fn from(err: ParsePlayerError) -> Self {
        ParseGameStateError::Player(err)
    }
}

/// Parse a position as `"<board> <player>"`, where the board uses the
/// [`Board`] text format and the player is "black" or "white".
impl std::str::FromStr for GameState {
    type Err = ParseGameStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sections = s.split_whitespace();

        let board: Board = sections
            .next()
            .ok_or(ParseGameStateError::MissingBoard)?
            .parse()?;
        let player: Player = sections
            .next()
            .ok_or(ParseGameStateError::MissingPlayer)?
            .parse()?;

        if sections.next().is_some() {
            return Err(ParseGameStateError::TrailingInput);
        }

        Ok(Self::from_board(board, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn new_game_standard() {
        let state = GameState::new_game(8, 8).unwrap();
        assert_eq!(state, GameState::default());
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn new_game_rejects_bad_sizes() {
        assert_eq!(
            GameState::new_game(7, 8),
            Err(EngineError::InvalidConfiguration {
                rows: 7,
                columns: 8
            })
        );
        assert!(GameState::new_game(0, 0).is_err());
    }

    #[test]
    fn play_flips_and_passes_turn() {
        let mut state = GameState::default();
        assert_eq!(state.play(19), Ok(vec![27]));
        assert_eq!(state.board().get(27), Ok(Cell::Black));
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.count_pieces(), Score { black: 4, white: 1 });
    }

    #[test]
    fn illegal_play_leaves_state_untouched() {
        let mut state = GameState::default();
        let before = state.clone();
        assert_eq!(state.play(0), Err(EngineError::IllegalMove { index: 0 }));
        assert_eq!(state.play(27), Err(EngineError::IllegalMove { index: 27 }));
        assert_eq!(
            state.play(100),
            Err(EngineError::OutOfBoundsIndex {
                index: 100,
                len: 64
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn is_valid_move_bounds() {
        let state = GameState::default();
        assert_eq!(state.is_valid_move(19), Ok(true));
        assert_eq!(state.is_valid_move(20), Ok(false));
        assert!(state.is_valid_move(64).is_err());
    }

    #[test]
    fn ends_when_side_to_move_is_blocked() {
        // Black wraps up the only white piece; White then has nothing left.
        let state: GameState = "..../.O#./..../.... black".parse().unwrap();
        assert!(!state.is_game_over());
        let next = state.apply_move(4).unwrap();
        assert!(next.is_game_over());
        assert_eq!(next.winner(), Some(Outcome::Win(Player::Black)));
    }

    #[test]
    fn no_pass_when_only_one_side_is_blocked() {
        // White has no move but Black would: still game over.
        let state: GameState = "..../.O../..O./...# white".parse().unwrap();
        assert!(state.is_game_over());
        assert!(GameState::from_board(state.board().clone(), Player::Black)
            .valid_moves()
            .contains(0));
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            "".parse::<GameState>(),
            Err(ParseGameStateError::MissingBoard)
        );
        assert_eq!(
            "..../.O#./.#O./....".parse::<GameState>(),
            Err(ParseGameStateError::MissingPlayer)
        );
        assert_eq!(
            "..../.O#./.#O./.... black now".parse::<GameState>(),
            Err(ParseGameStateError::TrailingInput)
        );
        assert_eq!(
            "..../.O#./.#O./.... grey".parse::<GameState>(),
            Err(ParseGameStateError::Player(ParsePlayerError))
        );
    }

    #[test]
    fn deserialize_recomputes_over() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["over"] = serde_json::Value::Bool(true);
        let state: GameState = serde_json::from_value(value).unwrap();
        assert!(!state.is_game_over());
    }

    #[test]
    fn deserialize_rejects_wrong_cell_count() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["board"]["cells"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn display_shows_turn() {
        let state = GameState::new_game(4, 4).unwrap();
        assert!(state.to_string().ends_with("Black to move"));
    }
}
