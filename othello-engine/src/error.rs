//! Errors reported by engine operations.

use derive_more::{Display, Error};

/// Why an engine operation was rejected. A rejected operation never mutates state.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum EngineError {
    /// An index outside `0..rows * columns` was passed in.
    #[display(fmt = "index {} is outside the board ({} cells)", index, len)]
    OutOfBoundsIndex { index: usize, len: usize },

    /// A placement was requested at a cell that is not a legal move.
    #[display(fmt = "illegal move at index {}", index)]
    IllegalMove { index: usize },

    /// A board size that is too small or not even in both dimensions.
    #[display(
        fmt = "invalid board size {}x{}: both sides must be even and at least 2",
        rows,
        columns
    )]
    InvalidConfiguration { rows: usize, columns: usize },

    /// An empty cell was used where a player colour is required.
    #[display(fmt = "an empty cell has no player colour")]
    EmptyCell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = EngineError::OutOfBoundsIndex { index: 64, len: 64 };
        assert_eq!(err.to_string(), "index 64 is outside the board (64 cells)");
    }

    #[test]
    fn invalid_configuration_display() {
        let err = EngineError::InvalidConfiguration {
            rows: 3,
            columns: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid board size 3x8: both sides must be even and at least 2"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(EngineError::IllegalMove { index: 0 });
        assert_eq!(err.to_string(), "illegal move at index 0");
    }
}
