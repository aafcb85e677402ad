//! Miscellaneous project utilities.

use crate::location::COLUMN_LETTERS;
use crate::BoardSize;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format one character per cell into a pretty grid with row numbers and
/// column headers. `piece_iter` must yield exactly `size.len()` items.
///
/// Columns are lettered while the board has at most 26 of them; wider boards
/// get 1-based column numbers, with every cell padded to the header width.
pub fn format_grid<T: Iterator<Item = char>>(
    size: BoardSize,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    let label_width = size.rows().to_string().len();
    let lettered = size.columns() <= COLUMN_LETTERS.len();
    let cell_width = if lettered {
        1
    } else {
        size.columns().to_string().len()
    };

    write!(f, "{:width$} ", "", width = label_width)?;
    for col in 0..size.columns() {
        match COLUMN_LETTERS.chars().nth(col).filter(|_| lettered) {
            Some(letter) => write!(f, " {}", letter)?,
            None => write!(f, " {:>width$}", col + 1, width = cell_width)?,
        }
    }

    for row in 0..size.rows() {
        write!(f, "\n{:>width$} ", row + 1, width = label_width)?;
        for _ in 0..size.columns() {
            let piece = piece_iter.next().ok_or(fmt::Error)?;
            write!(f, " {:>width$}", piece, width = cell_width)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
