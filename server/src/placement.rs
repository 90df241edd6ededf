//! Placement validation.
//!
//! A placement is checked against the board geometry first, then written
//! letter by letter into a snapshot of the board. When a dictionary is
//! present every horizontal and vertical run on the resulting grid must be a
//! dictionary word, not only the word just placed. The snapshot is committed
//! only if all checks pass.

use crate::board::{Board, Cell, Grid};
use crate::dictionary::Dictionary;
use shared::{Orientation, WORD_LIMIT};
use thiserror::Error;

/// Reason a placement was rejected. The board is unchanged in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("empty word")]
    EmptyWord,
    #[error("word is {0} characters, limit is {}", WORD_LIMIT)]
    WordTooLong(usize),
    #[error("{orientation} word of length {len} at ({row}, {column}) leaves the board")]
    OutOfBounds {
        orientation: Orientation,
        row: usize,
        column: usize,
        len: usize,
    },
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("cell ({row}, {column}) already holds {existing:?}")]
    Collision {
        row: usize,
        column: usize,
        existing: char,
    },
    #[error("run `{0}` is not in the dictionary")]
    UnknownWord(String),
}

/// A word proposed for the board, anchored at its first letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub orientation: Orientation,
    pub row: usize,
    pub column: usize,
    pub word: String,
}

impl Placement {
    pub fn new(orientation: Orientation, row: usize, column: usize, word: impl Into<String>) -> Self {
        Self {
            orientation,
            row,
            column,
            word: word.into(),
        }
    }

    /// Length and geometry checks. Needs no board contents, only its size.
    pub fn check_bounds(&self, rows: usize, columns: usize) -> Result<(), PlacementError> {
        let len = self.word.len();
        if len == 0 {
            return Err(PlacementError::EmptyWord);
        }
        if len > WORD_LIMIT {
            return Err(PlacementError::WordTooLong(len));
        }

        let fits = match self.orientation {
            Orientation::Across => {
                self.row < rows && self.column.checked_add(len).map_or(false, |end| end <= columns)
            }
            Orientation::Down => {
                self.column < columns && self.row.checked_add(len).map_or(false, |end| end <= rows)
            }
        };
        if !fits {
            return Err(PlacementError::OutOfBounds {
                orientation: self.orientation,
                row: self.row,
                column: self.column,
                len,
            });
        }

        Ok(())
    }

    /// Writes the word into `grid`. Empty cells and cells already holding
    /// the same letter accept a letter; anything else rejects the placement.
    /// Assumes [`check_bounds`](Self::check_bounds) has passed.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), PlacementError> {
        for (i, letter) in self.word.bytes().enumerate() {
            let (row, column) = match self.orientation {
                Orientation::Across => (self.row, self.column + i),
                Orientation::Down => (self.row + i, self.column),
            };

            if !letter.is_ascii_lowercase() {
                return Err(PlacementError::InvalidCharacter(char::from(letter)));
            }
            match grid.get(row, column) {
                Some(existing) if existing != letter => {
                    return Err(PlacementError::Collision {
                        row,
                        column,
                        existing: char::from(existing),
                    });
                }
                _ => grid.set(row, column, letter),
            }
        }
        Ok(())
    }
}

/// Every maximal run of two or more letters, rows first then columns.
pub fn runs(grid: &Grid) -> Vec<String> {
    let mut runs = Vec::new();
    for row in 0..grid.rows() {
        collect_runs(grid.row(row), &mut runs);
    }
    for column in 0..grid.columns() {
        collect_runs(grid.column(column), &mut runs);
    }
    runs
}

fn collect_runs(line: impl Iterator<Item = Cell>, runs: &mut Vec<String>) {
    let mut current = String::new();
    for cell in line.chain(std::iter::once(None)) {
        match cell {
            Some(letter) => current.push(char::from(letter)),
            None if current.len() >= 2 => runs.push(std::mem::take(&mut current)),
            None => current.clear(),
        }
    }
}

/// Checks every run on `grid` against `dictionary`. Passes trivially when
/// the dictionary is absent.
pub fn validate_runs(grid: &Grid, dictionary: &Dictionary) -> Result<(), PlacementError> {
    if !dictionary.is_present() {
        return Ok(());
    }
    match runs(grid).into_iter().find(|run| !dictionary.contains(run)) {
        Some(run) => Err(PlacementError::UnknownWord(run)),
        None => Ok(()),
    }
}

/// Full placement attempt on a board the caller holds exclusively.
pub fn try_place(
    board: &mut Board,
    dictionary: &Dictionary,
    placement: &Placement,
) -> Result<(), PlacementError> {
    placement.check_bounds(board.rows(), board.columns())?;

    let mut working = board.snapshot();
    placement.apply(&mut working)?;
    validate_runs(&working, dictionary)?;

    board.commit(working);
    Ok(())
}
