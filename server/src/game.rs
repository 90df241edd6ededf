//! Shared game state handed to every session.
//!
//! The board sits behind one process-wide [`Mutex`]. Every render and every
//! placement attempt takes that lock for its whole duration and releases it
//! before any response is written, so lock-taking operations are totally
//! ordered and no session ever sees a half-committed placement.

use crate::board::{Board, Grid};
use crate::dictionary::Dictionary;
use crate::placement::{self, Placement, PlacementError};
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Arc<Mutex<Board>>,
    dictionary: Arc<Dictionary>,
    rows: usize,
    columns: usize,
}

impl GameState {
    pub fn new(rows: usize, columns: usize, dictionary: Dictionary) -> Self {
        Self {
            board: Arc::new(Mutex::new(Board::new(rows, columns))),
            dictionary: Arc::new(dictionary),
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Attempts a placement as one atomic snapshot/validate/commit step.
    ///
    /// Length and bounds are checked before the lock is taken.
    pub async fn place(&self, placement: &Placement) -> Result<(), PlacementError> {
        placement.check_bounds(self.rows, self.columns)?;

        let mut board = self.board.lock().await;
        let result = placement::try_place(&mut board, &self.dictionary, placement);
        drop(board);

        if let Err(e) = &result {
            debug!(
                "Rejected {} {} {} {}: {}",
                placement.orientation, placement.row, placement.column, placement.word, e
            );
        }
        result
    }

    pub async fn render(&self) -> String {
        self.board.lock().await.render()
    }

    pub async fn snapshot(&self) -> Grid {
        self.board.lock().await.snapshot()
    }
}
