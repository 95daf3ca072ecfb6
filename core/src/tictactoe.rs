// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tic-Tac-Toe rules: 3x3 grid, three identical marks in a row win

use crate::{grid::Grid, Mark, MoveError, MoveOutcome};
use serde::{Deserialize, Serialize};

/// Board edge length
pub const SIZE: usize = 3;

/// The eight winning lines of a 3x3 board (rows, columns, diagonals)
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A Tic-Tac-Toe game in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicTacToe {
    grid: Grid,
    to_move: Mark,
    over: bool,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Create an empty board; `Mark::A` moves first
    pub fn new() -> Self {
        Self {
            grid: Grid::new(SIZE, SIZE),
            to_move: Mark::A,
            over: false,
        }
    }

    /// The mark whose turn it is
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Read access to the board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Play the current mark on `(row, col)`.
    ///
    /// On `Continue` the turn passes to the opponent. Any error leaves
    /// the board untouched.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if self.grid.get(row, col).is_some() {
            return Err(MoveError::Occupied);
        }

        self.grid.place(row, col, self.to_move);

        if self.has_line(self.to_move) {
            self.over = true;
            return Ok(MoveOutcome::Won);
        }
        if self.grid.is_full() {
            self.over = true;
            return Ok(MoveOutcome::Drawn);
        }

        self.to_move = self.to_move.opponent();
        Ok(MoveOutcome::Continue)
    }

    /// Whether `mark` owns a complete line
    fn has_line(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(r, c)| self.grid.get(r, c) == Some(mark))
        })
    }
}
