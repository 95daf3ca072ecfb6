// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connect Four rules: 6x7 grid with gravity, four in a row wins

use crate::{grid::Grid, Mark, MoveError, MoveOutcome};
use serde::{Deserialize, Serialize};

/// Number of rows (row 0 is the top)
pub const ROWS: usize = 6;
/// Number of columns
pub const COLS: usize = 7;
/// Run length needed to win
pub const WIN_LENGTH: usize = 4;

/// A Connect Four game in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectFour {
    grid: Grid,
    to_move: Mark,
    over: bool,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    /// Create an empty board; `Mark::A` moves first
    pub fn new() -> Self {
        Self {
            grid: Grid::new(ROWS, COLS),
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

    /// Whether a disc can still be dropped into `col`
    pub fn column_open(&self, col: usize) -> bool {
        col < COLS && self.grid.get(0, col).is_none()
    }

    /// Drop the current mark into `col`; the disc settles on the lowest
    /// free row, returned on success.
    pub fn drop_disc(&mut self, col: usize) -> Result<(usize, MoveOutcome), MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            return Err(MoveError::OutOfBounds);
        }

        let Some(row) = self.landing_row(col) else {
            return Err(MoveError::ColumnFull);
        };
        self.grid.place(row, col, self.to_move);

        if self.wins_at(row, col) {
            self.over = true;
            return Ok((row, MoveOutcome::Won));
        }
        if self.grid.is_full() {
            self.over = true;
            return Ok((row, MoveOutcome::Drawn));
        }

        self.to_move = self.to_move.opponent();
        Ok((row, MoveOutcome::Continue))
    }

    /// Lowest empty row of `col`, or `None` when the column is full
    fn landing_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.grid.get(row, col).is_none())
    }

    /// Walk outward from the just-played cell along the four axes and
    /// count consecutive same-mark cells.
    fn wins_at(&self, row: usize, col: usize) -> bool {
        let Some(mark) = self.grid.get(row, col) else {
            return false;
        };
        const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (dr, dc) in AXES {
            let mut run = 1;
            for sign in [-1isize, 1] {
                let (mut r, mut c) = (row as isize + dr * sign, col as isize + dc * sign);
                while r >= 0
                    && c >= 0
                    && self.grid.get(r as usize, c as usize) == Some(mark)
                {
                    run += 1;
                    r += dr * sign;
                    c += dc * sign;
                }
            }
            if run >= WIN_LENGTH {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_settles_on_lowest_free_row() {
        let mut game = ConnectFour::new();
        let (row, _) = game.drop_disc(3).unwrap();
        assert_eq!(row, 5);
        let (row, _) = game.drop_disc(3).unwrap();
        assert_eq!(row, 4);
    }

    #[test]
    fn vertical_four_wins() {
        let mut game = ConnectFour::new();
        // A stacks column 3, B fills column 0
        for _ in 0..3 {
            game.drop_disc(3).unwrap();
            game.drop_disc(0).unwrap();
        }
        // 4th disc lands on rows 5,4,3,2 of column 3
        let (row, outcome) = game.drop_disc(3).unwrap();
        assert_eq!(row, 2);
        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.drop_disc(1), Err(MoveError::GameOver));
    }

    #[test]
    fn horizontal_four_wins() {
        let mut game = ConnectFour::new();
        for col in 0..3 {
            game.drop_disc(col).unwrap(); // A on bottom row
            game.drop_disc(col).unwrap(); // B stacked above
        }
        let (row, outcome) = game.drop_disc(3).unwrap();
        assert_eq!(row, 5);
        assert_eq!(outcome, MoveOutcome::Won);
    }

    #[test]
    fn diagonal_four_wins() {
        let mut game = ConnectFour::new();
        // Build a rising diagonal for A at (5,0) (4,1) (3,2) (2,3).
        game.drop_disc(0).unwrap(); // A (5,0)
        game.drop_disc(1).unwrap(); // B (5,1)
        game.drop_disc(1).unwrap(); // A (4,1)
        game.drop_disc(2).unwrap(); // B (5,2)
        game.drop_disc(3).unwrap(); // A (5,3)
        game.drop_disc(2).unwrap(); // B (4,2)
        game.drop_disc(2).unwrap(); // A (3,2)
        game.drop_disc(3).unwrap(); // B (4,3)
        game.drop_disc(3).unwrap(); // A (3,3)
        game.drop_disc(0).unwrap(); // B (4,0)
        let (row, outcome) = game.drop_disc(3).unwrap(); // A (2,3)
        assert_eq!(row, 2);
        assert_eq!(outcome, MoveOutcome::Won);
    }

    #[test]
    fn full_column_is_rejected_without_mutation() {
        let mut game = ConnectFour::new();
        for _ in 0..3 {
            game.drop_disc(6).unwrap();
            game.drop_disc(6).unwrap();
        }
        let to_move = game.to_move();
        assert_eq!(game.drop_disc(6), Err(MoveError::ColumnFull));
        assert_eq!(game.to_move(), to_move);
        assert!(!game.column_open(6));
        assert!(game.column_open(0));
    }

    #[test]
    fn out_of_bounds_column_is_rejected() {
        let mut game = ConnectFour::new();
        assert_eq!(game.drop_disc(7), Err(MoveError::OutOfBounds));
    }
}
