// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rectangular board shared by the alignment games

use crate::Mark;
use serde::{Deserialize, Serialize};

/// A fixed-size rectangular grid of optional marks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Mark>>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate lies on the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Mark at the given cell, `None` when empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// Place a mark on an empty in-bounds cell.
    ///
    /// Returns false without touching the grid when the cell is occupied
    /// or out of bounds; a placed mark is never reverted.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(mark);
        true
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_get() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.place(1, 2, Mark::A));
        assert_eq!(grid.get(1, 2), Some(Mark::A));
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn place_rejects_occupied_and_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.place(0, 0, Mark::A));
        assert!(!grid.place(0, 0, Mark::B));
        assert_eq!(grid.get(0, 0), Some(Mark::A));
        assert!(!grid.place(3, 0, Mark::B));
    }

    #[test]
    fn full_board_detection() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.is_full());
        for r in 0..2 {
            for c in 0..2 {
                grid.place(r, c, Mark::A);
            }
        }
        assert!(grid.is_full());
    }
}
