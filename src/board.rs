//! Board state: a fixed-size grid of water, ship and effect cells.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::config::GameConfig;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Water,
    Ship,
    Effect,
}

/// Row-major grid of cell states. Never resized after creation.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create a `rows × cols` board filled with water.
    ///
    /// Panics if `rows * cols` overflows; [`GameConfig::validate`] bounds
    /// both sides for scenario input.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("board {}x{} overflows", rows, cols));
        Board {
            rows,
            cols,
            cells: vec![CellState::Water; len],
        }
    }

    /// Create an empty board sized by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the signed coordinate lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell at (`row`, `col`). Panics when out of bounds; callers check first.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at (`row`, `col`). Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Cell at a signed coordinate, or `None` when it is off the board.
    pub fn try_get(&self, row: isize, col: isize) -> Option<CellState> {
        if self.contains(row, col) {
            Some(self.get(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate all cells as `(row, col, state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (i / cols, i % cols, s))
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} board",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ {}x{}, ships: {}, effects: {} }}",
            self.rows,
            self.cols,
            self.count(CellState::Ship),
            self.count(CellState::Effect)
        )
    }
}
