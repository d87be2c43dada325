//! Ship orientations and the line-segment placement engine.

use crate::board::{Board, CellState};
use crate::common::PlacementError;

/// Direction a ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagonalDown,
    /// Down and to the left.
    DiagonalAnti,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalAnti,
    ];

    /// Unit step `(drow, dcol)` between consecutive ship cells.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalAnti => (1, -1),
        }
    }

    /// Single-letter symbol used in scenario descriptions.
    pub const fn symbol(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::DiagonalDown => 'D',
            Orientation::DiagonalAnti => 'A',
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = PlacementError;

    fn try_from(sym: char) -> Result<Self, Self::Error> {
        match sym {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            'D' => Ok(Orientation::DiagonalDown),
            'A' => Ok(Orientation::DiagonalAnti),
            other => Err(PlacementError::InvalidOrientation(other)),
        }
    }
}

/// Cells covered by a segment of `len` starting at (`row`, `col`).
pub fn segment(
    row: isize,
    col: isize,
    orientation: Orientation,
    len: usize,
) -> impl Iterator<Item = (isize, isize)> {
    let (dr, dc) = orientation.step();
    (0..len as isize).map(move |i| (row + i * dr, col + i * dc))
}

/// Check a placement, reporting the first offending cell.
pub fn check_placement(
    board: &Board,
    ship_size: usize,
    row: isize,
    col: isize,
    orientation: Orientation,
) -> Result<(), PlacementError> {
    for (r, c) in segment(row, col, orientation, ship_size) {
        match board.try_get(r, c) {
            None => return Err(PlacementError::OutOfBounds { row: r, col: c }),
            Some(CellState::Water) => {}
            Some(_) => return Err(PlacementError::Overlap { row: r, col: c }),
        }
    }
    Ok(())
}

/// Returns `true` if every segment cell is on the board and water.
pub fn can_place(
    board: &Board,
    ship_size: usize,
    row: isize,
    col: isize,
    orientation: Orientation,
) -> bool {
    check_placement(board, ship_size, row, col, orientation).is_ok()
}

/// Like [`can_place`], but an unrecognised symbol is never placeable.
pub fn can_place_symbol(
    board: &Board,
    ship_size: usize,
    row: isize,
    col: isize,
    symbol: char,
) -> bool {
    match Orientation::try_from(symbol) {
        Ok(o) => can_place(board, ship_size, row, col, o),
        Err(_) => false,
    }
}

/// Write `Ship` into every segment cell without re-checking.
///
/// Callers must have confirmed [`can_place`] first. Panics if a cell is off
/// the board; overlapping cells are silently overwritten.
pub fn place(
    board: &mut Board,
    ship_size: usize,
    row: isize,
    col: isize,
    orientation: Orientation,
) {
    for (r, c) in segment(row, col, orientation, ship_size) {
        assert!(r >= 0 && c >= 0, "ship cell ({}, {}) is off the board", r, c);
        board.set(r as usize, c as usize, CellState::Ship);
    }
}
