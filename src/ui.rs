//! Text rendering of a board.

use alloc::string::String;
use core::fmt::Write;

use crate::board::{Board, CellState};

/// Display symbol for a cell; `?` for a coordinate the board cannot resolve.
pub fn cell_symbol(cell: Option<CellState>) -> char {
    match cell {
        Some(CellState::Water) => '~',
        Some(CellState::Ship) => 'N',
        Some(CellState::Effect) => '*',
        None => '?',
    }
}

/// Render `board` as a header of column indices followed by one line per row.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_board(&mut out, board);
    out
}

fn write_board<W: Write>(out: &mut W, board: &Board) -> core::fmt::Result {
    out.write_str("   ")?;
    for c in 0..board.cols() {
        write!(out, " {} ", c)?;
    }
    out.write_char('\n')?;
    for r in 0..board.rows() {
        write!(out, "{:2} ", r)?;
        for c in 0..board.cols() {
            let sym = cell_symbol(board.try_get(r as isize, c as isize));
            write!(out, " {} ", sym)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Print the rendered board to stdout.
#[cfg(feature = "std")]
pub fn print_board(board: &Board) {
    std::print!("{}", render(board));
}
