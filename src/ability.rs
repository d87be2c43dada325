//! Ability stencils (cone, cross, diamond) and stamping onto a board.
//!
//! A stencil is a square `K×K` grid of marked cells with a unique center at
//! `K / 2`, so `K` must be odd. Stamping translates every marked cell by the
//! origin minus the center and turns the cells that land on the board into
//! `Effect`. Cells that fall off the board are dropped.

use alloc::vec::Vec;
use core::fmt;

use crate::board::{Board, CellState};
use crate::common::TemplateError;
use crate::config::MAX_DIMENSION;

/// Which of the three stencils an ability uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum TemplateKind {
    Cone,
    Cross,
    Diamond,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Cone,
        TemplateKind::Cross,
        TemplateKind::Diamond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Cone => "cone",
            TemplateKind::Cross => "cross",
            TemplateKind::Diamond => "diamond",
        }
    }

    /// Shape rule for stencil cell (`i`, `j`) around `center`.
    fn marks(self, i: usize, j: usize, center: usize) -> bool {
        let di = i.abs_diff(center);
        let dj = j.abs_diff(center);
        match self {
            // Widens downward from the top-center cell.
            TemplateKind::Cone => i <= center && dj <= i,
            TemplateKind::Cross => i == center || j == center,
            TemplateKind::Diamond => di + dj <= center,
        }
    }
}

/// Immutable square binary stencil.
#[derive(Clone, PartialEq, Eq)]
pub struct Template {
    size: usize,
    marked: Vec<bool>,
}

impl Template {
    /// Build the stencil for `kind`. `size` must be odd and at most
    /// [`MAX_DIMENSION`].
    pub fn build(kind: TemplateKind, size: usize) -> Result<Self, TemplateError> {
        if size % 2 == 0 {
            return Err(TemplateError::EvenSize(size));
        }
        if size > MAX_DIMENSION {
            return Err(TemplateError::TooLarge(size));
        }
        let center = size / 2;
        let marked = (0..size * size)
            .map(|idx| kind.marks(idx / size, idx % size, center))
            .collect();
        Ok(Template { size, marked })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn center(&self) -> usize {
        self.size / 2
    }

    /// Whether stencil cell (`i`, `j`) is marked. Out-of-range cells are not.
    pub fn is_marked(&self, i: usize, j: usize) -> bool {
        i < self.size && j < self.size && self.marked[i * self.size + j]
    }

    /// Marked stencil cells in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Template {}x{}:", self.size, self.size)?;
        for i in 0..self.size {
            for j in 0..self.size {
                f.write_str(if self.is_marked(i, j) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The three stencils built for one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub cone: Template,
    pub cross: Template,
    pub diamond: Template,
}

impl TemplateSet {
    pub fn get(&self, kind: TemplateKind) -> &Template {
        match kind {
            TemplateKind::Cone => &self.cone,
            TemplateKind::Cross => &self.cross,
            TemplateKind::Diamond => &self.diamond,
        }
    }
}

/// Build cone, cross and diamond stencils of `size`. Fails for even or
/// oversized sizes.
pub fn build_templates(size: usize) -> Result<TemplateSet, TemplateError> {
    Ok(TemplateSet {
        cone: Template::build(TemplateKind::Cone, size)?,
        cross: Template::build(TemplateKind::Cross, size)?,
        diamond: Template::build(TemplateKind::Diamond, size)?,
    })
}

/// Stamp `template` centered at (`row`, `col`), returning the number of
/// board cells set to `Effect`.
pub fn apply(board: &mut Board, template: &Template, row: isize, col: isize) -> usize {
    let offset = template.center() as isize;
    let mut written = 0;
    for (i, j) in template.marked() {
        // a target that overflows `isize` is off the board
        let target = row
            .checked_add(i as isize - offset)
            .zip(col.checked_add(j as isize - offset));
        if let Some((r, c)) = target.filter(|&(r, c)| board.contains(r, c)) {
            board.set(r as usize, c as usize, CellState::Effect);
            written += 1;
        }
    }
    written
}
