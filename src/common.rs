//! Common types for the ability board: placement, template and run errors.

use core::fmt;

/// Reason a ship segment cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Orientation symbol is not one of `H`, `V`, `D`, `A`.
    InvalidOrientation(char),
    /// A segment cell falls outside the board.
    OutOfBounds { row: isize, col: isize },
    /// A segment cell is already occupied.
    Overlap { row: isize, col: isize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidOrientation(sym) => {
                write!(f, "unknown orientation symbol {:?}", sym)
            }
            PlacementError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            PlacementError::Overlap { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

/// Errors returned when building ability stencils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    /// Stencil size has no unique center cell.
    EvenSize(usize),
    /// Stencil side exceeds `MAX_DIMENSION`.
    TooLarge(usize),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::EvenSize(size) => {
                write!(f, "stencil size {} must be odd", size)
            }
            TemplateError::TooLarge(size) => {
                write!(f, "stencil size {} is too large", size)
            }
        }
    }
}

/// Board or ship dimensions a run refuses to allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooLarge { rows: usize, cols: usize },
    ShipTooLong(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooLarge { rows, cols } => {
                write!(f, "board {}x{} is too large", rows, cols)
            }
            ConfigError::ShipTooLong(len) => write!(f, "ship size {} is too large", len),
        }
    }
}

/// Errors that abort a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    /// Ship number `index` (1-based) could not be placed at its origin.
    InvalidShip {
        index: usize,
        row: isize,
        col: isize,
        reason: PlacementError,
    },
    /// Stencils could not be built for the configured size.
    Template(TemplateError),
    /// Configured dimensions are out of range.
    Config(ConfigError),
}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::Config(err)
    }
}

impl From<TemplateError> for RunError {
    fn from(err: TemplateError) -> Self {
        RunError::Template(err)
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InvalidShip {
                index,
                row,
                col,
                reason,
            } => write!(f, "ship {} is invalid at ({}, {}): {}", index, row, col, reason),
            RunError::Template(e) => write!(f, "template error: {}", e),
            RunError::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for TemplateError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RunError {}
