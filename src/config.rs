use crate::common::ConfigError;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;
pub const SHIP_SIZE: usize = 3;
pub const ABILITY_SIZE: usize = 5;

/// Largest accepted board side, ship length or stencil side.
pub const MAX_DIMENSION: usize = 1024;

/// Dimensions shared by the board, the placement engine and the stencils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub ship_size: usize,
    pub ability_size: usize,
}

impl GameConfig {
    pub const fn new(rows: usize, cols: usize, ship_size: usize, ability_size: usize) -> Self {
        Self {
            rows,
            cols,
            ship_size,
            ability_size,
        }
    }

    /// Reject dimensions above [`MAX_DIMENSION`] before anything is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.ship_size > MAX_DIMENSION {
            return Err(ConfigError::ShipTooLong(self.ship_size));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLS, SHIP_SIZE, ABILITY_SIZE)
    }
}
