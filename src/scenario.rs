//! Scenario descriptors and the one-shot run pipeline.

use alloc::vec::Vec;

use crate::ability::{apply, build_templates, TemplateKind};
use crate::board::Board;
use crate::common::RunError;
use crate::config::GameConfig;
use crate::ship::{check_placement, place, Orientation};

/// One ship: origin and orientation symbol (`H`, `V`, `D` or `A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    pub row: isize,
    pub col: isize,
    pub orientation: char,
}

/// One ability application: stencil and the board cell it is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityPlacement {
    pub template: TemplateKind,
    pub row: isize,
    pub col: isize,
}

/// Everything needed for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "std", serde(default))]
    pub config: GameConfig,
    #[cfg_attr(feature = "std", serde(default))]
    pub ships: Vec<ShipPlacement>,
    #[cfg_attr(feature = "std", serde(default))]
    pub abilities: Vec<AbilityPlacement>,
}

impl Scenario {
    /// Empty scenario for `config`.
    pub fn new(config: GameConfig) -> Self {
        Scenario {
            config,
            ships: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// Built-in scenario: four ships, one ability of each kind.
    pub fn reference() -> Self {
        Scenario::new(GameConfig::default())
            .with_ship(1, 2, 'H')
            .with_ship(4, 5, 'V')
            .with_ship(6, 1, 'D')
            .with_ship(2, 8, 'A')
            .with_ability(TemplateKind::Cone, 3, 4)
            .with_ability(TemplateKind::Cross, 7, 2)
            .with_ability(TemplateKind::Diamond, 5, 8)
    }

    pub fn with_ship(mut self, row: isize, col: isize, orientation: char) -> Self {
        self.ships.push(ShipPlacement {
            row,
            col,
            orientation,
        });
        self
    }

    pub fn with_ability(mut self, template: TemplateKind, row: isize, col: isize) -> Self {
        self.abilities.push(AbilityPlacement { template, row, col });
        self
    }
}

/// Run `scenario`: place ships (stopping at the first invalid one), build the
/// stencils once, stamp every ability and return the resulting board.
pub fn run(scenario: &Scenario) -> Result<Board, RunError> {
    let config = &scenario.config;
    config.validate()?;
    let mut board = Board::from_config(config);

    for (i, ship) in scenario.ships.iter().enumerate() {
        let invalid = |reason| RunError::InvalidShip {
            index: i + 1,
            row: ship.row,
            col: ship.col,
            reason,
        };
        let orientation = Orientation::try_from(ship.orientation).map_err(invalid)?;
        check_placement(&board, config.ship_size, ship.row, ship.col, orientation)
            .map_err(invalid)?;
        place(&mut board, config.ship_size, ship.row, ship.col, orientation);
        log::debug!(
            "placed ship {} at ({}, {}) {:?}",
            i + 1,
            ship.row,
            ship.col,
            orientation
        );
    }

    let templates = build_templates(config.ability_size)?;
    for ability in &scenario.abilities {
        let written = apply(
            &mut board,
            templates.get(ability.template),
            ability.row,
            ability.col,
        );
        log::debug!(
            "applied {} at ({}, {}): {} cells",
            ability.template.name(),
            ability.row,
            ability.col,
            written
        );
    }

    Ok(board)
}
