use battleship_abilities::{
    render, run, Board, CellState, ConfigError, GameConfig, PlacementError, RunError, Scenario,
    TemplateError, TemplateKind, MAX_DIMENSION,
};

const REFERENCE_BOARD: &str = concat!(
    "    0  1  2  3  4  5  6  7  8  9 \n",
    " 0  ~  ~  ~  ~  ~  ~  ~  ~  ~  ~ \n",
    " 1  ~  ~  N  N  *  ~  ~  ~  ~  ~ \n",
    " 2  ~  ~  ~  *  *  *  ~  ~  N  ~ \n",
    " 3  ~  ~  *  *  *  *  *  N  *  ~ \n",
    " 4  ~  ~  ~  ~  ~  N  N  *  *  * \n",
    " 5  ~  ~  *  ~  ~  N  *  *  *  * \n",
    " 6  ~  N  *  ~  ~  N  ~  *  *  * \n",
    " 7  *  *  *  *  *  ~  ~  ~  *  ~ \n",
    " 8  ~  ~  *  N  ~  ~  ~  ~  ~  ~ \n",
    " 9  ~  ~  *  ~  ~  ~  ~  ~  ~  ~ \n",
);

#[test]
fn test_reference_scenario_renders() {
    let board = run(&Scenario::reference()).unwrap();
    assert_eq!(render(&board), REFERENCE_BOARD);
}

#[test]
fn test_reference_scenario_contents() {
    let scenario = Scenario::reference();
    assert_eq!(scenario.config, GameConfig::default());
    assert_eq!(scenario.ships.len(), 4);
    assert_eq!(scenario.abilities.len(), 3);
    assert_eq!(scenario.abilities[1].template, TemplateKind::Cross);
}

#[test]
fn test_empty_scenario_is_empty_board() {
    let board = run(&Scenario::new(GameConfig::new(3, 4, 3, 5))).unwrap();
    assert_eq!(board, Board::new(3, 4));
}

#[test]
fn test_overlapping_ship_fails_fast() {
    let scenario = Scenario::new(GameConfig::default())
        .with_ship(1, 2, 'H')
        .with_ship(1, 2, 'H')
        .with_ship(50, 50, 'V');
    let err = run(&scenario).unwrap_err();
    assert_eq!(
        err,
        RunError::InvalidShip {
            index: 2,
            row: 1,
            col: 2,
            reason: PlacementError::Overlap { row: 1, col: 2 },
        }
    );
    assert_eq!(
        err.to_string(),
        "ship 2 is invalid at (1, 2): cell (1, 2) is already occupied"
    );
}

#[test]
fn test_out_of_bounds_ship_reports_index() {
    let scenario = Scenario::new(GameConfig::default()).with_ship(9, 9, 'D');
    match run(&scenario).unwrap_err() {
        RunError::InvalidShip {
            index,
            row,
            col,
            reason,
        } => {
            assert_eq!((index, row, col), (1, 9, 9));
            assert_eq!(reason, PlacementError::OutOfBounds { row: 10, col: 10 });
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_orientation_ship() {
    let scenario = Scenario::new(GameConfig::default())
        .with_ship(0, 0, 'H')
        .with_ship(5, 5, 'Q');
    assert_eq!(
        run(&scenario).unwrap_err(),
        RunError::InvalidShip {
            index: 2,
            row: 5,
            col: 5,
            reason: PlacementError::InvalidOrientation('Q'),
        }
    );
}

#[test]
fn test_even_ability_size_fails() {
    let scenario =
        Scenario::new(GameConfig::new(10, 10, 3, 4)).with_ability(TemplateKind::Cone, 1, 1);
    assert_eq!(
        run(&scenario).unwrap_err(),
        RunError::Template(TemplateError::EvenSize(4))
    );
}

#[test]
fn test_abilities_applied_in_order_over_ships() {
    let scenario = Scenario::new(GameConfig::new(5, 5, 3, 3))
        .with_ship(2, 0, 'H')
        .with_ability(TemplateKind::Cross, 2, 2);
    let board = run(&scenario).unwrap();
    assert_eq!(board.get(2, 0), CellState::Ship);
    assert_eq!(board.get(2, 1), CellState::Effect);
    assert_eq!(board.get(2, 2), CellState::Effect);
    assert_eq!(board.count(CellState::Effect), 5);
    assert_eq!(board.count(CellState::Ship), 1);
}

#[test]
fn test_scenario_json_roundtrip() {
    let scenario = Scenario::reference();
    let json = serde_json::to_string(&scenario).unwrap();
    let back: Scenario = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scenario);
}

#[test]
fn test_scenario_json_defaults() {
    let json = r#"{
        "ships": [{ "row": 0, "col": 0, "orientation": "V" }],
        "abilities": [{ "template": "diamond", "row": 9, "col": 9 }]
    }"#;
    let scenario: Scenario = serde_json::from_str(json).unwrap();
    assert_eq!(scenario.config, GameConfig::default());
    let board = run(&scenario).unwrap();
    assert_eq!(board.count(CellState::Ship), 3);
    assert_eq!(board.count(CellState::Effect), 6);
}

#[test]
fn test_oversized_config_rejected_before_allocation() {
    let huge = Scenario::new(GameConfig::new(usize::MAX, usize::MAX, 3, 5));
    assert_eq!(
        run(&huge).unwrap_err(),
        RunError::Config(ConfigError::BoardTooLarge {
            rows: usize::MAX,
            cols: usize::MAX,
        })
    );

    let long_ship = Scenario::new(GameConfig::new(10, 10, usize::MAX, 5)).with_ship(0, 0, 'H');
    assert_eq!(
        run(&long_ship).unwrap_err(),
        RunError::Config(ConfigError::ShipTooLong(usize::MAX))
    );

    let wide = GameConfig::new(MAX_DIMENSION, MAX_DIMENSION + 1, 3, 5);
    assert!(wide.validate().is_err());
    assert!(GameConfig::new(MAX_DIMENSION, MAX_DIMENSION, 3, 5).validate().is_ok());
}

#[test]
fn test_abilities_at_extreme_origins_are_clipped() {
    let scenario = Scenario::new(GameConfig::default())
        .with_ability(TemplateKind::Cross, isize::MAX, isize::MAX)
        .with_ability(TemplateKind::Diamond, isize::MIN, 0);
    assert_eq!(run(&scenario).unwrap(), Board::new(10, 10));
}
