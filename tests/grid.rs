use seating::{Cell, Error, Grid, Position};

#[test]
fn parse_reads_cells_and_dimensions() {
    let grid = Grid::parse("L.#\n#L.\n").unwrap();

    assert_eq!(grid.dimensions(), (2, 3));
    assert_eq!(grid.at(0, 0), Cell::Empty);
    assert_eq!(grid.at(0, 1), Cell::Floor);
    assert_eq!(grid.at(0, 2), Cell::Occupied);
    assert_eq!(grid.at(1, 0), Cell::Occupied);
    assert_eq!(grid.occupied_count(), 2);
    assert_eq!(grid.empty_count(), 2);
    assert_eq!(grid.count(Cell::Floor), 2);
}

#[test]
fn parse_skips_blank_lines() {
    let grid: Grid = "\nL.\n\n.L\n\n".parse().unwrap();

    assert_eq!(grid.dimensions(), (2, 2));
    assert_eq!(grid.to_string(), "L.\n.L");
}

#[test]
fn parse_rejects_empty_input() {
    assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
    assert!(matches!(Grid::parse("\n\n"), Err(Error::EmptyGrid)));
}

#[test]
fn parse_rejects_inconsistent_rows() {
    assert!(matches!(
        Grid::parse("L.L\nLL\n"),
        Err(Error::InconsistentRow(1, 2, 3))
    ));
}

#[test]
fn parse_rejects_invalid_chars() {
    assert!(matches!(
        Grid::parse("L.L\nLxL\n"),
        Err(Error::InvalidCellChar('x', 1, 1))
    ));
    assert!(matches!(
        Grid::parse("Ł"),
        Err(Error::InvalidCellChar('Ł', 0, 0))
    ));
}

#[test]
fn display_round_trips_layout() {
    let text = "L.LL.LL.LL\nLLLLLLL.LL\n#.#.#..#..";
    let grid = Grid::parse(text).unwrap();

    assert_eq!(grid.to_string(), text);
}

#[test]
fn equality_is_structural() {
    let grid = Grid::parse("#.\nL#").unwrap();

    assert_eq!(grid, Grid::parse("#.\nL#").unwrap());
    // Same occupied count, different layout.
    assert_ne!(grid, Grid::parse("#L\n.#").unwrap());
    // Same cells in a different shape.
    assert_ne!(grid, Grid::parse("#.L#").unwrap());
}

#[test]
fn get_returns_none_out_of_grid() {
    let grid = Grid::parse("L.\n.#").unwrap();

    assert_eq!(grid.get(&Position::new(1, 1)), Some(Cell::Occupied));
    assert_eq!(grid.get(&Position::new(2, 0)), None);
    assert_eq!(grid.get(&Position::new(0, 2)), None);
}

#[test]
#[should_panic(expected = "out of grid")]
fn at_panics_out_of_grid() {
    let grid = Grid::parse("L.\n.#").unwrap();
    grid.at(0, 2);
}

#[test]
fn read_grid_from_file() {
    let grid = seating::read_grid("demo_inputs.txt").unwrap();

    assert_eq!(grid.dimensions(), (10, 10));
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.empty_count(), 71);
}

#[test]
fn read_grid_reports_missing_file() {
    assert!(matches!(
        seating::read_grid("no_such_inputs.txt"),
        Err(Error::IOError(_))
    ));
}
