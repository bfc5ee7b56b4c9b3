//! Grid model tests - selection set operations and their invariants.

use availgrid::{AvailabilityGrid, Cell, GridConfig, GridError, SelectionMode};

use crate::helpers::{assert_selected_exactly, rect_cells};

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn toggle_is_an_involution() {
    let mut grid = AvailabilityGrid::default();
    let cell = Cell::new(4, 12);

    grid.toggle(cell);
    grid.toggle(cell);
    assert!(!grid.is_selected(cell));

    // Starting selected: two toggles restore membership too
    grid.toggle(cell);
    assert!(grid.is_selected(cell));
    grid.toggle(cell);
    grid.toggle(cell);
    assert!(grid.is_selected(cell));
}

#[test]
fn toggle_affects_only_the_given_cell() {
    let mut grid = AvailabilityGrid::default();
    grid.toggle(Cell::new(2, 10));

    assert_selected_exactly(&grid, &[Cell::new(2, 10)]);
    assert!(!grid.is_selected(Cell::new(2, 11)));
    assert!(!grid.is_selected(Cell::new(3, 10)));
}

#[test]
fn toggle_out_of_bounds_is_rejected() {
    let mut grid = AvailabilityGrid::default();
    grid.toggle(Cell::new(7, 10));
    grid.toggle(Cell::new(0, 4));
    grid.toggle(Cell::new(0, 23));
    assert!(grid.is_empty());
}

// ============================================================================
// Rectangle fill
// ============================================================================

#[test]
fn fill_rect_selects_the_inclusive_block() {
    let mut grid = AvailabilityGrid::default();
    grid.fill_rect(Cell::new(1, 6), Cell::new(3, 9), SelectionMode::Select);

    assert_selected_exactly(&grid, &rect_cells((1, 6), (3, 9)));
}

#[test]
fn fill_rect_deselect_removes_only_inside_the_block() {
    let mut grid = AvailabilityGrid::default();
    grid.fill_rect(Cell::new(0, 5), Cell::new(4, 10), SelectionMode::Select);
    grid.fill_rect(Cell::new(1, 6), Cell::new(2, 8), SelectionMode::Deselect);

    let expected: Vec<Cell> = rect_cells((0, 5), (4, 10))
        .into_iter()
        .filter(|cell| !rect_cells((1, 6), (2, 8)).contains(cell))
        .collect();
    assert_selected_exactly(&grid, &expected);
}

#[test]
fn fill_rect_degenerate_single_cell() {
    let mut grid = AvailabilityGrid::default();
    grid.fill_rect(Cell::new(5, 20), Cell::new(5, 20), SelectionMode::Select);
    assert_selected_exactly(&grid, &[Cell::new(5, 20)]);

    grid.fill_rect(Cell::new(5, 20), Cell::new(5, 20), SelectionMode::Deselect);
    assert!(grid.is_empty());
}

#[test]
fn fill_rect_mutates_current_set_not_a_snapshot() {
    // Grow then shrink within what would be one gesture: the model itself
    // never reverts cells the larger rectangle touched.
    let mut grid = AvailabilityGrid::default();
    grid.fill_rect(Cell::new(0, 5), Cell::new(0, 9), SelectionMode::Select);
    grid.fill_rect(Cell::new(0, 5), Cell::new(0, 6), SelectionMode::Select);

    assert_selected_exactly(&grid, &rect_cells((0, 5), (0, 9)));
}

#[test]
fn fill_rect_with_out_of_bounds_corner_is_rejected() {
    let mut grid = AvailabilityGrid::default();
    grid.fill_rect(Cell::new(0, 5), Cell::new(7, 9), SelectionMode::Select);
    grid.fill_rect(Cell::new(9, 30), Cell::new(0, 5), SelectionMode::Select);
    assert!(grid.is_empty());
}

// ============================================================================
// Clear and cardinality
// ============================================================================

#[test]
fn clear_empties_regardless_of_prior_state() {
    let mut grid = AvailabilityGrid::default();
    assert!(grid.is_empty());

    grid.clear();
    assert!(grid.is_empty());

    grid.fill_rect(Cell::new(0, 5), Cell::new(6, 22), SelectionMode::Select);
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.selected_count(), 0);
}

#[test]
fn selected_count_tracks_mutations() {
    let mut grid = AvailabilityGrid::default();
    assert_eq!(grid.selected_count(), 0);

    grid.toggle(Cell::new(0, 5));
    assert_eq!(grid.selected_count(), 1);

    grid.fill_rect(Cell::new(1, 6), Cell::new(2, 7), SelectionMode::Select);
    assert_eq!(grid.selected_count(), 5);

    // Overlapping select adds nothing: membership is unique
    grid.fill_rect(Cell::new(1, 6), Cell::new(2, 7), SelectionMode::Select);
    assert_eq!(grid.selected_count(), 5);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_rejects_invalid_dimensions() {
    assert_eq!(GridConfig::new(0, 5, 22), Err(GridError::InvalidDayCount(0)));
    assert_eq!(
        GridConfig::new(7, 23, 5),
        Err(GridError::InvalidHourRange { min: 23, max: 5 })
    );
}

#[test]
fn config_enumerates_the_full_coordinate_space() {
    let config = GridConfig::new(2, 5, 6).unwrap();
    let cells: Vec<Cell> = config.cells().collect();
    assert_eq!(
        cells,
        vec![
            Cell::new(0, 5),
            Cell::new(0, 6),
            Cell::new(1, 5),
            Cell::new(1, 6),
        ]
    );
    assert_eq!(config.cell_count(), 4);
}
