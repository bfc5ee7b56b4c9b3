//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - Tracing initialization shared across the whole binary
//! - Constructors for the standard test layout and controller
//! - Assertion helpers over the selection set

use availgrid::{
    AvailabilityGrid, Cell, GestureController, GridConfig, GridLayout, RTreeHitTester,
    SurfacePoint,
};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install the test tracing subscriber once for the whole binary.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

// ============================================================================
// Standard fixtures
// ============================================================================

/// The standard test layout: 80px label column plus 7 columns of 100px,
/// 40px header row plus 18 rows of 20px, origin at (0, 0).
pub fn test_layout() -> GridLayout {
    GridLayout::new(
        GridConfig::default(),
        SurfacePoint::new(0.0, 0.0),
        780.0,
        400.0,
    )
    .expect("standard test layout is valid")
}

/// An empty controller over the default grid with an R-tree hit tester
/// built from the standard test layout.
pub fn test_controller() -> GestureController<RTreeHitTester> {
    init_tracing();
    let layout = test_layout();
    GestureController::new(
        AvailabilityGrid::new(*layout.config()),
        RTreeHitTester::from_layout(&layout),
    )
}

/// A controller whose grid already has `cells` selected.
pub fn controller_with_selected(cells: &[(u8, u8)]) -> GestureController<RTreeHitTester> {
    init_tracing();
    let layout = test_layout();
    let mut grid = AvailabilityGrid::new(*layout.config());
    for &(day, hour) in cells {
        grid.toggle(Cell::new(day, hour));
    }
    GestureController::new(grid, RTreeHitTester::from_layout(&layout))
}

/// Surface coordinate at the center of `cell` in the standard test layout.
pub fn center_of(cell: Cell) -> SurfacePoint {
    let bounds = test_layout()
        .cell_bounds(cell)
        .expect("cell is inside the standard test layout");
    SurfacePoint::new(
        (bounds.min_x + bounds.max_x) / 2.0,
        (bounds.min_y + bounds.max_y) / 2.0,
    )
}

/// Every cell of the inclusive rectangle between the two corners, sorted.
pub fn rect_cells(a: (u8, u8), b: (u8, u8)) -> Vec<Cell> {
    let (day_min, day_max) = (a.0.min(b.0), a.0.max(b.0));
    let (hour_min, hour_max) = (a.1.min(b.1), a.1.max(b.1));
    let mut cells = Vec::new();
    for day in day_min..=day_max {
        for hour in hour_min..=hour_max {
            cells.push(Cell::new(day, hour));
        }
    }
    cells.sort();
    cells
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert the selection contains exactly `expected` (order-insensitive).
pub fn assert_selected_exactly(grid: &AvailabilityGrid, expected: &[Cell]) {
    let mut expected: Vec<Cell> = expected.to_vec();
    expected.sort();
    assert_eq!(
        grid.snapshot(),
        expected,
        "selection does not match expected cell set"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_cells_spans_inclusive_block() {
        let cells = rect_cells((1, 6), (3, 9));
        assert_eq!(cells.len(), 12);
        assert!(cells.contains(&Cell::new(1, 6)));
        assert!(cells.contains(&Cell::new(3, 9)));
        assert!(cells.contains(&Cell::new(2, 7)));
    }

    #[test]
    fn test_rect_cells_corner_order_irrelevant() {
        assert_eq!(rect_cells((3, 9), (1, 6)), rect_cells((1, 6), (3, 9)));
    }

    #[test]
    fn test_center_of_first_cell() {
        let center = center_of(Cell::new(0, 5));
        assert_eq!(center.x, 130.0);
        assert_eq!(center.y, 50.0);
    }
}
