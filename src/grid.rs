//! Grid model - the fixed day x hour coordinate space and its selection set.
//!
//! The selection is the only observable state the engine produces. All
//! operations are total: coordinates outside the configured grid are
//! rejected as no-ops, never as panics or errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DAY_COUNT, HOUR_MAX, HOUR_MIN};
use crate::error::{GridError, GridResult};
use crate::types::{Cell, SelectionMode};

// ============================================================================
// GridConfig
// ============================================================================

/// Dimensions of the grid, fixed at construction.
///
/// `days` columns and the inclusive `hour_min..=hour_max` row range. The
/// default is the weekly availability grid: 7 days, hours 5 through 22.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    days: u8,
    hour_min: u8,
    hour_max: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            days: DAY_COUNT,
            hour_min: HOUR_MIN,
            hour_max: HOUR_MAX,
        }
    }
}

impl GridConfig {
    /// Create a config with `days` columns and rows for `hour_min..=hour_max`.
    pub fn new(days: u8, hour_min: u8, hour_max: u8) -> GridResult<Self> {
        if days == 0 {
            return Err(GridError::InvalidDayCount(days));
        }
        if hour_min > hour_max {
            return Err(GridError::InvalidHourRange {
                min: hour_min,
                max: hour_max,
            });
        }
        Ok(Self {
            days,
            hour_min,
            hour_max,
        })
    }

    /// Number of day columns.
    pub fn days(&self) -> u8 {
        self.days
    }

    /// First hour row (inclusive).
    pub fn hour_min(&self) -> u8 {
        self.hour_min
    }

    /// Last hour row (inclusive).
    pub fn hour_max(&self) -> u8 {
        self.hour_max
    }

    /// Number of hour rows.
    pub fn hour_count(&self) -> u8 {
        self.hour_max - self.hour_min + 1
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.days as usize * self.hour_count() as usize
    }

    /// Whether `cell` lies inside the configured coordinate space.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.day < self.days && cell.hour >= self.hour_min && cell.hour <= self.hour_max
    }

    /// Iterate every cell in the grid, column-major (all hours of day 0,
    /// then day 1, ...).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let days = self.days;
        let hour_min = self.hour_min;
        let hour_max = self.hour_max;
        (0..days).flat_map(move |day| (hour_min..=hour_max).map(move |hour| Cell::new(day, hour)))
    }
}

// ============================================================================
// AvailabilityGrid
// ============================================================================

/// The selection set over a fixed grid: membership means "marked available."
///
/// Owned by whoever drives the gesture controller; created empty. Mutation
/// happens through [`toggle`](Self::toggle), [`fill_rect`](Self::fill_rect)
/// and [`clear`](Self::clear) only.
#[derive(Clone, Debug, Default)]
pub struct AvailabilityGrid {
    config: GridConfig,
    selected: HashSet<Cell>,
}

impl AvailabilityGrid {
    /// Create an empty grid with the given dimensions.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            selected: HashSet::new(),
        }
    }

    /// The dimensions this grid was constructed with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Whether `cell` is currently selected.
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selected.contains(&cell)
    }

    /// Current selection cardinality, for user-facing counts.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate the selected cells in unspecified order.
    pub fn selected_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.selected.iter().copied()
    }

    /// The selected cells in sorted order, for stable serialization
    /// and assertions.
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.selected.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Flip membership of a single cell.
    ///
    /// Applying `toggle` twice with no intervening mutation restores the
    /// prior state. Out-of-bounds cells are ignored.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.config.contains(cell) {
            tracing::trace!(%cell, "toggle outside grid ignored");
            return;
        }
        if !self.selected.insert(cell) {
            self.selected.remove(&cell);
        }
    }

    /// Fill the inclusive rectangle spanned by `origin` and `target`.
    ///
    /// Every cell in `min..=max` on each axis is added (`Select`) or removed
    /// (`Deselect`). The call mutates the current set directly rather than
    /// replaying from a gesture-start snapshot: cells touched by an earlier,
    /// larger rectangle in the same gesture keep whatever state that call
    /// left them in when the rectangle later shrinks. If either corner is
    /// outside the grid the call is a no-op.
    pub fn fill_rect(&mut self, origin: Cell, target: Cell, mode: SelectionMode) {
        if !self.config.contains(origin) || !self.config.contains(target) {
            tracing::trace!(%origin, %target, "fill_rect outside grid ignored");
            return;
        }

        let day_min = origin.day.min(target.day);
        let day_max = origin.day.max(target.day);
        let hour_min = origin.hour.min(target.hour);
        let hour_max = origin.hour.max(target.hour);

        for day in day_min..=day_max {
            for hour in hour_min..=hour_max {
                let cell = Cell::new(day, hour);
                match mode {
                    SelectionMode::Select => {
                        self.selected.insert(cell);
                    }
                    SelectionMode::Deselect => {
                        self.selected.remove(&cell);
                    }
                }
            }
        }
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
