//! Core types for the availability grid.
//!
//! This module defines the fundamental data structures shared across the
//! crate: grid cell coordinates, selection mode, surface points for touch
//! hit testing, and the label helpers host renderers use for headers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DAY_LABELS;

// ============================================================================
// Cell
// ============================================================================

/// One coordinate in the fixed day x hour grid.
///
/// `day` counts columns from Monday (0) through Sunday (6) in the default
/// grid; `hour` is the wall-clock hour of the row (24-hour). Cells are plain
/// values: they are never created or destroyed at runtime, only tested for
/// membership in the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Day column index
    pub day: u8,
    /// Wall-clock hour of the row
    pub hour: u8,
}

impl Cell {
    pub fn new(day: u8, hour: u8) -> Self {
        Self { day, hour }
    }

    /// Stable slot identity in `"{day}-{hour}"` form, e.g. `"2-14"`.
    pub fn slot_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.hour)
    }
}

impl From<(u8, u8)> for Cell {
    fn from((day, hour): (u8, u8)) -> Self {
        Self { day, hour }
    }
}

// ============================================================================
// Selection Mode
// ============================================================================

/// Whether an in-progress gesture adds cells to the selection or removes them.
///
/// Decided once at press time from the origin cell's membership and frozen
/// for the rest of the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Cells swept by the gesture become selected
    Select,
    /// Cells swept by the gesture become unselected
    Deselect,
}

// ============================================================================
// Surface Point
// ============================================================================

/// A raw 2-D coordinate on the input surface, in the same units the grid
/// layout was constructed with (pixels, window-relative).
///
/// Touch input only reports these; the hit tester maps them to cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

impl SurfacePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for SurfacePoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Label helpers
// ============================================================================

/// Header label for a day column in the default weekly grid.
pub fn day_label(day: u8) -> Option<&'static str> {
    DAY_LABELS.get(day as usize).copied()
}

/// Format an hour row label on a 12-hour clock, e.g. `"5:00 AM"`.
///
/// Hour 0 renders as `"12:00 AM"` and hour 12 as `"12:00 PM"`.
pub fn format_hour(hour: u8) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:00 {}", display_hour, period)
}
