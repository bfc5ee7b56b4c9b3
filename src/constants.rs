//! Crate-wide constants.
//!
//! Centralizes the grid dimensions and layout values so they are defined
//! in exactly one place.

// ============================================================================
// Grid Dimensions
// ============================================================================

/// Number of day columns in the default weekly grid
pub const DAY_COUNT: u8 = 7;

/// First hour row in the default grid (inclusive)
pub const HOUR_MIN: u8 = 5;

/// Last hour row in the default grid (inclusive)
pub const HOUR_MAX: u8 = 22;

/// Number of hour rows in the default grid
pub const HOUR_COUNT: u8 = HOUR_MAX - HOUR_MIN + 1;

/// Total cell count of the default grid
pub const CELL_COUNT: usize = DAY_COUNT as usize * HOUR_COUNT as usize;

/// Column labels for the default weekly grid, Monday first
pub const DAY_LABELS: [&str; DAY_COUNT as usize] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ============================================================================
// Layout Metrics
// ============================================================================

/// Height of the day-header row in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Width of the time-label column in pixels
pub const TIME_LABEL_WIDTH: f32 = 80.0;

/// Width of the time-label column on narrow viewports
pub const TIME_LABEL_WIDTH_COMPACT: f32 = 60.0;
