//! Error types for grid construction
//!
//! Provides unified error handling for configuration and layout validation.
//! Runtime event handling has no error surface: unresolved coordinates and
//! out-of-bounds cells are silent no-ops, not faults.

use thiserror::Error;

/// Errors that can occur when constructing a grid or its layout
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// Grid configured with zero day columns
    #[error("Invalid day count: {0} (must be at least 1)")]
    InvalidDayCount(u8),

    /// Hour range is inverted
    #[error("Invalid hour range: {min}..={max}")]
    InvalidHourRange { min: u8, max: u8 },

    /// Layout leaves no room for the cell area
    #[error("Degenerate layout: cell area {width}x{height}")]
    DegenerateLayout { width: f32, height: f32 },
}

/// Result type alias for grid construction
pub type GridResult<T> = Result<T, GridError>;
