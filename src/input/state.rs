//! Gesture state machine - explicit lifecycle state for press-to-release
//! interactions.
//!
//! A single enum replaces scattered is-dragging/drag-mode/drag-start flags,
//! making impossible states (a drag mode without an origin) unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (press resolving to a valid cell; mode frozen here)
//! Dragging -> Dragging (move events; origin and mode never change)
//! Dragging -> Idle     (release)
//! ```

use crate::types::{Cell, SelectionMode};

/// Lifecycle state of the current gesture.
///
/// At most one gesture is active per controller at any time. The `origin`
/// and `mode` of a drag are fixed at press time and reused for every
/// rectangle recomputation until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,

    /// A press-to-release interaction is underway
    Dragging {
        /// Cell the gesture started on; every rectangle spans from here
        origin: Cell,
        /// Select or deselect, from the origin cell's membership at press time
        mode: SelectionMode,
    },
}

impl GestureState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the frozen origin cell, if dragging
    pub fn origin(&self) -> Option<Cell> {
        match self {
            Self::Dragging { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    /// Get the frozen selection mode, if dragging
    pub fn mode(&self) -> Option<SelectionMode> {
        match self {
            Self::Dragging { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Start a drag from `origin` in `mode`
    pub fn start_drag(&mut self, origin: Cell, mode: SelectionMode) {
        *self = Self::Dragging { origin, mode };
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
