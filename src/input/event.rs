//! Typed input events consumed by the gesture controller.
//!
//! Both input modalities produce the same event stream; the only difference
//! is how the target cell is carried. Pointer input already knows which cell
//! was entered (the host surface delivers per-cell hover notifications);
//! touch input only knows the contact coordinate and leaves resolution to
//! the hit tester.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, SurfacePoint};

/// Where an event landed, before cell resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Pointer path: the host already resolved the cell under the cursor
    Cell(Cell),
    /// Touch path: a raw surface coordinate that needs hit testing
    Surface(SurfacePoint),
}

impl From<Cell> for PointerTarget {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl From<SurfacePoint> for PointerTarget {
    fn from(point: SurfacePoint) -> Self {
        Self::Surface(point)
    }
}

/// One event in the temporally ordered input stream.
///
/// The host forwards these in the exact order the physical input produced
/// them; mode determination and rectangle recomputation are order-dependent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// Contact started: mouse button down or touch start
    Press(PointerTarget),
    /// Contact moved: mouse entered a cell or touch moved
    Move(PointerTarget),
    /// Contact ended: mouse button up or touch end
    Release,
    /// A bare tap/click outside any drag lifecycle
    Click(PointerTarget),
}

impl PointerInput {
    /// Press on an already-resolved cell.
    pub fn press(cell: impl Into<Cell>) -> Self {
        Self::Press(PointerTarget::Cell(cell.into()))
    }

    /// Move onto an already-resolved cell.
    pub fn move_to(cell: impl Into<Cell>) -> Self {
        Self::Move(PointerTarget::Cell(cell.into()))
    }

    /// Press at a raw surface coordinate.
    pub fn touch_start(point: impl Into<SurfacePoint>) -> Self {
        Self::Press(PointerTarget::Surface(point.into()))
    }

    /// Move to a raw surface coordinate.
    pub fn touch_move(point: impl Into<SurfacePoint>) -> Self {
        Self::Move(PointerTarget::Surface(point.into()))
    }
}
