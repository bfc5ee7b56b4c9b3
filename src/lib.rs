//! availgrid - drag-to-select engine for a weekly availability grid.
//!
//! Turns an ordered stream of pointer/touch events into mutations of a
//! selection set over a fixed day x hour grid: press freezes a select or
//! deselect mode from the origin cell, each move refills the inclusive
//! rectangle between the origin and the latest resolved cell, release ends
//! the gesture. Touch coordinates are resolved to cells with an R-tree hit
//! test over the rendered layout; rendering itself is the host's job and
//! the selection set is the sole observable output.
//!
//! ```ignore
//! use availgrid::{
//!     AvailabilityGrid, Cell, GestureController, GridConfig, GridLayout,
//!     PointerInput, RTreeHitTester, SurfacePoint,
//! };
//!
//! let config = GridConfig::default();
//! let layout = GridLayout::new(config, SurfacePoint::new(0.0, 0.0), 780.0, 400.0)?;
//! let mut controller =
//!     GestureController::new(AvailabilityGrid::new(config), RTreeHitTester::from_layout(&layout));
//!
//! controller.handle(PointerInput::press(Cell::new(1, 6)));
//! controller.handle(PointerInput::move_to(Cell::new(3, 9)));
//! controller.handle(PointerInput::Release);
//! assert_eq!(controller.selected_count(), 12);
//! ```

pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod perf;
pub mod types;

pub use error::{GridError, GridResult};
pub use grid::{AvailabilityGrid, GridConfig};
pub use hit_test::{HitTest, RTreeHitTester};
pub use input::{GestureController, GestureState, PointerInput, PointerTarget};
pub use layout::{CellRect, GridLayout};
pub use types::{Cell, SelectionMode, SurfacePoint, day_label, format_hour};
