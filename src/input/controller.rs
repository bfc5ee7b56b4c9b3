//! Gesture controller - turns the raw event stream into grid mutations.
//!
//! ## Performance Notes
//!
//! Move events arrive very frequently during a drag (60+ times per second
//! on pointer input). Key properties of the hot path:
//! - Early exit when no gesture is active
//! - O(log n) touch resolution via the R-tree hit tester
//! - Rectangle fills bounded by the fixed grid size
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use tracing::{debug, trace, warn};

use crate::grid::AvailabilityGrid;
use crate::hit_test::HitTest;
use crate::input::event::{PointerInput, PointerTarget};
use crate::input::state::GestureState;
use crate::profile_scope;
use crate::types::{Cell, SelectionMode};

/// Drives an [`AvailabilityGrid`] from an ordered stream of pointer/touch
/// events.
///
/// The controller owns the grid it mutates and the hit-test strategy it
/// resolves touch coordinates with; both are injected at construction and
/// fixed for the session. All handling is synchronous on the caller's
/// thread, in event order.
pub struct GestureController<H: HitTest> {
    grid: AvailabilityGrid,
    hit_tester: H,
    state: GestureState,
}

impl<H: HitTest> GestureController<H> {
    /// Create a controller over `grid`, resolving touch coordinates with
    /// `hit_tester`.
    pub fn new(grid: AvailabilityGrid, hit_tester: H) -> Self {
        Self {
            grid,
            hit_tester,
            state: GestureState::Idle,
        }
    }

    /// The grid this controller mutates.
    pub fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }

    /// Whether a gesture is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Whether `cell` is currently selected. Convenience forward for
    /// renderers querying after each event.
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.grid.is_selected(cell)
    }

    /// Current selection cardinality, for the user-facing count.
    pub fn selected_count(&self) -> usize {
        self.grid.selected_count()
    }

    /// Host-facing "reset availability" action. Does not disturb an
    /// in-progress gesture: its origin and mode stay frozen.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Feed one input event. Events must arrive in physical order.
    pub fn handle(&mut self, input: PointerInput) {
        match input {
            PointerInput::Press(target) => self.handle_press(target),
            PointerInput::Move(target) => self.handle_move(target),
            PointerInput::Release => self.handle_release(),
            PointerInput::Click(target) => self.handle_click(target),
        }
    }

    /// Map a target to a cell, or `None` for an unresolvable coordinate.
    ///
    /// Both modalities funnel through here so the state machine has a
    /// single entry point per transition. A pre-resolved cell outside the
    /// grid bounds is treated the same as a hit-test miss.
    fn resolve(&self, target: PointerTarget) -> Option<Cell> {
        match target {
            PointerTarget::Cell(cell) => self.grid.config().contains(cell).then_some(cell),
            PointerTarget::Surface(point) => {
                profile_scope!("hit_test");
                self.hit_tester.hit(point)
            }
        }
    }

    fn handle_press(&mut self, target: PointerTarget) {
        // A press while a gesture is still open means the previous release
        // was never observed (it landed outside the host's listener).
        // Terminate the stale gesture so its origin/mode cannot resume.
        if self.state.is_dragging() {
            warn!(origin = ?self.state.origin(), "press with gesture still open, releasing stale gesture");
            self.state.reset();
        }

        let Some(cell) = self.resolve(target) else {
            trace!("press did not resolve to a cell, staying idle");
            return;
        };

        let mode = if self.grid.is_selected(cell) {
            SelectionMode::Deselect
        } else {
            SelectionMode::Select
        };
        self.state.start_drag(cell, mode);
        // Degenerate 1x1 rectangle: a press without movement already
        // mutates exactly one cell.
        self.grid.fill_rect(cell, cell, mode);
        debug!(origin = %cell, ?mode, "gesture started");
    }

    fn handle_move(&mut self, target: PointerTarget) {
        profile_scope!("handle_move");

        let GestureState::Dragging { origin, mode } = self.state else {
            return;
        };

        let Some(cell) = self.resolve(target) else {
            // Expected during fast or imprecise touch movement; the frozen
            // origin and mode are untouched.
            trace!("move did not resolve to a cell, ignored");
            return;
        };

        self.grid.fill_rect(origin, cell, mode);
        trace!(%origin, target = %cell, ?mode, "rectangle recomputed");
    }

    fn handle_release(&mut self) {
        if self.state.is_dragging() {
            debug!(
                origin = ?self.state.origin(),
                selected = self.grid.selected_count(),
                "gesture ended"
            );
            self.state.reset();
        }
    }

    fn handle_click(&mut self, target: PointerTarget) {
        // A click delivered mid-drag belongs to the same contact the
        // press/release path already handled; applying it too would
        // double-mutate the origin cell.
        if self.state.is_dragging() {
            trace!("click during active gesture ignored");
            return;
        }

        let Some(cell) = self.resolve(target) else {
            trace!("click did not resolve to a cell, ignored");
            return;
        };

        self.grid.toggle(cell);
        debug!(%cell, selected = self.grid.is_selected(cell), "cell toggled");
    }
}
