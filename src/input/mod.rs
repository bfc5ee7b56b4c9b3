//! Pointer and touch input handling for the availability grid.
//!
//! This module implements the gesture lifecycle that turns press/move/release
//! streams into selection mutations.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`GestureState`) to track
//! the current interaction. Mouse and touch deliver the same typed events;
//! the only modality difference is whether the target cell arrives resolved
//! (pointer hover) or as a raw coordinate for hit testing (touch).
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `event` - Typed input events and target resolution payloads
//! - `controller` - Event dispatch, mode freezing, rectangle recomputation

mod controller;
mod event;
mod state;

pub use controller::GestureController;
pub use event::{PointerInput, PointerTarget};
pub use state::GestureState;
