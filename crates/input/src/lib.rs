//! Input commands and the camera/settings update path.
//!
//! # Invariants
//! - All input reaches the camera and render settings through [`Command`]
//!   values consumed by one update function; no per-widget handlers.
//! - The controller owns only transient drag state; camera and settings are
//!   borrowed per call.

mod command;
mod controller;

pub use command::Command;
pub use controller::{CameraController, DRAG_TILT_DIVISOR, WHEEL_STEP};
