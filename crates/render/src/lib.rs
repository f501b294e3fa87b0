//! Renderer-agnostic redraw driver for the continuous paint loop.
//!
//! # Invariants
//! - Redraws are re-requested after a frame completes, never from a timer.
//! - While suspended (modal dialog open), the loop does not re-trigger
//!   itself; event-driven repaints still go through the host queue.

mod driver;

pub use driver::{FrameRequester, RedrawDriver};
