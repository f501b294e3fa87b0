//! Free camera model: position, yaw, pitch, and derived transforms.
//!
//! # Invariants
//! - Pitch stays strictly inside `(-PI/2, PI/2)`.
//! - View and projection matrices are derived on demand, never cached.
//! - Planar movement (advance/strafe) follows yaw only; pitch affects the
//!   look-at point, not translation.

mod camera;

pub use camera::{FreeCamera, PITCH_LIMIT};
