//! Shared presentation types for the gridscape viewer.
//!
//! # Invariants
//! - These are plain data types; all behavior lives in the crates that
//!   consume them.
//! - Defaults match the viewer's startup state: point fill, black
//!   background.

mod types;

pub use types::{FillMode, RenderSettings, Rgba};
