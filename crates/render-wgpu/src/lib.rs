//! wgpu render backend for the grid viewport.
//!
//! Draws a single static grid mesh with a vertex-color pipeline in one of
//! three fill modes (point, wireframe, solid).
//!
//! # Invariants
//! - Vertex and index buffers are created once and never rewritten.
//! - The renderer never mutates camera or settings state.
//! - Pipeline selection is per frame from `RenderSettings::fill_mode`.

mod gpu;
mod shaders;

pub use gpu::{required_features, GridRenderer, DEPTH_FORMAT};
