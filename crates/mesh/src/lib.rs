//! Vertex and index generation for the flat grid mesh.
//!
//! # Invariants
//! - A `width x length` grid produces exactly `width * length` vertices and
//!   `(width - 1) * (length - 1) * 6` indices.
//! - Every index is in bounds; triangle winding is counter-clockwise seen
//!   from +Y.
//! - Meshes are generated once at startup and never mutated.

mod grid;

pub use grid::{GridMesh, GridVertex, MeshError};
