use bytemuck::{Pod, Zeroable};
use gridscape_common::Rgba;
use thiserror::Error;

/// All grid points share one color; the pipeline is vertex-colored with
/// lighting disabled.
const POINT_COLOR: Rgba = Rgba::WHITE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("grid dimensions must be at least 2x2, got {width}x{length}")]
    DegenerateGrid { width: u32, length: u32 },
}

/// Per-point attributes consumed by the vertex-color pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// A flat grid on the Y=0 plane: `width` rows along Z, `length` points per
/// row along X, triangulated into two triangles per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    vertices: Vec<GridVertex>,
    indices: Vec<u32>,
}

impl GridMesh {
    /// Generate the vertex and index lists for a `width x length` grid.
    ///
    /// Vertices are laid out row-major: point `(x, 0, z)` lands at linear
    /// index `z * length + x`. Each cell `(row, col)` emits the sextet
    /// `(k, k+length, k+length+1, k, k+length+1, k+1)` with
    /// `k = row * length + col`, winding counter-clockwise seen from +Y so
    /// the underside is culled.
    pub fn generate(width: u32, length: u32) -> Result<Self, MeshError> {
        if width < 2 || length < 2 {
            return Err(MeshError::DegenerateGrid { width, length });
        }

        let mut vertices = Vec::with_capacity((width * length) as usize);
        for z in 0..width {
            for x in 0..length {
                vertices.push(GridVertex {
                    position: [x as f32, 0.0, z as f32],
                    color: POINT_COLOR.to_array(),
                });
            }
        }

        let mut indices = Vec::with_capacity(((width - 1) * (length - 1) * 6) as usize);
        for row in 0..width - 1 {
            for col in 0..length - 1 {
                let k = row * length + col;
                indices.extend_from_slice(&[
                    k,
                    k + length,
                    k + length + 1,
                    k,
                    k + length + 1,
                    k + 1,
                ]);
            }
        }

        Ok(Self { vertices, indices })
    }

    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }
}
