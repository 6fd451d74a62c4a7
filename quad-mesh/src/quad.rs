//! Tessellated quad generation

use tracing::{debug, error};

use crate::fan::push_fan_vertices;
use crate::grid::push_grid_vertices;
use crate::indices::build_indices;
use crate::params::{QuadError, QuadParams};
use crate::vertex::QuadVertex;

/// Generate the vertices of a tessellated, optionally rounded quad
///
/// # Returns
/// Exactly [`QuadParams::vertex_count`] vertices: the grid and tab vertices in
/// column-major order followed by the interleaved corner fan vertices. Invalid
/// parameters are logged at error level and nothing is generated.
///
/// # UV Mapping
/// - U maps 0→1 along X (left to right)
/// - V maps 0→1 along Y from the top edge down to the bottom edge
pub fn generate_quad_vertices<V: QuadVertex>(params: &QuadParams) -> Result<Vec<V>, QuadError> {
    let layout = params
        .layout()
        .inspect_err(|e| error!("generate_quad_vertices: {}", e))?;

    let num_verts = layout.vertex_count();
    let mut vertices = Vec::with_capacity(num_verts);

    push_grid_vertices(&layout, &mut vertices);
    if layout.is_rounded() {
        push_fan_vertices(&layout, &mut vertices);
    }

    debug_assert_eq!(vertices.len(), num_verts, "failed to fill vertex array");

    debug!(
        "generate_quad_vertices: {}x{} quad, {}x{} grid, radius {} with {} corner verts -> {} verts",
        params.size_x,
        params.size_y,
        params.num_verts_x,
        params.num_verts_y,
        layout.radius,
        layout.corner_verts,
        num_verts
    );
    Ok(vertices)
}

/// Like [`generate_quad_vertices`], but invalid parameters yield an empty
/// vector instead of an error (the failure is still logged)
pub fn generate_quad_vertices_or_empty<V: QuadVertex>(params: &QuadParams) -> Vec<V> {
    generate_quad_vertices(params).unwrap_or_default()
}

/// Vertices and matching triangle indices of one quad
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh<V> {
    pub vertices: Vec<V>,
    /// Triangle list, counter-clockwise when viewed from +Z
    pub indices: Vec<u16>,
}

impl<V> QuadMesh<V> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate vertices and indices together
pub fn generate_quad_mesh<V: QuadVertex>(params: &QuadParams) -> Result<QuadMesh<V>, QuadError> {
    let vertices = generate_quad_vertices(params)?;
    let layout = params.layout()?;
    let indices =
        build_indices(&layout).inspect_err(|e| error!("generate_quad_mesh: {}", e))?;
    Ok(QuadMesh { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{PackedVertexUV, VertexUV};

    #[test]
    fn test_or_empty_on_invalid() {
        let params = QuadParams::new(1.0, 1.0).with_verts(1, 1);
        let verts: Vec<VertexUV> = generate_quad_vertices_or_empty(&params);
        assert!(verts.is_empty());
    }

    #[test]
    fn test_mesh_counts() {
        let params = QuadParams::new(2.0, 1.0)
            .with_verts(6, 4)
            .with_rounded_corners(0.25, 4);
        let mesh: QuadMesh<VertexUV> = generate_quad_mesh(&params).unwrap();
        assert_eq!(mesh.vertex_count(), params.vertex_count().unwrap());
        assert_eq!(mesh.indices.len(), params.index_count().unwrap());
        assert_eq!(mesh.triangle_count() * 3, mesh.indices.len());
    }

    #[test]
    fn test_packed_matches_full_precision() {
        let params = QuadParams::new(1.0, 1.0)
            .with_verts(4, 4)
            .with_rounded_corners(0.25, 2);
        let full: Vec<VertexUV> = generate_quad_vertices(&params).unwrap();
        let packed: Vec<PackedVertexUV> = generate_quad_vertices(&params).unwrap();
        assert_eq!(full.len(), packed.len());
        for (a, b) in full.iter().zip(&packed) {
            assert!(a.position().abs_diff_eq(b.position(), 1e-3));
            assert!(a.uv().abs_diff_eq(b.uv(), 1e-4));
        }
    }

    #[test]
    fn test_mesh_too_large_for_u16() {
        let params = QuadParams::new(1.0, 1.0).with_verts(256, 257);
        let result: Result<QuadMesh<VertexUV>, _> = generate_quad_mesh(&params);
        assert_eq!(result, Err(QuadError::TooManyVertices(256 * 257)));
    }
}
