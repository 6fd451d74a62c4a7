//! Tessellated quad meshes with rounded corners
//!
//! Generates flat quads on the XY plane as a grid of vertices, optionally with
//! rounded corners built from triangle fans. Each corner can be rounded or
//! left square independently without changing the vertex count, so one index
//! list serves every corner combination.
//!
//! ```
//! use quad_mesh::{
//!     CornerMask, QuadParams, VertexUV, generate_quad_indices, generate_quad_vertices,
//! };
//!
//! let params = QuadParams::new(2.0, 1.0)
//!     .with_verts(6, 4)
//!     .with_rounded_corners(0.2, 4)
//!     .with_corner_mask(CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT);
//!
//! let vertices: Vec<VertexUV> = generate_quad_vertices(&params)?;
//! let indices = generate_quad_indices(&params)?;
//! assert_eq!(vertices.len(), params.vertex_count()?);
//! assert_eq!(indices.len(), params.index_count()?);
//! # Ok::<(), quad_mesh::QuadError>(())
//! ```
//!
//! Vertex types only need to implement [`QuadVertex`]; [`VertexUV`] and
//! [`PackedVertexUV`] are provided.

mod corner;
mod fan;
mod grid;
mod indices;
mod layout;
mod params;
mod quad;
mod vertex;

pub mod deform;

pub use corner::{Corner, CornerMask};
pub use indices::{MAX_INDEXED_VERTICES, generate_quad_indices};
pub use layout::QuadLayout;
pub use params::{QuadError, QuadParams};
pub use quad::{
    QuadMesh, generate_quad_mesh, generate_quad_vertices, generate_quad_vertices_or_empty,
};
pub use vertex::{PackedVertexUV, QuadVertex, VertexUV, pack_position_f16, pack_uv_unorm16};
