//! Legacy in-place deformation of raw vertex buffers
//!
//! Transitional only: deformation belongs in the mesh pipeline, and these
//! functions go away once it lands there. Nothing else in this crate uses
//! them.

use bytemuck::Pod;
use glam::Vec3;

/// Bytes occupied by an `[f32; 3]` position
pub const POSITION_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeformError {
    #[error("stride {0} is smaller than a vec3 position ({POSITION_SIZE} bytes)")]
    StrideTooSmall(usize),

    #[error("buffer length {len} is not a multiple of the stride {stride}")]
    RaggedBuffer { len: usize, stride: usize },
}

/// Apply `deform` to the position of every vertex in a raw buffer
///
/// Each vertex occupies `stride` bytes and starts with three native-endian
/// `f32` position components; all other bytes are left untouched. The buffer
/// does not need to be aligned.
///
/// Returns the number of vertices deformed. On error nothing is written.
#[deprecated(note = "transitional; move deformation into the mesh pipeline")]
pub fn apply_deformation<F>(
    vertices: &mut [u8],
    stride: usize,
    mut deform: F,
) -> Result<usize, DeformError>
where
    F: FnMut(Vec3) -> Vec3,
{
    if stride < POSITION_SIZE {
        return Err(DeformError::StrideTooSmall(stride));
    }
    if vertices.len() % stride != 0 {
        return Err(DeformError::RaggedBuffer {
            len: vertices.len(),
            stride,
        });
    }

    for vertex in vertices.chunks_exact_mut(stride) {
        let position = &mut vertex[..POSITION_SIZE];
        let current: [f32; 3] = bytemuck::pod_read_unaligned(position);
        let deformed = deform(Vec3::from_array(current)).to_array();
        position.copy_from_slice(bytemuck::bytes_of(&deformed));
    }

    Ok(vertices.len() / stride)
}

/// Typed front end for [`apply_deformation`]
///
/// `V` must start with an `[f32; 3]` position, as
/// [`VertexUV`](crate::VertexUV) does.
#[deprecated(note = "transitional; move deformation into the mesh pipeline")]
#[allow(deprecated)]
pub fn apply_deformation_to<V, F>(vertices: &mut [V], deform: F) -> Result<usize, DeformError>
where
    V: Pod,
    F: FnMut(Vec3) -> Vec3,
{
    apply_deformation(
        bytemuck::cast_slice_mut(vertices),
        std::mem::size_of::<V>(),
        deform,
    )
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::{QuadParams, VertexUV, generate_quad_vertices};

    #[test]
    fn test_deforms_positions_only() {
        let mut verts = [
            VertexUV {
                position: [1.0, 2.0, 0.0],
                uv: [0.1, 0.2],
            },
            VertexUV {
                position: [-1.0, 0.5, 0.0],
                uv: [0.3, 0.4],
            },
        ];
        let count = apply_deformation_to(&mut verts, |p| p * 2.0 + Vec3::Z).unwrap();

        assert_eq!(count, 2);
        assert_eq!(verts[0].position, [2.0, 4.0, 1.0]);
        assert_eq!(verts[1].position, [-2.0, 1.0, 1.0]);
        assert_eq!(verts[0].uv, [0.1, 0.2]);
        assert_eq!(verts[1].uv, [0.3, 0.4]);
    }

    #[test]
    fn test_unaligned_stride() {
        // 13-byte elements: position followed by one tag byte
        let mut buffer = Vec::new();
        for i in 0..3 {
            buffer.extend_from_slice(bytemuck::bytes_of(&[i as f32, 0.0f32, 0.0f32]));
            buffer.push(0xAB);
        }

        let count = apply_deformation(&mut buffer, 13, |p| p + Vec3::Y).unwrap();
        assert_eq!(count, 3);

        for (i, vertex) in buffer.chunks_exact(13).enumerate() {
            let position: [f32; 3] = bytemuck::pod_read_unaligned(&vertex[..12]);
            assert_eq!(position, [i as f32, 1.0, 0.0]);
            assert_eq!(vertex[12], 0xAB);
        }
    }

    #[test]
    fn test_rejects_bad_layouts() {
        let mut buffer = vec![0u8; 40];
        assert_eq!(
            apply_deformation(&mut buffer, 8, |p| p),
            Err(DeformError::StrideTooSmall(8))
        );
        assert_eq!(
            apply_deformation(&mut buffer, 12, |p| p + Vec3::ONE),
            Err(DeformError::RaggedBuffer { len: 40, stride: 12 })
        );
        // Nothing written on failure
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer: [u8; 0] = [];
        assert_eq!(apply_deformation(&mut buffer, 20, |p| p), Ok(0));
    }

    #[test]
    fn test_bend_generated_quad() {
        let params = QuadParams::new(2.0, 1.0).with_verts(5, 3);
        let mut verts: Vec<VertexUV> = generate_quad_vertices(&params).unwrap();
        let uvs: Vec<[f32; 2]> = verts.iter().map(|v| v.uv).collect();

        // Wrap around a cylinder of radius 1 along X
        apply_deformation_to(&mut verts, |p| {
            Vec3::new(p.x.sin(), p.y, 1.0 - p.x.cos())
        })
        .unwrap();

        for (vertex, uv) in verts.iter().zip(&uvs) {
            let p = vertex.position();
            assert!((p.x * p.x + (1.0 - p.z) * (1.0 - p.z) - 1.0).abs() < 1e-5);
            assert_eq!(vertex.uv, *uv);
        }
    }
}
