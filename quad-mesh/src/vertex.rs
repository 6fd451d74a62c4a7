//! Vertex capability contract and stock vertex layouts
//!
//! The generators never read vertex fields back, they only write a position
//! and a texture coordinate into a default-constructed vertex. Any type that
//! implements [`QuadVertex`] can be produced directly.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use half::f16;

/// Write access to the fields a quad generator fills in
pub trait QuadVertex: Default {
    /// Set the vertex position
    fn set_position(&mut self, position: Vec3);

    /// Set the texture coordinate (origin at the top-left of the texture)
    fn set_uv(&mut self, uv: Vec2);

    /// Component form of [`QuadVertex::set_position`]
    fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.set_position(Vec3::new(x, y, z));
    }

    /// Component form of [`QuadVertex::set_uv`]
    fn set_uv_components(&mut self, u: f32, v: f32) {
        self.set_uv(Vec2::new(u, v));
    }
}

/// Build a vertex on the Z = 0 plane
#[inline]
pub(crate) fn vertex_at<V: QuadVertex>(position: Vec2, uv: Vec2) -> V {
    let mut vertex = V::default();
    vertex.set_position(position.extend(0.0));
    vertex.set_uv(uv);
    vertex
}

/// Full-precision vertex: `[f32; 3]` position + `[f32; 2]` UV = 20 bytes
///
/// The position sits at offset 0, so buffers of this type can be fed to the
/// legacy deformation pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexUV {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexUV {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}

impl QuadVertex for VertexUV {
    fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    fn set_uv(&mut self, uv: Vec2) {
        self.uv = uv.to_array();
    }
}

/// GPU-compact vertex: f16x4 position (w = 1) + unorm16x2 UV = 12 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedVertexUV {
    pub position: [f16; 4],
    pub uv: [u16; 2],
}

impl PackedVertexUV {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Decode the half-float position
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.position[0].to_f32(),
            self.position[1].to_f32(),
            self.position[2].to_f32(),
        )
    }

    /// Decode the normalized texture coordinate
    pub fn uv(&self) -> Vec2 {
        Vec2::new(unorm16_to_f32(self.uv[0]), unorm16_to_f32(self.uv[1]))
    }
}

impl QuadVertex for PackedVertexUV {
    fn set_position(&mut self, position: Vec3) {
        self.position = pack_position_f16(position);
    }

    fn set_uv(&mut self, uv: Vec2) {
        self.uv = pack_uv_unorm16(uv);
    }
}

/// Pack a position to Float16x4 with w = 1.0
#[inline]
pub fn pack_position_f16(position: Vec3) -> [f16; 4] {
    [
        f16::from_f32(position.x),
        f16::from_f32(position.y),
        f16::from_f32(position.z),
        f16::ONE,
    ]
}

/// Pack a texture coordinate to Unorm16x2, clamping to [0, 1]
#[inline]
pub fn pack_uv_unorm16(uv: Vec2) -> [u16; 2] {
    [f32_to_unorm16(uv.x), f32_to_unorm16(uv.y)]
}

#[inline]
fn f32_to_unorm16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}

#[inline]
fn unorm16_to_f32(value: u16) -> f32 {
    value as f32 / 65535.0
}
