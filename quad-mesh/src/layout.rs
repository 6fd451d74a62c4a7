//! Derived quad layout and vertex addressing
//!
//! Vertices are emitted in column-major order. Without rounded corners the
//! quad is a plain grid:
//!
//! ```text
//!  2---5---8
//!  |   |   |
//!  1---4---7
//!  |   |   |
//!  0---3---6
//! ```
//!
//! With rounded corners the grid is inset by the corner radius and bracketed
//! by tab vertices on every side. The left tab column (A..B) comes first, then
//! each interior column from its bottom tab (C..E) to its top tab (D..F), then
//! the right tab column (G..H), then the interleaved corner fan vertices:
//!
//! ```text
//!      D       F
//!      +-------+
//!      |       |
//! B +--+-------+--+ H
//!   |  |       |  |
//!   |  |       |  |
//! A +--+-------+--+ G
//!      |       |
//!      +-------+
//!      C       E
//! ```

use glam::Vec2;

use crate::corner::{Corner, CornerMask};
use crate::params::QuadParams;

/// Validated quad geometry shared by the vertex and index builders
///
/// Obtained from [`QuadParams::layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadLayout {
    /// Full quad extents
    pub size: Vec2,
    /// Effective (clamped) corner radius
    pub radius: f32,
    /// Extents of the grid once inset by the radius on every side
    pub interior_size: Vec2,
    /// Texture-space inset matching `radius`
    pub uv_inset: Vec2,
    /// Interior grid columns
    pub interior_x: usize,
    /// Interior grid rows
    pub interior_y: usize,
    /// Vertices per corner arc (0 = square corners)
    pub corner_verts: usize,
    pub corner_mask: CornerMask,
}

impl QuadLayout {
    /// Derive the layout from parameters that already passed validation
    pub(crate) fn new(params: &QuadParams) -> Self {
        let size = Vec2::new(params.size_x, params.size_y);
        let radius = params.effective_corner_radius();
        let corner_verts = params.corner_verts.max(0) as usize;
        let tabs = if corner_verts > 0 { 2 } else { 0 };

        let inset = |extent: f32| if extent > 0.0 { radius / extent } else { 0.0 };

        Self {
            size,
            radius,
            interior_size: size - Vec2::splat(2.0 * radius),
            uv_inset: Vec2::new(inset(size.x), inset(size.y)),
            interior_x: params.num_verts_x as usize - tabs,
            interior_y: params.num_verts_y as usize - tabs,
            corner_verts,
            corner_mask: params.corner_mask,
        }
    }

    #[inline]
    pub fn is_rounded(&self) -> bool {
        self.corner_verts > 0
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn half_interior_size(&self) -> Vec2 {
        self.interior_size * 0.5
    }

    /// Texture-space span of the interior grid
    #[inline]
    pub fn uv_range(&self) -> Vec2 {
        Vec2::ONE - 2.0 * self.uv_inset
    }

    /// Scale from a geometric offset to a texture-space offset (V points down)
    pub fn uv_scale(&self) -> Vec2 {
        let recip = |extent: f32| if extent > 0.0 { extent.recip() } else { 0.0 };
        Vec2::new(recip(self.size.x), -recip(self.size.y))
    }

    /// Fraction of the interior width covered at column `col`
    #[inline]
    pub fn x_fraction(&self, col: usize) -> f32 {
        col as f32 / (self.interior_x - 1) as f32
    }

    /// Fraction of the interior height covered at row `row`
    #[inline]
    pub fn y_fraction(&self, row: usize) -> f32 {
        row as f32 / (self.interior_y - 1) as f32
    }

    /// X coordinate and U texture coordinate of interior column `col`
    pub fn column(&self, col: usize) -> (f32, f32) {
        let fx = self.x_fraction(col);
        let x = fx * self.interior_size.x - self.half_interior_size().x;
        let u = self.uv_inset.x + fx * self.uv_range().x;
        (x, u)
    }

    /// Y coordinate and V texture coordinate of interior row `row`
    ///
    /// V is flipped: texture space has its origin at the top-left while Y
    /// grows upward.
    pub fn row(&self, row: usize) -> (f32, f32) {
        let fy = self.y_fraction(row);
        let y = fy * self.interior_size.y - self.half_interior_size().y;
        let v = self.uv_inset.y + (1.0 - fy) * self.uv_range().y;
        (y, v)
    }

    /// Interior-rectangle corner that a fan is anchored to
    pub fn corner_position(&self, corner: Corner) -> Vec2 {
        let (sx, sy) = corner.signs();
        self.half_interior_size() * Vec2::new(sx, sy)
    }

    /// Texture coordinate of the interior-rectangle corner
    pub fn corner_uv(&self, corner: Corner) -> Vec2 {
        let (sx, sy) = corner.signs();
        let u = if sx < 0.0 {
            self.uv_inset.x
        } else {
            1.0 - self.uv_inset.x
        };
        let v = if sy < 0.0 {
            1.0 - self.uv_inset.y
        } else {
            self.uv_inset.y
        };
        Vec2::new(u, v)
    }

    /// Total number of emitted vertices
    ///
    /// Saturates at `usize::MAX`; layouts from [`QuadParams::layout`] never do.
    pub fn vertex_count(&self) -> usize {
        self.checked_vertex_count().unwrap_or(usize::MAX)
    }

    /// Total number of indices in the triangle list
    ///
    /// Saturates at `usize::MAX`; layouts from [`QuadParams::layout`] never do.
    pub fn index_count(&self) -> usize {
        self.checked_index_count().unwrap_or(usize::MAX)
    }

    /// Vertex count, or `None` if it does not fit in `usize`
    pub fn checked_vertex_count(&self) -> Option<usize> {
        let interior = self.interior_x.checked_mul(self.interior_y)?;
        if self.is_rounded() {
            let fans = self.corner_verts.checked_mul(4)?;
            let tabs = self.interior_x.checked_add(self.interior_y)?.checked_mul(2)?;
            interior.checked_add(fans)?.checked_add(tabs)
        } else {
            Some(interior)
        }
    }

    /// Index count, or `None` if it does not fit in `usize`
    pub fn checked_index_count(&self) -> Option<usize> {
        if self.is_rounded() {
            // Interior columns with their tab rows, the two tab columns, and
            // one fan triangle per arc vertex per corner.
            let strip_quads = (self.interior_x - 1).checked_mul(self.interior_y.checked_add(1)?)?;
            let tab_quads = (self.interior_y - 1).checked_mul(2)?;
            let fans = self.corner_verts.checked_mul(12)?;
            strip_quads
                .checked_add(tab_quads)?
                .checked_mul(6)?
                .checked_add(fans)
        } else {
            (self.interior_x - 1)
                .checked_mul(self.interior_y - 1)?
                .checked_mul(6)
        }
    }

    // ========================================================================
    // Vertex addressing
    // ========================================================================

    /// Vertices per interior column, tabs included
    #[inline]
    fn column_len(&self) -> usize {
        if self.is_rounded() {
            self.interior_y + 2
        } else {
            self.interior_y
        }
    }

    /// Index of the first vertex of interior column `col`
    #[inline]
    fn column_start(&self, col: usize) -> usize {
        let left_tabs = if self.is_rounded() { self.interior_y } else { 0 };
        left_tabs + col * self.column_len()
    }

    /// Index of interior grid vertex (`col`, `row`)
    pub fn interior(&self, col: usize, row: usize) -> usize {
        let bottom_tab = usize::from(self.is_rounded());
        self.column_start(col) + bottom_tab + row
    }

    /// Index of the left tab at interior row `row` (rounded quads only)
    pub fn left_tab(&self, row: usize) -> usize {
        debug_assert!(self.is_rounded());
        row
    }

    /// Index of the bottom tab of interior column `col` (rounded quads only)
    pub fn bottom_tab(&self, col: usize) -> usize {
        debug_assert!(self.is_rounded());
        self.column_start(col)
    }

    /// Index of the top tab of interior column `col` (rounded quads only)
    pub fn top_tab(&self, col: usize) -> usize {
        debug_assert!(self.is_rounded());
        self.column_start(col) + self.interior_y + 1
    }

    /// Index of the right tab at interior row `row` (rounded quads only)
    pub fn right_tab(&self, row: usize) -> usize {
        debug_assert!(self.is_rounded());
        self.column_start(self.interior_x) + row
    }

    /// Index of the interior vertex a corner's fan is anchored to
    pub fn corner_anchor(&self, corner: Corner) -> usize {
        let last_col = self.interior_x - 1;
        let last_row = self.interior_y - 1;
        match corner {
            Corner::BottomLeft => self.interior(0, 0),
            Corner::TopLeft => self.interior(0, last_row),
            Corner::BottomRight => self.interior(last_col, 0),
            Corner::TopRight => self.interior(last_col, last_row),
        }
    }

    /// Index of arc vertex `step` of `corner`
    pub fn fan_vertex(&self, step: usize, corner: Corner) -> usize {
        debug_assert!(step < self.corner_verts);
        let fan_start = self.column_start(self.interior_x) + self.interior_y;
        fan_start + 4 * step + corner.fan_slot()
    }
}
