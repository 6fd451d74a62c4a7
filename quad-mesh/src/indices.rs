//! Triangle indices for tessellated quads
//!
//! Every triangle winds counter-clockwise when viewed from +Z.

use tracing::error;

use crate::corner::Corner;
use crate::layout::QuadLayout;
use crate::params::{QuadError, QuadParams};

/// Largest vertex count a 16-bit index list can address
pub const MAX_INDEXED_VERTICES: usize = u16::MAX as usize + 1;

/// Generate the triangle list for the vertices produced by
/// [`generate_quad_vertices`](crate::generate_quad_vertices) with the same
/// parameters.
///
/// Only counts and topology are used; vertex positions are never needed.
pub fn generate_quad_indices(params: &QuadParams) -> Result<Vec<u16>, QuadError> {
    let layout = params
        .layout()
        .inspect_err(|e| error!("generate_quad_indices: {}", e))?;
    build_indices(&layout).inspect_err(|e| error!("generate_quad_indices: {}", e))
}

pub(crate) fn build_indices(layout: &QuadLayout) -> Result<Vec<u16>, QuadError> {
    let vertex_count = layout.vertex_count();
    if vertex_count > MAX_INDEXED_VERTICES {
        return Err(QuadError::TooManyVertices(vertex_count));
    }

    let mut tris = TriangleList::with_capacity(layout.index_count());

    if layout.is_rounded() {
        push_rounded_strips(layout, &mut tris);
        push_corner_fans(layout, &mut tris);
    } else {
        for col in 0..layout.interior_x - 1 {
            for row in 0..layout.interior_y - 1 {
                tris.quad(
                    layout.interior(col, row),
                    layout.interior(col + 1, row),
                    layout.interior(col + 1, row + 1),
                    layout.interior(col, row + 1),
                );
            }
        }
    }

    debug_assert_eq!(tris.indices.len(), layout.index_count());
    Ok(tris.indices)
}

/// Quad strips between every pair of adjacent columns, tab rows and tab
/// columns included
fn push_rounded_strips(layout: &QuadLayout, tris: &mut TriangleList) {
    let last_col = layout.interior_x - 1;

    // Left tab column to the first interior column
    for row in 0..layout.interior_y - 1 {
        tris.quad(
            layout.left_tab(row),
            layout.interior(0, row),
            layout.interior(0, row + 1),
            layout.left_tab(row + 1),
        );
    }

    // Interior columns run contiguously from bottom tab to top tab, so the
    // bottom tab is row 0 of each column and the top tab is row interior_y + 1.
    for col in 0..last_col {
        let left = layout.bottom_tab(col);
        let right = layout.bottom_tab(col + 1);
        for row in 0..=layout.interior_y {
            tris.quad(left + row, right + row, right + row + 1, left + row + 1);
        }
    }

    // Last interior column to the right tab column
    for row in 0..layout.interior_y - 1 {
        tris.quad(
            layout.interior(last_col, row),
            layout.right_tab(row),
            layout.right_tab(row + 1),
            layout.interior(last_col, row + 1),
        );
    }
}

/// One fan per corner, anchored at the interior corner vertex
fn push_corner_fans(layout: &QuadLayout, tris: &mut TriangleList) {
    let last_col = layout.interior_x - 1;
    let last_row = layout.interior_y - 1;

    for corner in Corner::FAN_ORDER {
        let anchor = layout.corner_anchor(corner);
        // Tab at theta = 0; the arc's final vertex coincides with the tab at
        // the other end, which closes the fan.
        let mut prev = match corner {
            Corner::BottomLeft => layout.bottom_tab(0),
            Corner::TopLeft => layout.left_tab(last_row),
            Corner::BottomRight => layout.right_tab(0),
            Corner::TopRight => layout.top_tab(last_col),
        };

        for step in 0..layout.corner_verts {
            let next = layout.fan_vertex(step, corner);
            // Arc steps run clockwise about the anchor, hence (anchor, next, prev).
            tris.triangle(anchor, next, prev);
            prev = next;
        }
    }
}

/// Index list with u16 narrowing, bounds already checked by the caller
struct TriangleList {
    indices: Vec<u16>,
}

impl TriangleList {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn triangle(&mut self, i0: usize, i1: usize, i2: usize) {
        self.indices.push(i0 as u16);
        self.indices.push(i1 as u16);
        self.indices.push(i2 as u16);
    }

    /// Two triangles for a cell given counter-clockwise from its bottom-left
    #[inline]
    fn quad(
        &mut self,
        bottom_left: usize,
        bottom_right: usize,
        top_right: usize,
        top_left: usize,
    ) {
        self.triangle(bottom_left, bottom_right, top_right);
        self.triangle(bottom_left, top_right, top_left);
    }
}
