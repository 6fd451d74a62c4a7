//! Interior grid and tab vertices

use glam::Vec2;

use crate::layout::QuadLayout;
use crate::vertex::{QuadVertex, vertex_at};

/// Append the grid (and, for rounded quads, the tab) vertices in column-major
/// order: left tab column, interior columns bottom-to-top, right tab column.
pub(crate) fn push_grid_vertices<V: QuadVertex>(layout: &QuadLayout, out: &mut Vec<V>) {
    let half_size = layout.half_size();
    let rounded = layout.is_rounded();

    if rounded {
        push_tab_column(layout, -half_size.x, 0.0, out);
    }

    for col in 0..layout.interior_x {
        let (x, u) = layout.column(col);

        if rounded {
            out.push(vertex_at(Vec2::new(x, -half_size.y), Vec2::new(u, 1.0)));
        }

        for row in 0..layout.interior_y {
            let (y, v) = layout.row(row);
            out.push(vertex_at(Vec2::new(x, y), Vec2::new(u, v)));
        }

        if rounded {
            out.push(vertex_at(Vec2::new(x, half_size.y), Vec2::new(u, 0.0)));
        }
    }

    if rounded {
        push_tab_column(layout, half_size.x, 1.0, out);
    }
}

/// One vertex per interior row, pinned to a vertical edge of the quad
fn push_tab_column<V: QuadVertex>(layout: &QuadLayout, x: f32, u: f32, out: &mut Vec<V>) {
    for row in 0..layout.interior_y {
        let (y, v) = layout.row(row);
        out.push(vertex_at(Vec2::new(x, y), Vec2::new(u, v)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::QuadParams;
    use crate::vertex::VertexUV;

    fn grid(params: QuadParams) -> (QuadLayout, Vec<VertexUV>) {
        let layout = params.layout().unwrap();
        let mut out = Vec::new();
        push_grid_vertices(&layout, &mut out);
        (layout, out)
    }

    #[test]
    fn test_flat_grid_column_major() {
        let (_, verts) = grid(QuadParams::new(2.0, 4.0).with_verts(3, 2));
        assert_eq!(verts.len(), 6);

        // Column 0 runs bottom to top before column 1 starts
        assert_eq!(verts[0].position, [-1.0, -2.0, 0.0]);
        assert_eq!(verts[1].position, [-1.0, 2.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, -2.0, 0.0]);
        assert_eq!(verts[5].position, [1.0, 2.0, 0.0]);

        // V is flipped relative to Y
        assert_eq!(verts[0].uv, [0.0, 1.0]);
        assert_eq!(verts[1].uv, [0.0, 0.0]);
        assert_eq!(verts[5].uv, [1.0, 0.0]);
    }

    #[test]
    fn test_tabs_sit_on_the_edges() {
        let (layout, verts) = grid(
            QuadParams::new(2.0, 2.0)
                .with_verts(4, 4)
                .with_rounded_corners(0.5, 2),
        );
        // Grid part only: 2x2 interior + 4 top/bottom tabs + 4 side tabs
        assert_eq!(verts.len(), 12);

        for row in 0..layout.interior_y {
            let left = verts[layout.left_tab(row)];
            let right = verts[layout.right_tab(row)];
            assert_eq!(left.position[0], -1.0);
            assert_eq!(left.uv[0], 0.0);
            assert_eq!(right.position[0], 1.0);
            assert_eq!(right.uv[0], 1.0);
        }
        for col in 0..layout.interior_x {
            let bottom = verts[layout.bottom_tab(col)];
            let top = verts[layout.top_tab(col)];
            assert_eq!(bottom.position[1], -1.0);
            assert_eq!(bottom.uv[1], 1.0);
            assert_eq!(top.position[1], 1.0);
            assert_eq!(top.uv[1], 0.0);
        }

        // Interior is inset by the radius
        assert_eq!(verts[layout.interior(0, 0)].position, [-0.5, -0.5, 0.0]);
        assert_eq!(verts[layout.interior(1, 1)].position, [0.5, 0.5, 0.0]);
        assert_eq!(verts[layout.interior(0, 0)].uv, [0.25, 0.75]);
    }
}
