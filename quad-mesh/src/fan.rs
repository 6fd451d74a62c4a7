//! Rounded corner fan vertices

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::corner::Corner;
use crate::layout::QuadLayout;
use crate::vertex::{QuadVertex, vertex_at};

/// Append `corner_verts` arc vertices for each corner.
///
/// All four corners advance in lockstep from a single angle, so every step
/// emits bottom-left, top-left, bottom-right, top-right in that order. The
/// first step is one increment past the tab the fan starts from; the last
/// step lands on the tab at the other end of the arc.
pub(crate) fn push_fan_vertices<V: QuadVertex>(layout: &QuadLayout, out: &mut Vec<V>) {
    let radius = layout.radius;
    let uv_scale = layout.uv_scale();

    for step in 0..layout.corner_verts {
        let theta = ((step + 1) as f32 / layout.corner_verts as f32) * FRAC_PI_2;
        let r_sin = radius * theta.sin();
        let r_cos = radius * theta.cos();

        for corner in Corner::FAN_ORDER {
            let mut offset = arc_offset(corner, r_sin, r_cos);
            if !layout.corner_mask.has(corner) {
                offset = unround(offset, radius);
            }

            let position = layout.corner_position(corner) + offset;
            let uv = layout.corner_uv(corner) + offset * uv_scale;
            out.push(vertex_at(position, uv));
        }
    }
}

/// Arc offset from a corner anchor
///
/// Viewed from +Z the arc runs clockwise about the anchor, from the tab at
/// theta = 0 to the tab at theta = pi/2.
#[inline]
fn arc_offset(corner: Corner, r_sin: f32, r_cos: f32) -> Vec2 {
    match corner {
        Corner::BottomLeft => Vec2::new(-r_sin, -r_cos),
        Corner::TopLeft => Vec2::new(-r_cos, r_sin),
        Corner::BottomRight => Vec2::new(r_cos, -r_sin),
        Corner::TopRight => Vec2::new(r_sin, r_cos),
    }
}

/// Project an arc offset onto the square of the same radius
#[inline]
fn unround(offset: Vec2, radius: f32) -> Vec2 {
    let extent = offset.abs().max_element();
    if extent > 0.0 {
        offset * (radius / extent)
    } else {
        offset
    }
}
