//! Quad parameters and validation

use crate::corner::CornerMask;
use crate::layout::QuadLayout;

/// Parameter validation failure
///
/// Every variant is detected before any geometry is written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadError {
    #[error("quad size must be finite and >= 0.0 (got {size_x} x {size_y})")]
    InvalidSize { size_x: f32, size_y: f32 },

    #[error("corner radius must be finite and >= 0.0 (got {0})")]
    InvalidCornerRadius(f32),

    #[error("corner vertex count must be >= 0 (got {0})")]
    NegativeCornerVerts(i32),

    #[error(
        "rounded corners need at least 4 vertices per axis for the tabs (got {num_verts_x} x {num_verts_y})"
    )]
    TooFewVertsForCorners { num_verts_x: u32, num_verts_y: u32 },

    #[error("quad needs at least 2 vertices per axis (got {num_verts_x} x {num_verts_y})")]
    TooFewVerts { num_verts_x: u32, num_verts_y: u32 },

    #[error("corner radius {0} given without corner vertices; it would leave an empty margin")]
    RadiusWithoutCornerVerts(f32),

    #[error("quad has too many vertices to index (got {0})")]
    TooManyVertices(usize),
}

/// Description of a tessellated, optionally rounded quad
///
/// The quad lies on the XY plane (Z = 0), centred on the origin, facing +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadParams {
    /// Width along X
    pub size_x: f32,
    /// Height along Y
    pub size_y: f32,
    /// Vertices per row, including the two tab columns when rounded
    pub num_verts_x: u32,
    /// Vertices per column, including the two tab rows when rounded
    pub num_verts_y: u32,
    /// Requested corner radius, clamped to half the smaller side
    pub corner_radius: f32,
    /// Vertices per corner arc (0 = square corners)
    pub corner_verts: i32,
    /// Corners that are actually curved
    pub corner_mask: CornerMask,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            size_x: 1.0,
            size_y: 1.0,
            num_verts_x: 2,
            num_verts_y: 2,
            corner_radius: 0.0,
            corner_verts: 0,
            corner_mask: CornerMask::ALL,
        }
    }
}

impl QuadParams {
    /// Square-cornered quad with a 2x2 grid
    pub fn new(size_x: f32, size_y: f32) -> Self {
        Self {
            size_x,
            size_y,
            ..Self::default()
        }
    }

    pub fn with_verts(mut self, num_verts_x: u32, num_verts_y: u32) -> Self {
        self.num_verts_x = num_verts_x;
        self.num_verts_y = num_verts_y;
        self
    }

    /// Round the corners with `corner_verts` vertices per arc
    pub fn with_rounded_corners(mut self, corner_radius: f32, corner_verts: i32) -> Self {
        self.corner_radius = corner_radius;
        self.corner_verts = corner_verts;
        self
    }

    pub fn with_corner_mask(mut self, corner_mask: CornerMask) -> Self {
        self.corner_mask = corner_mask;
        self
    }

    /// Corner radius after clamping to half the smaller side
    pub fn effective_corner_radius(&self) -> f32 {
        self.corner_radius.min(self.size_x.min(self.size_y) / 2.0)
    }

    /// Number of vertices the generator will emit
    ///
    /// Callers can use this to preallocate; it is computed the same way the
    /// generator computes it.
    pub fn vertex_count(&self) -> Result<usize, QuadError> {
        self.layout().map(|layout| layout.vertex_count())
    }

    /// Number of indices in the matching triangle list
    pub fn index_count(&self) -> Result<usize, QuadError> {
        self.layout().map(|layout| layout.index_count())
    }

    /// Validate the parameters and derive the grid layout
    pub fn layout(&self) -> Result<QuadLayout, QuadError> {
        let size_ok = |s: f32| s.is_finite() && s >= 0.0;
        if !size_ok(self.size_x) || !size_ok(self.size_y) {
            return Err(QuadError::InvalidSize {
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }

        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(QuadError::InvalidCornerRadius(self.corner_radius));
        }

        match self.corner_verts {
            n if n < 0 => return Err(QuadError::NegativeCornerVerts(n)),
            0 => {
                if self.num_verts_x < 2 || self.num_verts_y < 2 {
                    return Err(QuadError::TooFewVerts {
                        num_verts_x: self.num_verts_x,
                        num_verts_y: self.num_verts_y,
                    });
                }
                if self.corner_radius > 0.0 {
                    return Err(QuadError::RadiusWithoutCornerVerts(self.corner_radius));
                }
            }
            _ => {
                // Two extra rows/columns per axis carry the tabs.
                if self.num_verts_x < 4 || self.num_verts_y < 4 {
                    return Err(QuadError::TooFewVertsForCorners {
                        num_verts_x: self.num_verts_x,
                        num_verts_y: self.num_verts_y,
                    });
                }
            }
        }

        // Both counts must be representable before anything sizes a buffer.
        let layout = QuadLayout::new(self);
        match (layout.checked_vertex_count(), layout.checked_index_count()) {
            (Some(_), Some(_)) => Ok(layout),
            (vertices, _) => Err(QuadError::TooManyVertices(vertices.unwrap_or(usize::MAX))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = QuadParams::default();
        assert_eq!(params.vertex_count(), Ok(4));
        assert_eq!(params.index_count(), Ok(6));
    }

    #[test]
    fn test_radius_clamped_to_half_min_side() {
        let params = QuadParams::new(2.0, 1.0)
            .with_verts(4, 4)
            .with_rounded_corners(5.0, 3);
        assert_eq!(params.effective_corner_radius(), 0.5);
        assert_eq!(params.layout().unwrap().radius, 0.5);
    }

    #[test]
    fn test_rejects_negative_size() {
        let params = QuadParams::new(-1.0, 1.0);
        assert!(matches!(params.layout(), Err(QuadError::InvalidSize { .. })));

        let params = QuadParams::new(1.0, f32::NAN);
        assert!(matches!(params.layout(), Err(QuadError::InvalidSize { .. })));
    }

    #[test]
    fn test_rejects_negative_corner_verts() {
        let params = QuadParams::new(1.0, 1.0)
            .with_verts(4, 4)
            .with_rounded_corners(0.1, -1);
        assert_eq!(params.layout(), Err(QuadError::NegativeCornerVerts(-1)));
    }

    #[test]
    fn test_vertex_minimums() {
        let flat = QuadParams::new(1.0, 1.0).with_verts(1, 2);
        assert!(matches!(flat.layout(), Err(QuadError::TooFewVerts { .. })));

        let rounded = QuadParams::new(1.0, 1.0)
            .with_verts(3, 4)
            .with_rounded_corners(0.1, 2);
        assert!(matches!(
            rounded.layout(),
            Err(QuadError::TooFewVertsForCorners { .. })
        ));
    }

    #[test]
    fn test_rejects_radius_without_corner_verts() {
        let params = QuadParams::new(1.0, 1.0).with_rounded_corners(0.2, 0);
        assert_eq!(
            params.layout(),
            Err(QuadError::RadiusWithoutCornerVerts(0.2))
        );
    }

    #[test]
    fn test_rejects_invalid_corner_radius() {
        for radius in [-0.1, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let params = QuadParams::new(1.0, 1.0)
                .with_verts(4, 4)
                .with_rounded_corners(radius, 3);
            assert!(
                matches!(params.layout(), Err(QuadError::InvalidCornerRadius(_))),
                "radius {radius} accepted"
            );
            assert!(params.vertex_count().is_err());
        }

        // Checked before the corner vertex count.
        let params = QuadParams::new(1.0, 1.0).with_rounded_corners(-1.0, 0);
        assert_eq!(params.layout(), Err(QuadError::InvalidCornerRadius(-1.0)));
    }

    #[test]
    fn test_rejects_unrepresentable_counts() {
        let flat = QuadParams::new(1.0, 1.0).with_verts(u32::MAX, u32::MAX);
        assert!(matches!(flat.layout(), Err(QuadError::TooManyVertices(_))));
        assert!(matches!(flat.vertex_count(), Err(QuadError::TooManyVertices(_))));
        assert!(matches!(flat.index_count(), Err(QuadError::TooManyVertices(_))));

        let rounded = flat.with_rounded_corners(0.25, i32::MAX);
        assert!(matches!(rounded.layout(), Err(QuadError::TooManyVertices(_))));
        assert!(matches!(rounded.index_count(), Err(QuadError::TooManyVertices(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = QuadParams::new(-2.0, 1.0).layout().unwrap_err();
        assert_eq!(
            err.to_string(),
            "quad size must be finite and >= 0.0 (got -2 x 1)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let params: QuadParams =
            serde_json::from_str(r#"{ "size_x": 3.0, "corner_mask": 3 }"#).unwrap();
        assert_eq!(params.size_x, 3.0);
        assert_eq!(params.size_y, 1.0);
        assert_eq!(
            params.corner_mask,
            CornerMask::TOP_RIGHT | CornerMask::BOTTOM_RIGHT
        );
    }
}
