//! Quad corners and corner masks
//!
//! Corners are named as if looking down the -Z axis: +X is right and +Y is top.

bitflags::bitflags! {
    /// Set of quad corners
    ///
    /// Only meaningful for rounded quads. A corner missing from the mask keeps
    /// its fan vertices (so index topology is unchanged) but they are pushed
    /// out onto the square corner instead of the arc.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CornerMask: u8 {
        /// +X, +Y
        const TOP_RIGHT = 0b0001;
        /// +X, -Y
        const BOTTOM_RIGHT = 0b0010;
        /// -X, -Y
        const BOTTOM_LEFT = 0b0100;
        /// -X, +Y
        const TOP_LEFT = 0b1000;
    }
}

impl CornerMask {
    /// No corners rounded
    pub const NONE: Self = Self::empty();
    /// Every corner rounded
    pub const ALL: Self = Self::all();

    /// Whether `corner` is part of this mask
    #[inline]
    pub fn has(self, corner: Corner) -> bool {
        self.contains(corner.mask())
    }
}

impl Default for CornerMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CornerMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CornerMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(CornerMask::from_bits_truncate(bits))
    }
}

/// A single quad corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Corner {
    /// Order in which fan vertices are interleaved for every arc step
    pub const FAN_ORDER: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    /// Mask bit for this corner
    pub const fn mask(self) -> CornerMask {
        match self {
            Corner::TopRight => CornerMask::TOP_RIGHT,
            Corner::BottomRight => CornerMask::BOTTOM_RIGHT,
            Corner::BottomLeft => CornerMask::BOTTOM_LEFT,
            Corner::TopLeft => CornerMask::TOP_LEFT,
        }
    }

    /// Position of this corner within `FAN_ORDER`
    pub const fn fan_slot(self) -> usize {
        match self {
            Corner::BottomLeft => 0,
            Corner::TopLeft => 1,
            Corner::BottomRight => 2,
            Corner::TopRight => 3,
        }
    }

    /// Unit signs of the corner relative to the quad centre
    pub const fn signs(self) -> (f32, f32) {
        match self {
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, -1.0),
            Corner::TopLeft => (-1.0, 1.0),
        }
    }
}
