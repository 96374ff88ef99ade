//! Paging direction and the projections that keep gesture math axis-agnostic.

use crate::px::{Px, PxPosition, PxSize};

/// Direction along which panels are laid out and swiped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Axis {
    /// Panels sit side by side; x is the primary axis.
    Horizontal,
    /// Panels are stacked; y is the primary axis.
    #[default]
    Vertical,
}

impl Axis {
    /// Splits a movement into `(primary, cross)` components.
    pub fn split(self, delta: PxPosition) -> (f32, f32) {
        match self {
            Self::Horizontal => (delta.x.to_f32(), delta.y.to_f32()),
            Self::Vertical => (delta.y.to_f32(), delta.x.to_f32()),
        }
    }

    /// Extent of `size` along this axis.
    pub fn main(self, size: PxSize) -> Px {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub fn cross(self, size: PxSize) -> Px {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Builds a size from main-axis and cross-axis extents.
    pub fn pack_size(self, main: Px, cross: Px) -> PxSize {
        match self {
            Self::Horizontal => PxSize::new(main, cross),
            Self::Vertical => PxSize::new(cross, main),
        }
    }
}
