//! Physical pixel coordinates used for touch points and container geometry.
//!
//! # Key Types
//!
//! - [`Px`] - A single pixel value, negative values allowed
//! - [`PxPosition`] - A touch point in page coordinates (x, y)
//! - [`PxSize`] - A measured container size (width, height)
//!
//! # Coordinate System
//!
//! The coordinate system matches the page the container lives in:
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use swiper_ui::px::{Px, PxPosition, PxSize};
//!
//! let start = PxPosition::new(Px::new(10), Px::new(300));
//! let end = PxPosition::new(Px::new(12), Px::new(240));
//! let delta = end - start;
//! assert_eq!(delta, PxPosition::new(Px::new(2), Px::new(-60)));
//!
//! let viewport = PxSize::new(Px::new(375), Px::new(667));
//! assert_eq!(viewport.height.to_f32(), 667.0);
//! ```

use std::ops::Sub;

/// A physical pixel value.
///
/// # Examples
///
/// ```
/// use swiper_ui::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-50);
/// assert_eq!(a - b, Px::new(150));
/// assert_eq!(Px::new(i32::MIN) - Px::new(1), Px::new(i32::MIN));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Saturating multiplication by a panel count.
    pub fn saturating_mul(self, times: usize) -> Self {
        let times = i32::try_from(times).unwrap_or(i32::MAX);
        Px(self.0.saturating_mul(times))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A point in page coordinates, as reported by a touch contact.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A measured size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// Saturates at the `i32` bounds, so touch points far apart never overflow.
impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
