//! Panel geometry along the paging axis and the drag-to-translate mapping.

use crate::{
    axis::Axis,
    px::{Px, PxSize},
};

/// Divisor applied to the panel size when computing elastic resistance.
const RESISTANCE_SPAN: f32 = 4.0;

/// Measured layout of the container and its panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Paging direction the geometry was measured for.
    pub axis: Axis,
    /// Number of panels.
    pub panel_count: usize,
    /// Viewport size of the container; every panel gets this size.
    pub viewport: PxSize,
    /// Panel size along the paging axis.
    pub panel_size: Px,
    /// Total content extent, `panel_size * panel_count`.
    pub extent: Px,
    /// Lowest translate that still shows the last panel, `panel_size - extent`.
    pub min_offset: Px,
}

impl Geometry {
    /// Computes geometry for `panel_count` panels in a `viewport`.
    pub fn measure(axis: Axis, panel_count: usize, viewport: PxSize) -> Self {
        let panel_size = axis.main(viewport);
        let extent = panel_size.saturating_mul(panel_count);
        Self {
            axis,
            panel_count,
            viewport,
            panel_size,
            extent,
            min_offset: panel_size.saturating_sub(extent),
        }
    }

    /// Size the container must take to hold every panel side by side.
    pub fn content_size(&self) -> PxSize {
        self.axis
            .pack_size(self.extent, self.axis.cross(self.viewport))
    }

    /// Offset of panel `index` from the start of the content.
    pub fn rest_offset(&self, index: usize) -> f32 {
        self.panel_size.to_f32() * index as f32
    }

    /// Translate that shows panel `index` at rest.
    pub fn rest_translate(&self, index: usize) -> f32 {
        -self.rest_offset(index)
    }

    /// Translate for a drag of `primary` pixels starting from panel `index`.
    ///
    /// Dragging past the first or last panel is clamped; with `elastic` the
    /// clamp gives a little in proportion to the drag distance.
    pub fn drag_translate(&self, primary: f32, index: usize, elastic: bool) -> f32 {
        let size = self.panel_size.to_f32();
        let translate = primary - self.rest_offset(index);
        let stretch = size * (resistance_scale(primary, size, elastic) - 1.0);
        let min_offset = self.min_offset.to_f32();

        if translate > 0.0 {
            stretch
        } else if translate < min_offset {
            min_offset + stretch
        } else {
            translate
        }
    }
}

/// `1 + primary / (4 * size)` rounded to two decimals, or 1 when not elastic.
fn resistance_scale(primary: f32, size: f32, elastic: bool) -> f32 {
    if !elastic || size <= 0.0 {
        return 1.0;
    }
    let scale = 1.0 + primary / (RESISTANCE_SPAN * size);
    (scale * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    fn phone(axis: Axis, panels: usize) -> Geometry {
        Geometry::measure(axis, panels, PxSize::new(Px(375), Px(600)))
    }

    #[test]
    fn measure_vertical() {
        let geometry = phone(Axis::Vertical, 5);
        assert_eq!(geometry.panel_size, Px(600));
        assert_eq!(geometry.extent, Px(3000));
        assert_eq!(geometry.min_offset, Px(-2400));
        assert_eq!(geometry.content_size(), PxSize::new(Px(375), Px(3000)));
    }

    #[test]
    fn measure_horizontal() {
        let geometry = phone(Axis::Horizontal, 4);
        assert_eq!(geometry.panel_size, Px(375));
        assert_eq!(geometry.extent, Px(1500));
        assert_eq!(geometry.min_offset, Px(-1125));
        assert_eq!(geometry.content_size(), PxSize::new(Px(1500), Px(600)));
    }

    #[test]
    fn measure_empty() {
        let geometry = phone(Axis::Vertical, 0);
        assert_eq!(geometry.extent, Px::ZERO);
        assert_eq!(geometry.min_offset, Px(600));
    }

    #[test]
    fn resistance_scale_rounds_to_two_decimals() {
        assert_eq!(resistance_scale(120.0, 600.0, true), 1.05);
        assert_eq!(resistance_scale(-60.0, 600.0, true), 0.98);
        assert_eq!(resistance_scale(120.0, 600.0, false), 1.0);
        assert_eq!(resistance_scale(120.0, 0.0, true), 1.0);
    }

    #[test]
    fn drag_inside_range_follows_finger() {
        let geometry = phone(Axis::Vertical, 5);
        assert!(approx(geometry.drag_translate(-60.0, 0, true), -60.0));
        assert!(approx(geometry.drag_translate(80.0, 2, true), -1120.0));
    }

    #[test]
    fn drag_before_first_panel_is_elastic() {
        let geometry = phone(Axis::Vertical, 5);
        // scale = 1.05, stretch = 600 * 0.05
        assert!(approx(geometry.drag_translate(120.0, 0, true), 30.0));
        assert!(approx(geometry.drag_translate(120.0, 0, false), 0.0));
    }

    #[test]
    fn drag_after_last_panel_is_elastic() {
        let geometry = phone(Axis::Vertical, 5);
        // scale = 0.95, stretch = 600 * -0.05
        assert!(approx(geometry.drag_translate(-120.0, 4, true), -2430.0));
        assert!(approx(geometry.drag_translate(-120.0, 4, false), -2400.0));
    }
}
