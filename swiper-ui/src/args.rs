//! Construction-time configuration for the paginator.

use std::time::Duration;

use derive_setters::Setters;

use crate::axis::Axis;

const DEFAULT_THRESHOLD: f32 = 50.0;
const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Options recognised by [`Paginator::new`](crate::Paginator::new).
///
/// With the `serde` feature enabled the struct deserializes from the same
/// camelCase option names the web widget accepts (`activeClass`,
/// `allowScroll`, `initialSlide`, ...), with `duration` given in
/// milliseconds. Missing keys fall back to [`Default`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use swiper_ui::{Axis, SwiperArgs};
///
/// let args = SwiperArgs::default()
///     .direction(Axis::Horizontal)
///     .threshold(80.0)
///     .duration(Duration::from_millis(250));
/// assert_eq!(args.active_class, "active");
/// assert!(args.debounce);
/// ```
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SwiperArgs {
    /// Selector of the container element, consumed by the host surface.
    #[setters(into)]
    pub container: String,
    /// Selector of the panel elements, consumed by the host surface.
    #[setters(into)]
    pub item: String,
    /// Paging direction.
    pub direction: Axis,
    /// Marker applied to the settled panel.
    #[setters(into)]
    pub active_class: String,
    /// Drag distance in pixels a gesture must exceed to change panels.
    pub threshold: f32,
    /// Duration of animated transitions.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub duration: Duration,
    /// Whether cross-axis drags fall through to native scrolling.
    pub allow_scroll: bool,
    /// Whether dragging past the first or last panel is elastic.
    pub debounce: bool,
    /// Panel shown at construction; clamped to the panel range.
    pub initial_slide: usize,
}

impl Default for SwiperArgs {
    fn default() -> Self {
        Self {
            container: ".swiper".to_string(),
            item: ".item".to_string(),
            direction: Axis::Vertical,
            active_class: "active".to_string(),
            threshold: DEFAULT_THRESHOLD,
            duration: DEFAULT_DURATION,
            allow_scroll: false,
            debounce: true,
            initial_slide: 0,
        }
    }
}

impl SwiperArgs {
    /// Threshold with negative and non-finite values flattened to zero.
    pub(crate) fn sanitized_threshold(&self) -> f32 {
        if self.threshold.is_finite() {
            self.threshold.max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
