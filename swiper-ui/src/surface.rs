//! The rendering collaborator the paginator drives.
//!
//! A [`Surface`] owns the container and its panels: it reports how many
//! panels exist and how large the container is, and it applies whatever
//! transform, transition and active marker the paginator asks for. When an
//! animated transition finishes, the host forwards the notification to
//! [`Paginator::transition_complete`](crate::Paginator::transition_complete).

use std::time::Duration;

use crate::{axis::Axis, px::PxSize};

/// Duration used for quiet moves.
///
/// Quiet moves still animate for one millisecond so that the host reports a
/// completion and deferred bookkeeping can run.
pub const QUIET_DURATION: Duration = Duration::from_millis(1);

/// Transition applied to the container's transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// No transition; the transform follows the finger 1:1.
    None,
    /// Animate the next transform change over the given duration.
    Animated(Duration),
}

/// Where a transition-complete notification came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOrigin {
    /// The container itself finished transitioning.
    Container,
    /// A descendant's transition bubbled up to the container.
    Descendant,
}

/// Host-side container the paginator measures and renders into.
pub trait Surface {
    /// Number of panels inside the container.
    fn panel_count(&self) -> usize;

    /// Measured size of the container's viewport.
    fn container_size(&self) -> PxSize;

    /// Sizes the container to hold every panel and each panel to `panel`.
    fn set_layout(&mut self, container: PxSize, panel: PxSize);

    /// Sets the transition used for subsequent transform changes.
    fn set_transition(&mut self, transition: Transition);

    /// Translates the container along `axis` by `translate` pixels.
    fn set_transform(&mut self, axis: Axis, translate: f32);

    /// Applies `marker` to the panel at `index` and removes it from all
    /// others. `None` clears the marker everywhere.
    fn set_active(&mut self, index: Option<usize>, marker: &str);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn panel_count(&self) -> usize {
        (**self).panel_count()
    }

    fn container_size(&self) -> PxSize {
        (**self).container_size()
    }

    fn set_layout(&mut self, container: PxSize, panel: PxSize) {
        (**self).set_layout(container, panel);
    }

    fn set_transition(&mut self, transition: Transition) {
        (**self).set_transition(transition);
    }

    fn set_transform(&mut self, axis: Axis, translate: f32) {
        (**self).set_transform(axis, translate);
    }

    fn set_active(&mut self, index: Option<usize>, marker: &str) {
        (**self).set_active(index, marker);
    }
}

#[cfg(any(test, feature = "testing"))]
pub use recording::{RecordingSurface, SurfaceCall};

#[cfg(any(test, feature = "testing"))]
mod recording {
    use super::{Axis, PxSize, Surface, Transition};

    /// One call received by a [`RecordingSurface`].
    #[derive(Clone, Debug, PartialEq)]
    pub enum SurfaceCall {
        /// [`Surface::set_layout`]
        Layout {
            /// Container size.
            container: PxSize,
            /// Size of every panel.
            panel: PxSize,
        },
        /// [`Surface::set_transition`]
        Transition(Transition),
        /// [`Surface::set_transform`]
        Transform(Axis, f32),
        /// [`Surface::set_active`]
        Active(Option<usize>),
    }

    /// In-memory surface that records every call for assertions.
    #[derive(Clone, Debug)]
    pub struct RecordingSurface {
        panel_count: usize,
        size: PxSize,
        active: Option<usize>,
        calls: Vec<SurfaceCall>,
    }

    impl RecordingSurface {
        /// Creates a surface with `panel_count` panels in a container of
        /// `size`.
        pub fn new(panel_count: usize, size: PxSize) -> Self {
            Self {
                panel_count,
                size,
                active: None,
                calls: Vec::new(),
            }
        }

        /// Changes the reported measurements, as a resize or DOM change would.
        pub fn resize(&mut self, panel_count: usize, size: PxSize) {
            self.panel_count = panel_count;
            self.size = size;
        }

        /// Panel currently carrying the marker.
        pub fn active(&self) -> Option<usize> {
            self.active
        }

        /// Every call received so far.
        pub fn calls(&self) -> &[SurfaceCall] {
            &self.calls
        }

        /// Drains the recorded calls.
        pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
            std::mem::take(&mut self.calls)
        }

        /// Translate of the most recent transform, if any.
        pub fn last_transform(&self) -> Option<f32> {
            self.calls.iter().rev().find_map(|call| match call {
                SurfaceCall::Transform(_, translate) => Some(*translate),
                _ => None,
            })
        }

        /// Most recent transition, if any.
        pub fn last_transition(&self) -> Option<Transition> {
            self.calls.iter().rev().find_map(|call| match call {
                SurfaceCall::Transition(transition) => Some(*transition),
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn panel_count(&self) -> usize {
            self.panel_count
        }

        fn container_size(&self) -> PxSize {
            self.size
        }

        fn set_layout(&mut self, container: PxSize, panel: PxSize) {
            self.calls.push(SurfaceCall::Layout { container, panel });
        }

        fn set_transition(&mut self, transition: Transition) {
            self.calls.push(SurfaceCall::Transition(transition));
        }

        fn set_transform(&mut self, axis: Axis, translate: f32) {
            self.calls.push(SurfaceCall::Transform(axis, translate));
        }

        fn set_active(&mut self, index: Option<usize>, _marker: &str) {
            self.active = index;
            self.calls.push(SurfaceCall::Active(index));
        }
    }
}
