//! Single-finger gesture session tracking.

use crate::{axis::Axis, px::PxPosition};

/// State of the touch contact currently interacting with the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureSession {
    /// No contact.
    #[default]
    Idle,
    /// Contact started; paging or scrolling is decided by the first move.
    Pending {
        /// Where the contact started.
        start: PxPosition,
    },
    /// The gesture drives the paging transform.
    Paging {
        /// Where the contact started.
        start: PxPosition,
        /// Latest reported contact point.
        last: PxPosition,
    },
    /// The gesture is left to native scrolling.
    Scrolling {
        /// Where the contact started.
        start: PxPosition,
    },
}

impl GestureSession {
    /// Start point of the active session.
    pub fn start(&self) -> Option<PxPosition> {
        match *self {
            Self::Idle => None,
            Self::Pending { start } | Self::Paging { start, .. } | Self::Scrolling { start } => {
                Some(start)
            }
        }
    }

    /// Whether a contact is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the session committed to paging.
    pub fn is_paging(&self) -> bool {
        matches!(self, Self::Paging { .. })
    }

    /// Whether the session committed to native scrolling.
    pub fn is_scrolling(&self) -> bool {
        matches!(self, Self::Scrolling { .. })
    }

    /// Decides the mode of a pending session from its first move.
    ///
    /// Cross-axis movement wins only when it exceeds primary-axis movement
    /// and scrolling is allowed.
    pub(crate) fn resolve(
        start: PxPosition,
        point: PxPosition,
        axis: Axis,
        allow_scroll: bool,
    ) -> Self {
        let (primary, cross) = axis.split(point - start);
        if allow_scroll && cross.abs() > primary.abs() {
            Self::Scrolling { start }
        } else {
            Self::Paging { start, last: point }
        }
    }
}

/// What the host should do with the platform's default handling of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Suppress it; the paginator owns the gesture.
    Prevent,
    /// Let it run, e.g. native scrolling.
    Allow,
}
