//! Errors surfaced by [`Paginator`](crate::Paginator) handler registration.

use thiserror::Error;

/// Failures reported by handler registration.
///
/// Navigation never fails; out-of-range input is absorbed instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwiperError {
    /// The event already has a handler; the new one was not registered.
    #[error("event `{event}` already has a registered handler")]
    DuplicateHandler {
        /// Name of the event.
        event: String,
    },
    /// The supplied handler could not be resolved to a callable.
    #[error("handler for event `{event}` is not callable")]
    InvalidHandler {
        /// Name of the event.
        event: String,
    },
}
