//! Named event handlers, one per event.

use std::fmt;

use smallvec::SmallVec;

use crate::error::SwiperError;

/// Emitted once a page change has visually settled, with
/// `(previous, current)` panel indices.
pub const SWIPED: &str = "swiped";

/// Callback invoked with `(previous, current)` panel indices.
pub type EventHandler = Box<dyn FnMut(usize, usize)>;

/// Maps event names to at most one handler each.
#[derive(Default)]
pub struct EventRegistry {
    handlers: SmallVec<[(String, EventHandler); 1]>,
}

impl EventRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event`.
    ///
    /// A name can be registered once; `None` stands for a handler that could
    /// not be resolved to a callable. On error nothing is registered.
    pub fn register(
        &mut self,
        event: &str,
        handler: Option<EventHandler>,
    ) -> Result<(), SwiperError> {
        if self.contains(event) {
            return Err(SwiperError::DuplicateHandler {
                event: event.to_string(),
            });
        }
        let Some(handler) = handler else {
            return Err(SwiperError::InvalidHandler {
                event: event.to_string(),
            });
        };
        self.handlers.push((event.to_string(), handler));
        Ok(())
    }

    /// Whether `event` has a handler.
    pub fn contains(&self, event: &str) -> bool {
        self.handlers.iter().any(|(name, _)| name == event)
    }

    /// Invokes the handler for `event`. Returns whether one was registered.
    pub fn emit(&mut self, event: &str, previous: usize, current: usize) -> bool {
        match self.handlers.iter_mut().find(|(name, _)| name == event) {
            Some((_, handler)) => {
                handler(previous, current);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(name, _)| name))
            .finish()
    }
}
