//! swiper-ui is a touch-gesture paginator for a sequence of full-size panels.
//!
//! A [`Paginator`] listens to single-finger touch gestures on a container,
//! translates drag distance along the paging axis into a transform, and snaps
//! to the neighbouring panel once the drag crosses a threshold. Rendering is
//! delegated to a host-provided [`Surface`].
//!
//! # Hosting
//!
//! Implement [`Surface`] over whatever owns the container, then forward
//! touch events and transition-complete notifications:
//!
//! ```
//! use swiper_ui::{
//!     Axis, DefaultAction, Paginator, Surface, SwiperArgs, Transition, TransitionOrigin,
//!     px::{Px, PxPosition, PxSize},
//! };
//!
//! struct Deck {
//!     translate: f32,
//!     active: Option<usize>,
//! }
//!
//! impl Surface for Deck {
//!     fn panel_count(&self) -> usize {
//!         4
//!     }
//!     fn container_size(&self) -> PxSize {
//!         PxSize::new(Px(320), Px(480))
//!     }
//!     fn set_layout(&mut self, _container: PxSize, _panel: PxSize) {}
//!     fn set_transition(&mut self, _transition: Transition) {}
//!     fn set_transform(&mut self, _axis: Axis, translate: f32) {
//!         self.translate = translate;
//!     }
//!     fn set_active(&mut self, index: Option<usize>, _marker: &str) {
//!         self.active = index;
//!     }
//! }
//!
//! let deck = Deck { translate: 0.0, active: None };
//! let mut pager = Paginator::new(SwiperArgs::default().direction(Axis::Horizontal), deck);
//!
//! pager.touch_start(PxPosition::new(Px(300), Px(100)));
//! assert_eq!(pager.touch_move(PxPosition::new(Px(280), Px(102))), DefaultAction::Prevent);
//! pager.touch_end(PxPosition::new(Px(200), Px(104)));
//!
//! assert_eq!(pager.current(), 1);
//! assert_eq!(pager.surface().translate, -320.0);
//!
//! pager.transition_complete(TransitionOrigin::Container);
//! assert_eq!(pager.surface().active, Some(1));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod args;
pub mod axis;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod paginator;
pub mod px;
pub mod surface;

#[cfg(test)]
mod tests;

pub use crate::{
    args::SwiperArgs,
    axis::Axis,
    error::SwiperError,
    events::{EventHandler, EventRegistry, SWIPED},
    geometry::Geometry,
    gesture::{DefaultAction, GestureSession},
    paginator::Paginator,
    px::{Px, PxPosition, PxSize},
    surface::{QUIET_DURATION, Surface, Transition, TransitionOrigin},
};
