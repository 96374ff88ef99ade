//! Gesture-driven paginator for a container of full-size panels.
//!
//! ## Usage
//!
//! Feed touch start/move/end events and the container's transition-complete
//! notifications into a [`Paginator`]; it drives the [`Surface`] transform and
//! reports settled page changes through the `swiped` handler.
//!
//! Page changes commit in two phases. The logical index changes as soon as a
//! gesture ends or a jump is requested, and the transform animates toward the
//! new panel. The active marker and the `swiped` notification wait for
//! [`Paginator::transition_complete`], so they never run ahead of what is on
//! screen.

use tracing::{debug, trace};

use crate::{
    args::SwiperArgs,
    error::SwiperError,
    events::{EventHandler, EventRegistry, SWIPED},
    geometry::Geometry,
    gesture::{DefaultAction, GestureSession},
    px::PxPosition,
    surface::{QUIET_DURATION, Surface, Transition, TransitionOrigin},
};

/// Touch paginator over a [`Surface`].
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use swiper_ui::{
///     Axis, Paginator, Surface, SwiperArgs, Transition, TransitionOrigin,
///     px::{Px, PxPosition, PxSize},
/// };
///
/// struct Stack;
///
/// impl Surface for Stack {
///     fn panel_count(&self) -> usize {
///         3
///     }
///     fn container_size(&self) -> PxSize {
///         PxSize::new(Px(375), Px(600))
///     }
///     fn set_layout(&mut self, _container: PxSize, _panel: PxSize) {}
///     fn set_transition(&mut self, _transition: Transition) {}
///     fn set_transform(&mut self, _axis: Axis, _translate: f32) {}
///     fn set_active(&mut self, _index: Option<usize>, _marker: &str) {}
/// }
///
/// let mut pager = Paginator::new(SwiperArgs::default(), Stack);
///
/// let swipes = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&swipes);
/// pager
///     .on("swiped", move |previous, current| sink.borrow_mut().push((previous, current)))
///     .expect("no handler registered yet");
///
/// pager.touch_start(PxPosition::new(Px(100), Px(300)));
/// pager.touch_end(PxPosition::new(Px(100), Px(200)));
/// assert_eq!(pager.current(), 1);
///
/// pager.transition_complete(TransitionOrigin::Container);
/// assert_eq!(*swipes.borrow(), vec![(0, 1)]);
/// ```
pub struct Paginator<S: Surface> {
    args: SwiperArgs,
    surface: S,
    geometry: Geometry,
    session: GestureSession,
    current: usize,
    previous: usize,
    pending_jump: Option<usize>,
    handlers: EventRegistry,
}

impl<S: Surface> Paginator<S> {
    /// Measures `surface`, lays out its panels and shows
    /// [`SwiperArgs::initial_slide`] at rest.
    ///
    /// An out-of-range initial slide is clamped to the last panel.
    pub fn new(args: SwiperArgs, surface: S) -> Self {
        let geometry = Geometry::measure(
            args.direction,
            surface.panel_count(),
            surface.container_size(),
        );
        let mut pager = Self {
            args,
            surface,
            geometry,
            session: GestureSession::Idle,
            current: 0,
            previous: 0,
            pending_jump: None,
            handlers: EventRegistry::new(),
        };
        pager.current = pager.clamp_page(pager.args.initial_slide);
        pager.previous = pager.current;
        pager.apply_layout();
        debug!(
            panels = pager.geometry.panel_count,
            current = pager.current,
            "paginator initialized"
        );
        pager
    }

    /// Registers `handler` for `event`.
    ///
    /// Each event accepts a single handler. Only [`SWIPED`] is emitted; it
    /// receives `(previous, current)` once a page change has settled.
    pub fn on(
        &mut self,
        event: &str,
        handler: impl FnMut(usize, usize) + 'static,
    ) -> Result<&mut Self, SwiperError> {
        self.bind(event, Some(Box::new(handler)))
    }

    /// Registers a handler that may not have resolved, e.g. one named in
    /// configuration. `None` fails with [`SwiperError::InvalidHandler`].
    pub fn bind(
        &mut self,
        event: &str,
        handler: Option<EventHandler>,
    ) -> Result<&mut Self, SwiperError> {
        self.handlers.register(event, handler)?;
        Ok(self)
    }

    /// Begins a gesture at `point`.
    ///
    /// Drops any running transition so the following moves track the finger.
    pub fn touch_start(&mut self, point: PxPosition) {
        if self.is_empty() {
            return;
        }
        self.session = GestureSession::Pending { start: point };
        self.surface.set_transition(Transition::None);
    }

    /// Tracks the contact at `point`.
    ///
    /// The first move of a gesture only decides between paging and native
    /// scrolling; later moves of a paging gesture translate the container.
    pub fn touch_move(&mut self, point: PxPosition) -> DefaultAction {
        match self.session {
            GestureSession::Idle | GestureSession::Scrolling { .. } => DefaultAction::Allow,
            GestureSession::Pending { start } => {
                self.session = GestureSession::resolve(
                    start,
                    point,
                    self.args.direction,
                    self.args.allow_scroll,
                );
                trace!(session = ?self.session, "gesture mode resolved");
                if self.session.is_scrolling() {
                    DefaultAction::Allow
                } else {
                    DefaultAction::Prevent
                }
            }
            GestureSession::Paging { start, .. } => {
                self.session = GestureSession::Paging { start, last: point };
                let (primary, _) = self.args.direction.split(point - start);
                let translate = self
                    .geometry
                    .drag_translate(primary, self.current, self.args.debounce);
                trace!(primary, translate, "drag");
                self.surface.set_transform(self.args.direction, translate);
                DefaultAction::Prevent
            }
        }
    }

    /// Ends the gesture at `point` and snaps to a panel.
    ///
    /// A drag beyond the threshold moves one panel back (positive distance)
    /// or forward (negative distance); anything shorter springs back.
    pub fn touch_end(&mut self, point: PxPosition) {
        let session = std::mem::take(&mut self.session);
        if session.is_scrolling() {
            return;
        }
        let Some(start) = session.start() else {
            return;
        };

        let (distance, _) = self.args.direction.split(point - start);
        let threshold = self.args.sanitized_threshold();

        self.previous = self.current;
        if distance > threshold {
            self.current = self.current.saturating_sub(1);
        } else if distance < -threshold {
            self.current = self.clamp_page(self.current + 1);
        }
        debug!(
            distance,
            previous = self.previous,
            current = self.current,
            "gesture ended"
        );
        self.show(self.current, false);
    }

    /// Handles the end of a container transition.
    ///
    /// When the page changed or a jump is pending, moves the active marker to
    /// the current panel and emits [`SWIPED`]. Returns whether it did.
    /// Notifications bubbling up from descendants are ignored.
    pub fn transition_complete(&mut self, origin: TransitionOrigin) -> bool {
        if origin != TransitionOrigin::Container {
            return false;
        }
        if !self.settle_due() {
            return false;
        }

        let previous = self.previous;
        let current = self.current;
        self.activate(Some(current));
        self.handlers.emit(SWIPED, previous, current);
        self.pending_jump = None;
        self.previous = current;
        debug!(previous, current, "page settled");
        true
    }

    /// Jumps to panel `index`, instantly when `quiet`.
    ///
    /// Out-of-range indices and the current panel are ignored. The marker and
    /// [`SWIPED`] follow on the next [`transition_complete`](Self::transition_complete).
    pub fn go(&mut self, index: usize, quiet: bool) -> &mut Self {
        if index >= self.geometry.panel_count || index == self.current {
            return self;
        }
        self.previous = self.current;
        self.current = index;
        self.pending_jump = Some(index);
        debug!(previous = self.previous, current = index, quiet, "jump");
        self.show(index, quiet);
        self
    }

    /// Animates to the following panel; ignored on the last one.
    pub fn next(&mut self) -> &mut Self {
        if self.current + 1 >= self.geometry.panel_count {
            return self;
        }
        self.previous = self.current;
        self.current += 1;
        self.show(self.current, false);
        self
    }

    /// Animates to the preceding panel; ignored on the first one.
    pub fn prev(&mut self) -> &mut Self {
        if self.current == 0 || self.is_empty() {
            return self;
        }
        self.previous = self.current;
        self.current -= 1;
        self.show(self.current, false);
        self
    }

    /// Re-reads panel count and container size from the surface, e.g. after
    /// a resize, and re-lays out around the current panel.
    ///
    /// Any gesture in progress and any pending jump are dropped.
    pub fn remeasure(&mut self) {
        self.geometry = Geometry::measure(
            self.args.direction,
            self.surface.panel_count(),
            self.surface.container_size(),
        );
        self.session = GestureSession::Idle;
        self.pending_jump = None;
        self.current = self.clamp_page(self.current);
        self.previous = self.current;
        self.apply_layout();
        debug!(
            panels = self.geometry.panel_count,
            current = self.current,
            "paginator remeasured"
        );
    }

    /// Index of the current panel; 0 when there are no panels.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Index reported as `previous` by the next settle.
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Jump target waiting for its transition to complete.
    pub fn pending_jump(&self) -> Option<usize> {
        self.pending_jump
    }

    /// Number of panels.
    pub fn panel_count(&self) -> usize {
        self.geometry.panel_count
    }

    /// Whether there are no panels; every navigation is a no-op then.
    pub fn is_empty(&self) -> bool {
        self.geometry.panel_count == 0
    }

    /// Current geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Construction options.
    pub fn args(&self) -> &SwiperArgs {
        &self.args
    }

    /// Active gesture session.
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// The surface being driven.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface being driven.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn settle_due(&self) -> bool {
        self.current != self.previous || self.pending_jump.is_some()
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.geometry.panel_count.saturating_sub(1))
    }

    fn apply_layout(&mut self) {
        self.surface
            .set_layout(self.geometry.content_size(), self.geometry.viewport);
        self.show(self.current, true);
        let active = (!self.is_empty()).then_some(self.current);
        self.activate(active);
    }

    fn show(&mut self, index: usize, quiet: bool) {
        let duration = if quiet {
            QUIET_DURATION
        } else {
            self.args.duration
        };
        self.surface.set_transition(Transition::Animated(duration));
        self.surface
            .set_transform(self.args.direction, self.geometry.rest_translate(index));
    }

    fn activate(&mut self, index: Option<usize>) {
        self.surface.set_active(index, &self.args.active_class);
    }
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for Paginator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("args", &self.args)
            .field("surface", &self.surface)
            .field("geometry", &self.geometry)
            .field("session", &self.session)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("pending_jump", &self.pending_jump)
            .field("handlers", &self.handlers)
            .finish()
    }
}
