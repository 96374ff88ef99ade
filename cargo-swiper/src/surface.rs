use std::time::Duration;

use swiper_ui::{Axis, Surface, Transition, px::PxSize};

use crate::{config::SurfaceConfig, output};

/// Surface that narrates every render call to stderr.
///
/// Tracks whether an animated transform is in flight so the replay can
/// deliver transition-complete notifications on its own.
#[derive(Debug)]
pub struct ConsoleSurface {
    panels: usize,
    size: PxSize,
    transition: Transition,
    in_flight: Option<Duration>,
}

impl ConsoleSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            panels: config.panels,
            size: config.size(),
            transition: Transition::None,
            in_flight: None,
        }
    }

    pub fn resize(&mut self, config: SurfaceConfig) {
        self.panels = config.panels;
        self.size = config.size();
    }

    /// Clears and returns the duration of the running animation, if any.
    pub fn take_in_flight(&mut self) -> Option<Duration> {
        self.in_flight.take()
    }
}

impl Surface for ConsoleSurface {
    fn panel_count(&self) -> usize {
        self.panels
    }

    fn container_size(&self) -> PxSize {
        self.size
    }

    fn set_layout(&mut self, container: PxSize, panel: PxSize) {
        output::step(format!(
            "layout container {}x{}, panels {}x{}",
            container.width.raw(),
            container.height.raw(),
            panel.width.raw(),
            panel.height.raw()
        ));
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
        if transition == Transition::None {
            self.in_flight = None;
        }
    }

    fn set_transform(&mut self, axis: Axis, translate: f32) {
        match self.transition {
            Transition::None => {
                output::step(format!("translate {axis:?} {translate:.2}px"));
            }
            Transition::Animated(duration) => {
                output::step(format!(
                    "translate {axis:?} {translate:.2}px over {}ms",
                    duration.as_millis()
                ));
                self.in_flight = Some(duration);
            }
        }
    }

    fn set_active(&mut self, index: Option<usize>, marker: &str) {
        match index {
            Some(index) => output::step(format!("panel {index} marked `{marker}`")),
            None => output::step(format!("no panel marked `{marker}`")),
        }
    }
}
