use std::path::Path;

use anyhow::Result;
use swiper_ui::Paginator;

use crate::{config::ReplayConfig, output, surface::ConsoleSurface};

use super::bind_handlers;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let config = ReplayConfig::discover(config)?;
    let args = &config.swiper;

    output::status("Direction", format!("{:?}", args.direction));
    output::status("Threshold", format!("{}px", args.threshold));
    output::status("Duration", format!("{}ms", args.duration.as_millis()));
    output::status("Scrolling", allowed(args.allow_scroll));
    output::status("Elastic", allowed(args.debounce));
    output::status(
        "Surface",
        format!(
            "{} panels in {}x{}",
            config.surface.panels, config.surface.width, config.surface.height
        ),
    );

    let mut pager = Paginator::new(args.clone(), ConsoleSurface::new(config.surface));
    bind_handlers(&mut pager, &config)?;
    if pager.current() != args.initial_slide {
        output::warn(format!(
            "initial slide {} is out of range, clamped to {}",
            args.initial_slide,
            pager.current()
        ));
    }
    if config.handlers.is_empty() {
        output::note("no handlers configured; `swiped` notifications are dropped");
    }

    output::status("Valid", "configuration");
    Ok(())
}

fn allowed(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
