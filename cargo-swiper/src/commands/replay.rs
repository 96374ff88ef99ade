use std::{fs, path::Path};

use anyhow::{Context, Result};
use swiper_ui::{Paginator, TransitionOrigin};
use tracing::debug;

use crate::{
    config::{ReplayConfig, SurfaceConfig},
    output,
    script::{self, Step},
    surface::ConsoleSurface,
};

use super::bind_handlers;

pub fn execute(script_path: &Path, config: Option<&Path>, auto_settle: bool) -> Result<()> {
    let config = ReplayConfig::discover(config)?;
    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let lines = script::parse(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    output::status(
        "Replaying",
        format!("{} ({} steps)", script_path.display(), lines.len()),
    );

    let mut pager = Paginator::new(config.swiper.clone(), ConsoleSurface::new(config.surface));
    bind_handlers(&mut pager, &config)?;
    // construction animates quietly into place; nothing to report for it
    pager.surface_mut().take_in_flight();

    for line in lines {
        output::status("Step", format!("{:>3}: {:?}", line.number, line.step));
        apply(&mut pager, line.step);

        if auto_settle && let Some(duration) = pager.surface_mut().take_in_flight() {
            debug!(?duration, "auto settle");
            if !pager.transition_complete(TransitionOrigin::Container) {
                output::step("settled without a page change");
            }
        }
    }

    output::status(
        "Finished",
        format!(
            "on panel {} of {}",
            pager.current(),
            pager.panel_count()
        ),
    );
    Ok(())
}

fn apply(pager: &mut Paginator<ConsoleSurface>, step: Step) {
    match step {
        Step::Start(point) => pager.touch_start(point),
        Step::Move(point) => {
            let action = pager.touch_move(point);
            output::step(format!("default action: {action:?}"));
        }
        Step::End(point) => pager.touch_end(point),
        Step::Settle(origin) => {
            pager.surface_mut().take_in_flight();
            if !pager.transition_complete(origin) {
                output::step("nothing to settle");
            }
        }
        Step::Go { index, quiet } => {
            if index >= pager.panel_count() {
                output::warn(format!(
                    "panel {index} does not exist ({} panels)",
                    pager.panel_count()
                ));
            }
            pager.go(index, quiet);
        }
        Step::Next => {
            pager.next();
        }
        Step::Prev => {
            pager.prev();
        }
        Step::Resize {
            panels,
            width,
            height,
        } => {
            pager.surface_mut().resize(SurfaceConfig {
                panels,
                width,
                height,
            });
            pager.remeasure();
        }
    }
}
