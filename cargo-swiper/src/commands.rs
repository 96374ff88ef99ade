pub mod check;
pub mod replay;

use anyhow::{Context, Result};
use swiper_ui::{Paginator, Surface};

use crate::config::{ReplayConfig, resolve_action};

/// Registers every handler named in `config` on `pager`.
pub fn bind_handlers<S: Surface>(pager: &mut Paginator<S>, config: &ReplayConfig) -> Result<()> {
    for (event, action) in &config.handlers {
        pager
            .bind(event, resolve_action(event, action))
            .with_context(|| format!("Cannot bind `{action}` to event `{event}`"))?;
    }
    Ok(())
}
