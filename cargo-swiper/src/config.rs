use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use swiper_ui::{
    EventHandler, SwiperArgs,
    px::{Px, PxSize},
};

use crate::output;

/// Replay configuration loaded from `swiper.toml`.
///
/// ```toml
/// [swiper]
/// direction = "horizontal"
/// threshold = 40
/// allowScroll = true
///
/// [surface]
/// panels = 4
/// width = 375
/// height = 667
///
/// [handlers]
/// swiped = "print"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayConfig {
    pub swiper: SwiperArgs,
    pub surface: SurfaceConfig,
    /// Event name to handler action, see [`resolve_action`].
    pub handlers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    pub panels: usize,
    pub width: i32,
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            panels: 5,
            width: 375,
            height: 667,
        }
    }
}

impl SurfaceConfig {
    pub fn size(&self) -> PxSize {
        PxSize::new(Px(self.width), Px(self.height))
    }
}

impl ReplayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Config file if given, `./swiper.toml` if present, defaults otherwise.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let local = Path::new("swiper.toml");
        if local.exists() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}

/// Turns a handler action named in configuration into a callback.
///
/// Known actions are `print`, `log` and `ignore`; anything else resolves to
/// `None` and is rejected at registration.
pub fn resolve_action(event: &str, action: &str) -> Option<EventHandler> {
    let event = event.to_string();
    match action {
        "print" => Some(Box::new(move |previous: usize, current: usize| {
            output::status("Swiped", format!("{event}: {previous} -> {current}"));
        })),
        "log" => Some(Box::new(move |previous: usize, current: usize| {
            tracing::info!(event = %event, previous, current, "handler fired");
        })),
        "ignore" => Some(Box::new(|_: usize, _: usize| {})),
        _ => None,
    }
}
