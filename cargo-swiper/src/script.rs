//! Gesture scripts replayed against a paginator.
//!
//! One step per line, `#` starts a comment:
//!
//! ```text
//! start 100 300     # touch down at (x, y)
//! move 100 280
//! end 100 240       # touch up
//! settle            # container transition finished
//! settle descendant # a child's transition bubbled up
//! go 3 quiet
//! next
//! prev
//! resize 4 320 480  # panels, width, height
//! ```

use std::str::{FromStr, SplitWhitespace};

use anyhow::{Context, Result, anyhow, bail};
use swiper_ui::{
    TransitionOrigin,
    px::{Px, PxPosition},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start(PxPosition),
    Move(PxPosition),
    End(PxPosition),
    Settle(TransitionOrigin),
    Go { index: usize, quiet: bool },
    Next,
    Prev,
    Resize { panels: usize, width: i32, height: i32 },
}

/// A step with the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub step: Step,
}

pub fn parse(source: &str) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let number = idx + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let step = parse_step(text).with_context(|| format!("line {number}: `{text}`"))?;
        lines.push(Line { number, step });
    }
    Ok(lines)
}

fn parse_step(text: &str) -> Result<Step> {
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        bail!("empty step");
    };

    let step = match command {
        "start" => Step::Start(point(&mut words)?),
        "move" => Step::Move(point(&mut words)?),
        "end" => Step::End(point(&mut words)?),
        "settle" => match words.next() {
            None | Some("container") => Step::Settle(TransitionOrigin::Container),
            Some("descendant") => Step::Settle(TransitionOrigin::Descendant),
            Some(other) => bail!("unknown transition origin `{other}`"),
        },
        "go" => {
            let index = number(&mut words, "index")?;
            let quiet = match words.next() {
                None => false,
                Some("quiet") => true,
                Some(other) => bail!("expected `quiet`, found `{other}`"),
            };
            Step::Go { index, quiet }
        }
        "next" => Step::Next,
        "prev" => Step::Prev,
        "resize" => Step::Resize {
            panels: number(&mut words, "panels")?,
            width: number(&mut words, "width")?,
            height: number(&mut words, "height")?,
        },
        other => bail!("unknown step `{other}`"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}`");
    }
    Ok(step)
}

fn point(words: &mut SplitWhitespace<'_>) -> Result<PxPosition> {
    let x = number(words, "x")?;
    let y = number(words, "y")?;
    Ok(PxPosition::new(Px(x), Px(y)))
}

fn number<T>(words: &mut SplitWhitespace<'_>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let word = words.next().ok_or_else(|| anyhow!("missing {name}"))?;
    word.parse()
        .with_context(|| format!("invalid {name} `{word}`"))
}
