//! Terminal rendering of a [`Schedule`].
//!
//! Output shape:
//!
//! ```text
//!
//! Current Schedule:
//! ==================================================
//! [Study (15m)] → Break (5m) → Study (15m)
//! ==================================================
//! Current Block: 1/3
//! Total Time Remaining: 35 minutes
//! ```
//!
//! Skipped blocks are left out, the block under the cursor is bracketed, and
//! study/break are tinted blue/green when color is enabled.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;

use crate::schedule::{Block, BlockKind, Schedule};

pub const RULE_WIDTH: usize = 50;
pub const ARROW: &str = " → ";

/// When to emit ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
            }
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Writes schedules to a text surface.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Resolve `mode` once; the result holds for every later render.
    pub fn new(mode: ColorMode) -> Self {
        if mode == ColorMode::Always {
            colored::control::set_override(true);
        }
        Self {
            color: mode.enabled(),
        }
    }

    /// Renderer that never emits escape sequences.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn render<W: Write>(&self, schedule: &Schedule, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out)?;
        writeln!(out, "Current Schedule:")?;
        writeln!(out, "{rule}")?;

        let cursor = schedule.cursor();
        let mut first = true;
        for (index, block) in schedule.remaining_blocks() {
            if !first {
                write!(out, "{ARROW}")?;
            }
            first = false;
            write!(out, "{}", self.block_text(block, index == cursor))?;
        }
        writeln!(out)?;

        writeln!(out, "{rule}")?;
        writeln!(out, "Current Block: {}/{}", cursor + 1, schedule.len())?;
        writeln!(out, "Total Time Remaining: {} minutes", schedule.total_time())?;
        Ok(())
    }

    pub fn render_to_string(&self, schedule: &Schedule) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(schedule, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn block_text(&self, block: &Block, is_current: bool) -> String {
        let label = if is_current {
            format!("[{}]", block.label())
        } else {
            block.label()
        };
        if !self.color {
            return label;
        }
        match block.kind() {
            BlockKind::Study => label.blue().to_string(),
            BlockKind::Break => label.green().to_string(),
        }
    }
}
