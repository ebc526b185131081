use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Study,
    Break,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Study => "Study",
            BlockKind::Break => "Break",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled unit of study or break time.
///
/// Kind and duration are fixed at creation. The skip flag only ever goes
/// from `false` to `true`, and only through [`Block::mark_skipped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    kind: BlockKind,
    /// Duration in minutes.
    duration_min: u32,
    #[serde(default)]
    skipped: bool,
}

impl Block {
    pub fn new(kind: BlockKind, duration_min: u32) -> Self {
        Self {
            kind,
            duration_min,
            skipped: false,
        }
    }

    pub fn study(duration_min: u32) -> Self {
        Self::new(BlockKind::Study, duration_min)
    }

    pub fn rest(duration_min: u32) -> Self {
        Self::new(BlockKind::Break, duration_min)
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Human-readable label, e.g. `Study (15m)`.
    pub fn label(&self) -> String {
        format!("{} ({}m)", self.kind, self.duration_min)
    }

    pub(crate) fn mark_skipped(&mut self) {
        self.skipped = true;
    }
}
