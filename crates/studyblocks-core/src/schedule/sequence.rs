use serde::{Deserialize, Serialize};

use super::block::Block;

/// Ordered study/break blocks plus the cursor walking over them.
///
/// The cursor starts at 0 and only moves forward, one block per successful
/// [`Schedule::advance`]. Every block before the cursor is skipped; every
/// block at or after it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    blocks: Vec<Block>,
    cursor: usize,
    /// Sum of all block durations, computed once at construction.
    total_time: u64,
}

/// Serializable read-only view of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub blocks: Vec<Block>,
    pub cursor: usize,
    pub len: usize,
    pub total_time: u64,
    pub finished: bool,
}

impl Schedule {
    /// Build `Study, Break, Study, ..., Study` with `session_count` study
    /// blocks and one break between each pair.
    ///
    /// A `session_count` of 0 yields an empty schedule.
    pub fn build(study_duration: u32, break_duration: u32, session_count: usize) -> Self {
        let mut blocks = Vec::with_capacity(session_count.saturating_mul(2).saturating_sub(1));
        for i in 0..session_count {
            blocks.push(Block::study(study_duration));
            if i + 1 < session_count {
                blocks.push(Block::rest(break_duration));
            }
        }
        let total_time = blocks.iter().map(|b| u64::from(b.duration_min())).sum();

        tracing::debug!(
            study_duration,
            break_duration,
            session_count,
            blocks = blocks.len(),
            total_time,
            "schedule built"
        );

        Self {
            blocks,
            cursor: 0,
            total_time,
        }
    }

    /// Skip the block under the cursor and move to the next one.
    ///
    /// Returns `false` without touching anything once the cursor has passed
    /// the last block.
    pub fn advance(&mut self) -> bool {
        let Some(block) = self.blocks.get_mut(self.cursor) else {
            tracing::debug!(cursor = self.cursor, "advance past end of schedule");
            return false;
        };
        block.mark_skipped();
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, len = self.blocks.len(), "block skipped");
        true
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True once every block has been skipped.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.blocks.len()
    }

    /// The block pending action, if any.
    pub fn current(&self) -> Option<&Block> {
        self.blocks.get(self.cursor)
    }

    /// Total minutes as computed at construction. Not reduced by skips.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Non-skipped blocks with their positions in the original sequence.
    pub fn remaining_blocks(&self) -> impl Iterator<Item = (usize, &Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_skipped())
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            blocks: self.blocks.clone(),
            cursor: self.cursor,
            len: self.blocks.len(),
            total_time: self.total_time,
            finished: self.is_finished(),
        }
    }
}
