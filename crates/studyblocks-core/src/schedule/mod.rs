//! Study/break schedule model.
//!
//! A [`Schedule`] is a fixed alternation of study and break [`Block`]s with
//! a forward-only cursor. Durations are labels in minutes; nothing here
//! reads a clock.

mod block;
mod sequence;

pub use block::{Block, BlockKind};
pub use sequence::{Schedule, ScheduleSnapshot};
