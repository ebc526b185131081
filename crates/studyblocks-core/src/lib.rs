//! # studyblocks Core Library
//!
//! Core logic for the studyblocks schedule visualizer: a Pomodoro-style
//! study/break schedule that a user steps through by skipping blocks. The
//! `studyblocks` CLI binary is a thin layer over this crate.
//!
//! ## Key Components
//!
//! - [`Schedule`]: alternating study/break blocks with a forward-only cursor
//! - [`Renderer`]: terminal rendering with optional color
//! - [`Session`]: the interactive skip/exit loop
//! - [`Config`]: TOML-backed schedule and display settings

pub mod error;
pub mod render;
pub mod schedule;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, ValidationError};
pub use render::{ColorMode, Renderer};
pub use schedule::{Block, BlockKind, Schedule, ScheduleSnapshot};
pub use session::{MenuChoice, Session, SessionOutcome};
pub use storage::{Config, DisplayConfig, ScheduleConfig};
