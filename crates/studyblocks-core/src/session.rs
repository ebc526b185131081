//! Interactive render/prompt/read loop over one schedule.
//!
//! The session owns its [`Schedule`] for its whole lifetime. Input and
//! output are generic so the loop runs the same against a terminal or an
//! in-memory buffer.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::render::{Renderer, RULE_WIDTH};
use crate::schedule::Schedule;

pub const PROMPT: &str = "\nActions:\n1. Skip current block\n2. Exit\nEnter your choice (1-2): ";
pub const NO_MORE_BLOCKS: &str = "No more blocks to skip!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// One line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Skip,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Only the line terminator is stripped; `" 1"` is not a valid choice.
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "1" => MenuChoice::Skip,
            "2" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// How a session ended. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose to exit.
    Exited,
    /// A skip was requested with no blocks left.
    Exhausted,
    /// Input closed before an exit choice.
    EndOfInput,
}

#[derive(Debug)]
pub struct Session {
    schedule: Schedule,
    renderer: Renderer,
}

impl Session {
    pub fn new(schedule: Schedule, renderer: Renderer) -> Self {
        Self { schedule, renderer }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Apply one menu choice. Returns the outcome if the loop should stop.
    pub fn apply<W: Write>(
        &mut self,
        choice: MenuChoice,
        out: &mut W,
    ) -> Result<Option<SessionOutcome>> {
        match choice {
            MenuChoice::Skip => {
                if !self.schedule.advance() {
                    writeln!(out, "{NO_MORE_BLOCKS}")?;
                    return Ok(Some(SessionOutcome::Exhausted));
                }
            }
            MenuChoice::Exit => return Ok(Some(SessionOutcome::Exited)),
            MenuChoice::Invalid => {
                tracing::debug!("invalid menu choice");
                writeln!(out, "{INVALID_CHOICE}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(None)
    }

    /// Run until the user exits, the schedule is exhausted, or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<SessionOutcome> {
        let mut line = String::new();
        let outcome = loop {
            self.renderer.render(&self.schedule, out)?;
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break SessionOutcome::EndOfInput;
            }

            if let Some(outcome) = self.apply(MenuChoice::parse(&line), out)? {
                break outcome;
            }
        };
        out.flush()?;

        tracing::info!(
            ?outcome,
            cursor = self.schedule.cursor(),
            len = self.schedule.len(),
            "session ended"
        );
        Ok(outcome)
    }
}
