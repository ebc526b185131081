use clap::Args;
use std::io;
use studyblocks_core::storage::MAX_SESSIONS;
use studyblocks_core::{ColorMode, Config, Renderer, Session};

/// Overrides layered on top of the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ScheduleArgs {
    /// Study block length in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub study: Option<u32>,
    /// Break block length in minutes
    #[arg(long = "break", value_parser = clap::value_parser!(u32).range(1..))]
    pub break_min: Option<u32>,
    /// Number of study sessions
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SESSIONS)))]
    pub sessions: Option<u32>,
    /// When to use color: auto, always or never
    #[arg(long)]
    pub color: Option<ColorMode>,
}

impl ScheduleArgs {
    /// Config file values with these flags applied on top.
    pub fn resolve(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Config::load()?;
        if let Some(study) = self.study {
            config.schedule.study_duration = study;
        }
        if let Some(break_min) = self.break_min {
            config.schedule.break_duration = break_min;
        }
        if let Some(sessions) = self.sessions {
            config.schedule.session_count = sessions;
        }
        if let Some(color) = self.color {
            config.display.color = color;
        }
        config.validate()?;
        tracing::debug!(?config, "resolved config");
        Ok(config)
    }
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let renderer = Renderer::new(config.display.color);
    let mut session = Session::new(config.build_schedule(), renderer);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
