use clap::Args;
use std::io;

use super::run::ScheduleArgs;
use studyblocks_core::Renderer;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,
    /// Skip this many blocks before rendering
    #[arg(long, default_value = "0")]
    pub skip: usize,
    /// Print the schedule state as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.schedule.resolve()?;
    let mut schedule = config.build_schedule();
    for _ in 0..args.skip {
        if !schedule.advance() {
            break;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule.snapshot())?);
    } else {
        let renderer = Renderer::new(config.display.color);
        renderer.render(&schedule, &mut io::stdout().lock())?;
    }
    Ok(())
}
