use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyblocks", version, about = "Study/break schedule visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Step through the schedule interactively (default)
    Run(commands::run::ScheduleArgs),
    /// Render the schedule once and exit
    Show(commands::show::ShowArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Log to stderr so the schedule on stdout stays readable.
/// Filter comes from STUDYBLOCKS_LOG, defaulting to warnings only.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STUDYBLOCKS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        None => commands::run::run(commands::run::ScheduleArgs::default()),
        Some(Commands::Run(args)) => commands::run::run(args),
        Some(Commands::Show(args)) => commands::show::run(args),
        Some(Commands::Config { action }) => commands::config::run(action),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "studyblocks",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
