mod config;

pub use config::{Config, DisplayConfig, ScheduleConfig, MAX_SESSIONS};

use std::path::PathBuf;

/// Returns `~/.config/studyblocks[-dev]/` based on STUDYBLOCKS_ENV.
///
/// Set STUDYBLOCKS_ENV=dev to use a development config directory. The
/// directory is not created here; [`Config::save`] creates it on demand.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYBLOCKS_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("studyblocks-dev")
    } else {
        base_dir.join("studyblocks")
    }
}
