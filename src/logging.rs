use crate::config::Config;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::str::FromStr;

/// Parse a configured level name; unknown names fall back to `Warn`.
pub fn level_from_str(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

/// Install a file logger appending to the configured log file.
/// Best-effort: failures are silently ignored (logging must never block the shell).
///
/// Returns whether a logger was installed.
pub fn init(config: &Config) -> bool {
    let level = level_from_str(&config.settings.log_level);
    if level == LevelFilter::Off {
        return false;
    }
    let Some(log_path) = config.log_path() else {
        return false;
    };
    if let Some(log_dir) = log_path.parent() {
        let _ = std::fs::create_dir_all(log_dir);
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return false;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, log_config, file).is_ok()
}
