use crate::error::{AdminError, Result as AdminResult};

use catalog_config::LogLevel;

use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Initialize logger with fern
///
/// Log lines go to `log_file` when set, otherwise to stderr so stdout only
/// ever carries the command's JSON. Colors apply to stderr only.
#[track_caller]
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> AdminResult<()> {
    let level_filter = log_level.0;

    let colors = (colored && log_file.is_none()).then(level_colors);
    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let timestamp = humantime::format_rfc3339(SystemTime::now());
            let line = match colors {
                Some(colors) => log_line(
                    timestamp,
                    colors.color(record.level()),
                    message,
                    record.file(),
                    record.line(),
                ),
                None => log_line(timestamp, record.level(), message, record.file(), record.line()),
            };
            out.finish(format_args!("{line}"))
        });

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    AdminError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| AdminError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<timestamp> - <LEVEL>] <message> [<file>:<line>]`
pub(crate) fn log_line(
    timestamp: impl fmt::Display,
    level: impl fmt::Display,
    message: &fmt::Arguments<'_>,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{timestamp} - {level}] {message} [{file}:{line}]",
        file = file.unwrap_or("unknown"),
        line = line.unwrap_or(0),
    )
}
