use crate::{CliError, CliResult};

use std::fmt::{Arguments, Display};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};
use roster_config::LogLevel;

/// Installs the global logger.
///
/// Records go to `log_file` when set, otherwise to stderr so stdout carries
/// only the list. `colored` applies to stderr only.
pub fn initialize(level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let file = log_file.as_deref().map(open_log_file).transpose()?;
    let colors = (colored && file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(level.0)
        .format(move |out, message, record| {
            let line = match &colors {
                Some(colors) => format_line(colors.color(record.level()), message, record),
                None => format_line(record.level(), message, record),
            };
            out.finish(format_args!("{line}"))
        });

    let dispatch = match file {
        Some(file) => dispatch.chain(file),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!("Logger initialized: level={:?}, file={}", level.0, path.display()),
        None => info!("Logger initialized: level={:?}, stderr", level.0),
    }

    Ok(())
}

/// `[<rfc3339> - <level>] <message> [<file>:<line>]`
pub fn format_line(level: impl Display, message: &Arguments<'_>, record: &Record<'_>) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {e}", path.display())))
}
