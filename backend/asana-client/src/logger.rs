//! Optional logging setup for applications embedding the client.
//!
//! The library itself only emits through `log`; binaries that want the
//! client's debug tracing on screen and on disk call [`initialize`] once.

use crate::error::logger::LoggerError;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Set only once a logger has actually been installed, so a failed attempt
/// (bad log directory) can be retried.
static LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);

pub const LOG_FILE_NAME: &str = "asana-client.log";

/// Initialize dual output logging (coloured stdout + plain file in `log_dir`).
///
/// Safe to call more than once: after a successful call, later calls log a
/// warning and return Ok. A failed call leaves no state behind.
///
/// # Errors
///
/// Returns [`LoggerError`] if the log file cannot be created or another
/// global logger is already installed.
pub fn initialize(log_dir: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let mut installed = LOGGER_INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if *installed {
        warn!("Logger already initialized");
        return Ok(());
    }

    initialize_internal(log_dir, level)?;
    *installed = true;
    info!("Logger initialized with level: {level:?}");

    Ok(())
}

#[track_caller]
fn initialize_internal(log_dir: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| LoggerError::LogFile {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    Dispatch::new()
        .level(level)
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| LoggerError::Init {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
