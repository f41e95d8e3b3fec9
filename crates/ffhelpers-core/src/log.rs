//! Shared log file for all helpers.
//!
//! Lines go to `~/.config/ffhelpers/logs/ffhelpers.log`, tagged with the
//! executable that wrote them. Once the file passes `max_file_mb` it is
//! moved to `ffhelpers.log.1` and a fresh one is started.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "ffhelpers.log";
const BACKUP_FILE_NAME: &str = "ffhelpers.log.1";

/// Logging configuration (`[log]` in `config.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Off unless asked for; the helpers normally run silently.
    pub enabled: bool,
    /// Minimum level written.
    pub level: Level,
    /// Size in megabytes at which the file is rotated.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: Level::Info,
            max_file_mb: 10,
        }
    }
}

/// Log severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    program: &'static str,
    min_level: Level,
    max_bytes: u64,
}

/// Starts logging for `program`. Call once at the top of `main`.
///
/// A disabled config, a missing home directory, or an unopenable file all
/// leave logging off.
pub fn init(config: &LogConfig, program: &'static str) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let path = dir.join("logs").join(LOG_FILE_NAME);
    let Ok(file) = open_log(&path) else {
        return;
    };

    let _ = LOGGER.set(Mutex::new(Logger {
        file,
        path,
        program,
        min_level: config.level,
        max_bytes: config.max_file_mb * 1024 * 1024,
    }));
}

/// Writes one line if logging is on and `level` passes the filter.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&clock(), logger.program, level, args);
    let _ = logger.file.write_all(line.as_bytes());

    let size = logger.file.metadata().map(|m| m.len()).unwrap_or(0);
    if logger.max_bytes > 0 && size >= logger.max_bytes {
        logger.rotate();
    }
}

fn format_line(time: &str, program: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} {program} [{level}] {args}\n")
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

impl Logger {
    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, self.path.with_file_name(BACKUP_FILE_NAME));
        if let Ok(file) = open_log(&self.path) {
            self.file = file;
        }
    }
}

/// UTC wall-clock time of day, `HH:MM:SS`.
fn clock() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
