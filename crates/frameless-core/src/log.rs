//! Rotating file logger behind the `log_*!` macros.
//!
//! Disabled unless the config turns it on. Lines go to
//! `~/.config/frameless/logs/frameless.log`; once the file passes the
//! configured size cap it is renamed to `frameless.log.1` (replacing any
//! previous backup) and a fresh file is started. One backup is enough:
//! the interesting lines are the display mutations around "my taskbar
//! moved", and those are recent by definition.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "frameless.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Unknown names fall back to `Info` rather than failing config load.
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
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
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

impl Logger {
    /// Opens (or creates) the log file under the config directory.
    /// Any failure along the way leaves logging off.
    fn open(config: &LogConfig) -> Option<Self> {
        let path = crate::config::config_dir()?
            .join("logs")
            .join(LOG_FILE_NAME);
        fs::create_dir_all(path.parent()?).ok()?;

        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Some(Self {
            file,
            path,
            min_level: Level::parse(&config.level),
            max_bytes: config.max_file_mb * 1024 * 1024,
            written,
        })
    }

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }

        let line = format!("{} [{level}] {args}\n", timestamp());
        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    /// Renames the full log aside and starts a fresh one.
    fn rotate(&mut self) {
        let backup = self
            .path
            .with_file_name(format!("{LOG_FILE_NAME}{BACKUP_SUFFIX}"));
        let _ = fs::rename(&self.path, &backup);

        if let Ok(fresh) = OpenOptions::new().create(true).append(true).open(&self.path) {
            self.file = fresh;
        }
        self.written = 0;
    }
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false`.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    if let Some(logger) = Logger::open(config) {
        let _ = LOGGER.set(Mutex::new(logger));
    }
}

/// Writes a log line if the logger is initialised and the level clears
/// the configured minimum. Called through the macros, not directly.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    if let Some(mutex) = LOGGER.get()
        && let Ok(mut logger) = mutex.lock()
    {
        logger.log(level, args);
    }
}

fn timestamp() -> String {
    // Days since the epoch plus time of day, from std::time alone. Not a
    // calendar date, but unambiguous for correlating with system events.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (d, h, m, s) = (secs / 86400, secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("d{d} {h:02}:{m:02}:{s:02}")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_names_fall_back_to_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
        assert_eq!(Level::parse(""), Level::Info);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn writes_before_init_are_dropped() {
        // The global logger is unset in this test binary; the macros must
        // be safe to call regardless.
        write(Level::Error, format_args!("nobody is listening"));
    }
}
