// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Arguments;
use std::fs::{OpenOptions, create_dir_all, metadata, remove_file};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use chrono::Local;
use once_cell::sync::Lazy;

/// Maximum log file size in bytes before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    /// ANSI color code for terminal output
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Warn  => "\x1b[33m", // Yellow
            LogLevel::Info  => "\x1b[36m", // Cyan
            LogLevel::Debug => "\x1b[90m", // Gray
        }
    }

    fn short(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn  => "WRN",
            LogLevel::Info  => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
    pub console: bool,
    pub file: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: std::io::stderr().is_terminal(),
        console: false,
        file: true,
    })
});

static SESSION_SEPARATOR: Once = Once::new();

/// Verbose mode: debug level and console echo.
pub fn set_verbose(enabled: bool) {
    if let Ok(mut config) = GLOBAL_CONFIG.lock() {
        config.level = if enabled { LogLevel::Debug } else { LogLevel::Info };
        config.console = enabled;
    }
}

#[cfg(test)]
pub fn set_file_output(enabled: bool) {
    if let Ok(mut config) = GLOBAL_CONFIG.lock() {
        config.file = enabled;
    }
}

/// Core logging function
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let Ok(config) = GLOBAL_CONFIG.lock() else { return };

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.short(), prefix, args);

    if config.file {
        if let Err(e) = write_line_to_log(&file_line) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    // Console gets everything in verbose mode, errors always.
    // stdout belongs to the breathing display, so the console is stderr.
    if config.console || level == LogLevel::Error {
        if config.use_colors {
            eprintln!("{}●{} [{}][{}] {}", level.color(), RESET_COLOR, timestamp, prefix, args);
        } else {
            eprintln!("{}", file_line);
        }
    }
}

#[macro_export]
macro_rules! slog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! sinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! swarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! serror {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! sdebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

/// Log file path, under the user cache dir
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("breathe");
    if !path.exists() {
        let _ = create_dir_all(&path);
    }
    path.push("breathe.log");
    path
}

fn rotate_log_if_needed(path: &PathBuf) {
    if let Ok(meta) = metadata(path) {
        if meta.len() >= MAX_LOG_SIZE {
            let _ = remove_file(path);
        }
    }
}

/// Blank line between runs, once per process
fn ensure_session_newline_once(path: &PathBuf) {
    SESSION_SEPARATOR.call_once(|| {
        if let Ok(meta) = metadata(path) {
            if meta.len() > 0 {
                if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                    let _ = writeln!(file);
                }
            }
        }
    });
}

fn write_line_to_log(line: &str) -> std::io::Result<()> {
    let path = log_path();
    rotate_log_if_needed(&path);
    ensure_session_newline_once(&path);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}
