use chrono::Local;
use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, MutexGuard};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    /// Get ANSI color code for terminal output
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Warn  => "\x1b[33m", // Yellow
            LogLevel::Info  => "\x1b[36m", // Cyan
            LogLevel::Debug => "\x1b[90m", // Gray
        }
    }

    fn tag(&self) -> &'static str {
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
}

// stdout carries the brightness report, so everything logged goes to stderr.
pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Warn,
        use_colors: io::stderr().is_terminal(),
    })
});

fn config() -> MutexGuard<'static, Config> {
    GLOBAL_CONFIG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Set verbose/debug mode
pub fn set_verbose(enabled: bool) {
    config().level = if enabled { LogLevel::Debug } else { LogLevel::Warn };
}

/// Render a line without touching the global config.
pub fn format_line(level: LogLevel, prefix: &str, args: Arguments, use_colors: bool) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    if use_colors {
        format!("{}●{} [{}][{}] {}", level.color(), RESET_COLOR, timestamp, prefix, args)
    } else {
        format!("[{}][{}][{}] {}", timestamp, level.tag(), prefix, args)
    }
}

/// Core logging function
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let config = config();

    // Skip message if level is lower than configured
    if level > config.level {
        return;
    }

    let line = format_line(level, prefix, args, config.use_colors);
    let _ = writeln!(io::stderr().lock(), "{}", line);
}

/// Flexible macro to allow formatted logging
#[macro_export]
macro_rules! slog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

/// Convenience macros
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
