use std::fmt;
use std::str::FromStr;

use crate::error::LogvarkError;

// Severity of a log message, ordered from least to most verbose.
// Filtering against a configured maximum level happens before a
// message is handed to a destination; a destination writes whatever it
// receives, including Off, and only uses the level for tagging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    // log nothing, only meaningful as a filter setting
    Off,
    // errors that endanger the program's primary work
    Error,
    // potentially harmful situations
    Warning,
    // coarse-grained progress messages
    Info,
    // fine-grained messages useful while debugging
    Debug,
    // very fine-grained tracing messages
    Trace,
}

impl LogLevel {
    // Map to the equivalent log crate filter, for embedders that drive
    // the log facade off the same configuration value.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LogLevel {
    type Err = LogvarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LogvarkError::msg(format!("invalid log level {s}"))),
        }
    }
}
