//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity scale shared by every logger.
///
/// `All` is a threshold only: a logger set to `All` accepts every message,
/// but no message is ever logged *at* `All`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum LogLevel {
    All = 0,
    Debug = 1,
    Trace = 2,
    #[default]
    Info = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

impl LogLevel {
    /// Every level in ascending order, `All` first.
    pub const ALL_LEVELS: [LogLevel; 7] = [
        LogLevel::All,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Canonical display name ("Debug", "Warning", ...).
    ///
    /// `All` has no name of its own and renders as "Unknown", like any
    /// value outside the scale.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::All => "Unknown",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }

    /// Upper-case name as it appears in default-formatted messages.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Numeric rank of this level.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::All),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Trace),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Warning),
            5 => Some(LogLevel::Error),
            6 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// Name of a raw numeric level; values outside the scale render as "Unknown".
    pub fn name_of(value: u8) -> &'static str {
        Self::from_u8(value).map_or("Unknown", |level| level.name())
    }

    /// The highest rank. Logging at this level terminates the process.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, LogLevel::Fatal)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::All => White,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(LogLevel::All),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_rank() {
        assert!(LogLevel::All < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert!(LogLevel::Trace < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_names() {
        assert_eq!(LogLevel::Warning.name(), "Warning");
        assert_eq!(LogLevel::Warning.to_str(), "WARNING");
        assert_eq!(LogLevel::Fatal.to_string(), "Fatal");
    }

    #[test]
    fn test_unknown_numeric_level() {
        assert_eq!(LogLevel::name_of(3), "Info");
        assert_eq!(LogLevel::name_of(7), "Unknown");
        assert_eq!(LogLevel::name_of(u8::MAX), "Unknown");
        assert_eq!(LogLevel::try_from(42u8), Err(42));
    }

    #[test]
    fn test_try_from_scale() {
        for level in LogLevel::ALL_LEVELS {
            assert_eq!(LogLevel::try_from(level.as_u8()), Ok(level));
        }
        assert_eq!(LogLevel::try_from(7u8), Err(7));
        assert_eq!(u8::from(LogLevel::Fatal), 6);
    }

    #[test]
    fn test_all_renders_as_unknown() {
        assert_eq!(LogLevel::All.name(), "Unknown");
        assert_eq!(LogLevel::All.to_string(), "Unknown");
        assert_eq!(LogLevel::name_of(0), "Unknown");
        assert_eq!(LogLevel::All.to_str(), "ALL");
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("All".parse::<LogLevel>(), Ok(LogLevel::All));
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
