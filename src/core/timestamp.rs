//! Timestamp formatting for sink output
//!
//! Built-in sinks prefix every written line with the time of the write.
//! The default mirrors the classic `2025/01/08 10:30:45` local-time layout.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp layout used by console and file loggers
///
/// # Examples
///
/// ```
/// use rust_multi_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now()).unwrap();
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time, `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, rendered in local time
    ///
    /// ```
    /// use rust_multi_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// assert!(format.validate().is_ok());
    /// assert!(TimestampFormat::Custom("%Q".to_string()).validate().is_err());
    /// ```
    Custom(String),

    /// No timestamp; lines contain only the message
    Disabled,
}

impl TimestampFormat {
    /// Check that a `Custom` layout contains only known strftime specifiers.
    /// The built-in layouts always pass.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str) => {
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                    return Err(invalid_custom(format_str));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Format `datetime` according to this layout. `Disabled` yields an empty string.
    ///
    /// Fails with [`LoggerError::InvalidConfiguration`] when a `Custom`
    /// layout cannot be rendered.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let formatted = match self {
            TimestampFormat::Standard => datetime
                .with_timezone(&Local)
                .format("%Y/%m/%d %H:%M:%S")
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                // `to_string` would panic on an unknown specifier
                let mut out = String::new();
                write!(out, "{}", datetime.with_timezone(&Local).format(format_str))
                    .map_err(|_| invalid_custom(format_str))?;
                out
            }
            TimestampFormat::Disabled => String::new(),
        };
        Ok(formatted)
    }

    /// Prefix `message` with the current time, separated by one space.
    pub fn stamp(&self, message: &str) -> Result<String> {
        if self.is_disabled() {
            return Ok(message.to_string());
        }
        Ok(format!("{} {}", self.format(&Utc::now())?, message))
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, TimestampFormat::Disabled)
    }
}

fn invalid_custom(format_str: &str) -> LoggerError {
    LoggerError::config(
        "TimestampFormat",
        format!("invalid strftime layout '{}'", format_str),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_standard_format_shape() {
        let result = TimestampFormat::Standard.format(&fixed_datetime()).unwrap();
        // local time zone varies, the layout does not
        assert_eq!(result.len(), "2025/01/08 10:30:45".len());
        assert_eq!(&result[4..5], "/");
        assert_eq!(&result[10..11], " ");
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .unwrap();
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(millis, secs * 1000 + 123);
    }

    #[test]
    fn test_stamp() {
        assert_eq!(TimestampFormat::Disabled.stamp("INFO: [x]").unwrap(), "INFO: [x]");

        let stamped = TimestampFormat::Unix.stamp("INFO: [x]").unwrap();
        assert!(stamped.ends_with(" INFO: [x]"));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y|%m".to_string());
        assert!(format.validate().is_ok());
        let result = format.format(&fixed_datetime()).unwrap();
        assert_eq!(result.len(), "2025|01".len());
        assert_eq!(&result[4..5], "|");
    }

    #[test]
    fn test_invalid_custom_format_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());

        let err = format.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("%Q"));

        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(format.stamp("INFO: [x]").is_err());
    }

    #[test]
    fn test_builtin_formats_validate() {
        for format in [
            TimestampFormat::Standard,
            TimestampFormat::Iso8601,
            TimestampFormat::Rfc3339,
            TimestampFormat::Unix,
            TimestampFormat::UnixMillis,
            TimestampFormat::Disabled,
        ] {
            assert!(format.validate().is_ok());
        }
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Standard);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&TimestampFormat::Disabled).expect("serialize");
        assert_eq!(json, "\"Disabled\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
