//! Fatal termination signal
//!
//! Logging at [`LogLevel::Fatal`] broadcasts the message to every logger and
//! then unwinds with a [`FatalSignal`] as the panic payload. It is not a
//! [`LoggerError`](super::LoggerError): nothing in this crate returns or
//! catches it. A supervisor that needs to inspect the cause (a thread spawner,
//! a test harness) can recover it with [`FatalSignal::from_panic`].

use super::log_level::LogLevel;
use std::any::Any;
use std::fmt;

/// Panic payload raised after a fatal message has been broadcast.
pub struct FatalSignal {
    level: LogLevel,
    message: String,
    payload: Box<dyn Any + Send>,
}

impl FatalSignal {
    pub(crate) fn new(message: String, payload: Box<dyn Any + Send>) -> Self {
        Self {
            level: LogLevel::Fatal,
            message,
            payload,
        }
    }

    /// Level the message was logged at (always [`LogLevel::Fatal`]).
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The logged value rendered with `Display`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value that was logged, as passed by the caller.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Downcast the logged value.
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Extract the signal from a caught panic payload.
    ///
    /// Returns the original payload untouched when the panic was not fatal.
    pub fn from_panic(
        panic: Box<dyn Any + Send>,
    ) -> std::result::Result<Box<FatalSignal>, Box<dyn Any + Send>> {
        panic.downcast::<FatalSignal>()
    }

    /// Unwind with this signal.
    pub(crate) fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Debug for FatalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FatalSignal")
            .field("level", &self.level)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FatalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.message)
    }
}
