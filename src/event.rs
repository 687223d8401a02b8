//! Event and log callback system.
//!
//! Editing and dispatch report what they did through two channels:
//!
//! - a process-wide **event callback** receiving `(name, data)` pairs, which
//!   the demo binary uses to print notifications on the console, and
//! - `tracing` events under the `patterns::event` and `patterns::log`
//!   targets, so structured subscribers see the same sequence.
//!
//! Both are optional. Without a callback or subscriber, emitting is a no-op.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

/// `tracing` target for notification events.
pub const EVENT_TARGET: &str = "patterns::event";
/// `tracing` target for log messages.
pub const LOG_TARGET: &str = "patterns::log";

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase label for console prefixes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a notification event.
///
/// `name` is a dotted identifier such as `editor.copy`; `data` is the
/// human-readable payload.
pub fn emit_event(name: &str, data: &str) {
    tracing::info!(target: EVENT_TARGET, kind = name, data = data, "event");
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: LOG_TARGET, "{message}"),
        LogLevel::Info => tracing::info!(target: LOG_TARGET, "{message}"),
        LogLevel::Warn => tracing::warn!(target: LOG_TARGET, "{message}"),
        LogLevel::Error => tracing::error!(target: LOG_TARGET, "{message}"),
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_event_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        set_event_callback(move |name, data| {
            if name == "test.event_callback" {
                assert_eq!(data, "payload");
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_event("test.event_callback", "payload");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        clear_event_callback();
        emit_event("test.event_callback", "payload");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_log_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        set_log_callback(move |level, msg| {
            if msg == "test.log_callback" {
                assert_eq!(level, LogLevel::Warn);
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Warn, "test.log_callback");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        clear_log_callback();
    }

    #[test]
    fn test_level_ordering_and_labels() {
        assert!(LogLevel::Debug < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }
}
