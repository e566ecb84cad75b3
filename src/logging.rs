// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Logging for the argument parser.
//!
//! Two layers live here:
//!
//! 1. **Subscriber setup**: [`LogConfig`] and [`init_logging`] install a
//!    global `tracing` subscriber once per process, with `RUST_LOG` taking
//!    precedence over the configured level.
//! 2. **The [`Logger`] seam**: the parser never calls `tracing` directly.
//!    It writes diagnostics, usage text and the configuration echo through a
//!    `&dyn Logger`, so tests can capture output with [`MemoryLogger`] while
//!    binaries forward it to `tracing` with [`TracingLogger`].

use std::fmt;
use std::sync::{Mutex, Once};

/// Tracing target used for everything the parser writes.
pub const LOG_TARGET: &str = "owl_args::config";

/// Configuration for logging initialization.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub default_level: LogLevel,
    /// Include timestamps in log output.
    pub with_timestamps: bool,
    /// Include target (module path) in log output.
    pub with_target: bool,
    /// Include source file and line numbers.
    pub with_file_line: bool,
    /// Use ANSI colors (disable for file output).
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            with_timestamps: true,
            with_target: false,
            with_file_line: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a new logging configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default log level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Configuration preset for development.
    ///
    /// Verbose output with colors, file/line info for debugging.
    #[must_use]
    pub fn development() -> Self {
        Self {
            default_level: LogLevel::Debug,
            with_timestamps: true,
            with_target: true,
            with_file_line: true,
            with_ansi: true,
        }
    }

    /// Configuration preset for production.
    ///
    /// Clean output without colors, suitable for redirecting to a log file
    /// next to `results.txt`.
    #[must_use]
    pub fn production() -> Self {
        Self {
            default_level: LogLevel::Info,
            with_timestamps: true,
            with_target: false,
            with_file_line: false,
            with_ansi: false,
        }
    }

    /// Configuration preset for testing.
    #[must_use]
    pub fn testing() -> Self {
        Self {
            default_level: LogLevel::Warn,
            with_timestamps: false,
            with_target: false,
            with_file_line: false,
            with_ansi: false,
        }
    }
}

/// Log level enumeration.
///
/// Maps to tracing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and above.
    Warn,
    /// Informational messages and above.
    #[default]
    Info,
    /// Debug messages and above.
    Debug,
    /// All messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert to a tracing filter string.
    fn as_filter_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Guard ensuring logging is only initialized once.
static INIT_LOGGING: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Safe to call more than once; only the first call has any effect. The
/// `RUST_LOG` environment variable always takes precedence over
/// `config.default_level`.
///
/// ## Example
///
/// ```rust
/// use owl_args::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::production());
/// ```
pub fn init_logging(config: &LogConfig) {
    INIT_LOGGING.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| config.default_level.as_filter_str().to_string());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .with_file(config.with_file_line)
            .with_line_number(config.with_file_line);

        if config.with_timestamps {
            builder.init();
        } else {
            builder.without_time().init();
        }
    });
}

/// Severity attached to each line written through a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Usage text and the configuration echo.
    Info,
    /// A setting was overridden during normalization.
    Warn,
    /// The argument vector was rejected.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// Sink for everything the parser has to say.
///
/// Writes are fire-and-forget: implementations must not fail and the parser
/// never inspects what happened to a line.
pub trait Logger {
    /// Emit one message. Multi-line messages (usage text) arrive whole.
    fn write(&self, severity: Severity, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn write(&self, severity: Severity, message: &str) {
        (**self).write(severity, message);
    }
}

/// Forwards parser output to `tracing` under [`LOG_TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn write(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: LOG_TARGET, "{message}"),
            Severity::Warn => tracing::warn!(target: LOG_TARGET, "{message}"),
            Severity::Error => tracing::error!(target: LOG_TARGET, "{message}"),
        }
    }
}

/// Records every line in memory.
///
/// Used by tests, and by callers that want to show diagnostics somewhere
/// other than the log (a dialog, a status file).
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Recorded messages with the given severity.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }

    /// Number of recorded lines with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.messages(severity).len()
    }

    /// Everything recorded, joined into one string.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines()
            .into_iter()
            .map(|(_, m)| m)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop all recorded lines.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Logger for MemoryLogger {
    fn write(&self, severity: Severity, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((severity, message.to_string()));
        }
    }
}

// Re-export tracing macros so binaries don't need to depend on tracing directly
pub use tracing::{debug, error, info, trace, warn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert!(matches!(config.default_level, LogLevel::Info));
        assert!(config.with_timestamps);
        assert!(config.with_ansi);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_level(LogLevel::Debug)
            .with_timestamps(false)
            .with_ansi(false);

        assert!(matches!(config.default_level, LogLevel::Debug));
        assert!(!config.with_timestamps);
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_log_config_presets() {
        let dev = LogConfig::development();
        assert!(matches!(dev.default_level, LogLevel::Debug));
        assert!(dev.with_file_line);

        let prod = LogConfig::production();
        assert!(matches!(prod.default_level, LogLevel::Info));
        assert!(!prod.with_ansi);

        let test = LogConfig::testing();
        assert!(matches!(test.default_level, LogLevel::Warn));
        assert!(!test.with_timestamps);
    }

    #[test]
    fn test_log_level_filter_str() {
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
        assert_eq!(LogLevel::Warn.as_filter_str(), "warn");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }

    #[test]
    fn test_memory_logger_records_in_order() {
        let logger = MemoryLogger::new();
        logger.write(Severity::Info, "first");
        logger.write(Severity::Warn, "second");
        logger.write(Severity::Error, "third");

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (Severity::Info, "first".to_string()));
        assert_eq!(logger.messages(Severity::Warn), vec!["second".to_string()]);
        assert_eq!(logger.count(Severity::Error), 1);
        assert_eq!(logger.contents(), "first\nsecond\nthird");

        logger.clear();
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_logger_through_reference() {
        let logger = MemoryLogger::new();
        let by_ref: &dyn Logger = &logger;
        (&by_ref).write(Severity::Info, "hello");
        assert_eq!(logger.count(Severity::Info), 1);
    }

    #[test]
    fn test_tracing_logger_does_not_panic() {
        // No subscriber installed: events are dropped.
        TracingLogger.write(Severity::Warn, "nobody listens");
    }
}
