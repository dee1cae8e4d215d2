//! Diagnostics logging for the camera rig
//!
//! The rig never prints on its own terms: every message goes through a [`Logger`]
//! installed with `Diagnostics::set_logger`. Rejected option values, recompute
//! summaries and geometry failures all arrive here as [`LogEntry`] values.
//!
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information on ERROR entries

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for rig diagnostics
///
/// Implement this trait to route rig messages into the host's own logging
/// (editor console, file, test capture, ...).
///
/// # Example
///
/// ```no_run
/// use triple_screen_camera::triple_screen::log::{Logger, LogEntry};
///
/// struct ConsoleOverlay;
///
/// impl Logger for ConsoleOverlay {
///     fn log(&self, entry: &LogEntry) {
///         // Push entry.message to the in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry
    fn log(&self, entry: &LogEntry);
}

/// One diagnostic message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Time the entry was created
    pub timestamp: SystemTime,

    /// Emitting component (e.g. "triple_screen::CameraRig")
    pub source: String,

    /// Message text
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-fit details (frustum bounds)
    Trace,

    /// Recompute summaries
    Debug,

    /// Lifecycle events
    Info,

    /// Rejected option values
    Warn,

    /// Geometry and construction failures
    Error,
}

/// Console logger with colored severities
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        // Multi-line messages (range warnings) are indented under the header
        let message = entry.message.replace('\n', "\n    ");

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!("[{}] [{}] [{}] {} ({}:{})", timestamp, severity_str, source, message, file, line);
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, message);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! rig_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::triple_screen::Diagnostics::log(
            $crate::triple_screen::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! rig_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::triple_screen::Diagnostics::log(
            $crate::triple_screen::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! rig_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::triple_screen::Diagnostics::log(
            $crate::triple_screen::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// # Example
///
/// ```no_run
/// use triple_screen_camera::rig_warn;
///
/// rig_warn!("triple_screen::CameraRig", "New option value is out of range");
/// ```
#[macro_export]
macro_rules! rig_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::triple_screen::Diagnostics::log(
            $crate::triple_screen::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! rig_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::triple_screen::Diagnostics::log_detailed(
            $crate::triple_screen::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
