//! Logging and profiling collaborators attached to a [`crate::Connection`].

mod profiler;
mod tracing_logger;

use clap::ValueEnum;

pub use profiler::{ProfileItem, QueryProfiler};
pub use tracing_logger::TracingLogger;

/// Severity passed to [`QueryLogger::log`]. Statement logging uses `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum LogLevel {
    Emergency,
    Critical,
    Alert,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

/// Receives the statement log of a connection.
pub trait QueryLogger: Send + Sync {
    fn log(&self, message: &str, level: LogLevel);
}

/// Receives start/stop signals around every statement.
pub trait Profiler: Send + Sync {
    fn start_profile(&self, sql: &str);
    fn stop_profile(&self, sql: &str);
}
