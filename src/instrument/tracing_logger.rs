use super::{LogLevel, QueryLogger};

/// [`QueryLogger`] that forwards to the `tracing` macros.
///
/// `Emergency`, `Critical`, `Alert` and `Error` all land on `error!`;
/// `Notice` lands on `info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl QueryLogger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Emergency | LogLevel::Critical | LogLevel::Alert | LogLevel::Error => {
                tracing::error!(target: "sql_conduit::statement", "{message}");
            }
            LogLevel::Warning => tracing::warn!(target: "sql_conduit::statement", "{message}"),
            LogLevel::Notice | LogLevel::Info => {
                tracing::info!(target: "sql_conduit::statement", "{message}");
            }
            LogLevel::Debug => tracing::debug!(target: "sql_conduit::statement", "{message}"),
        }
    }
}
