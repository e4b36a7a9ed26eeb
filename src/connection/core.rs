use std::sync::Arc;

use super::Connection;
use crate::adapter::{Adapter, QueryResult};
use crate::descriptor::{self, Descriptor};
use crate::error::SqlConduitError;
use crate::instrument::{LogLevel, Profiler, QueryLogger};

impl Connection {
    /// Send one statement to the server.
    ///
    /// The statement is bracketed by [`Connection::before_query`] and
    /// [`Connection::after_query`]; the latter runs even when the adapter fails.
    ///
    /// # Errors
    /// Returns the adapter's error unchanged.
    pub fn query(&mut self, sql: &str) -> Result<QueryResult, SqlConduitError> {
        self.before_query(sql);
        let result = self.adapter.query(sql);
        self.after_query(sql);
        result
    }

    /// Hook run immediately before a statement is executed.
    ///
    /// Logs `"[<connection id>] <sql>"` at `Debug` and starts a profile.
    pub fn before_query(&self, sql: &str) {
        if let Some(logger) = &self.logger {
            let message = format!("[{}] {sql}", self.adapter.connection_id());
            logger.log(&message, LogLevel::Debug);
        }
        if let Some(profiler) = &self.profiler {
            profiler.start_profile(sql);
        }
    }

    /// Hook run immediately after a statement is executed. Only the profiler
    /// is notified.
    pub fn after_query(&self, sql: &str) {
        if let Some(profiler) = &self.profiler {
            profiler.stop_profile(sql);
        }
    }

    /// Send arbitrary text to the attached logger, if any.
    pub fn log(&self, message: &str, level: LogLevel) {
        if let Some(logger) = &self.logger {
            logger.log(message, level);
        }
    }

    pub fn set_logger(&mut self, logger: Option<Arc<dyn QueryLogger>>) {
        self.logger = logger;
    }

    #[must_use]
    pub fn logger(&self) -> Option<&Arc<dyn QueryLogger>> {
        self.logger.as_ref()
    }

    pub fn set_profiler(&mut self, profiler: Option<Arc<dyn Profiler>>) {
        self.profiler = profiler;
    }

    #[must_use]
    pub fn profiler(&self) -> Option<&Arc<dyn Profiler>> {
        self.profiler.as_ref()
    }

    /// Escape a literal using the adapter's rules.
    #[must_use]
    pub fn escape_string(&self, value: &str) -> String {
        self.adapter.escape_string(value)
    }

    #[must_use]
    pub fn connection_id(&self) -> String {
        self.adapter.connection_id()
    }

    #[must_use]
    pub fn adapter(&self) -> &dyn Adapter {
        self.adapter.as_ref()
    }

    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Database name from the descriptor's `name` key, or `""`.
    #[must_use]
    pub fn database_name(&self) -> String {
        self.descriptor.get_str(descriptor::NAME).unwrap_or_default()
    }

    /// The descriptor's `schema`, falling back to `name`, or `""`.
    #[must_use]
    pub fn default_schema(&self) -> String {
        self.descriptor
            .get_str(descriptor::SCHEMA)
            .or_else(|| self.descriptor.get_str(descriptor::NAME))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn username(&self) -> String {
        self.descriptor
            .get_str(descriptor::USERNAME)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn host_name(&self) -> String {
        self.descriptor.get_str(descriptor::HOST).unwrap_or_default()
    }
}
