use std::time::Duration;

use crate::descriptor::{self, Descriptor};
use crate::error::SqlConduitError;

/// Descriptor key holding the busy timeout in milliseconds.
pub const BUSY_TIMEOUT_MS: &str = "busy_timeout_ms";

/// Options for opening a `SQLite` database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteOptions {
    pub db_path: String,
    pub busy_timeout: Option<Duration>,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            busy_timeout: None,
        }
    }

    #[must_use]
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = Some(busy_timeout);
        self
    }

    /// Read options from a descriptor: `name` is the database path (or
    /// `:memory:`), `busy_timeout_ms` is optional.
    ///
    /// # Errors
    /// Returns `SqlConduitError::ConfigError` if `name` is missing or empty, or
    /// `busy_timeout_ms` is not a non-negative integer.
    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Self, SqlConduitError> {
        let db_path = descriptor
            .get_str(descriptor::NAME)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                SqlConduitError::ConfigError(
                    "SQLite adapter requires a database 'name' (path or :memory:)".into(),
                )
            })?;

        let mut opts = Self::new(db_path);
        if let Some(raw) = descriptor.get_str(BUSY_TIMEOUT_MS) {
            let millis: u64 = raw.parse().map_err(|_| {
                SqlConduitError::ConfigError(format!("invalid {BUSY_TIMEOUT_MS}: {raw}"))
            })?;
            opts = opts.with_busy_timeout(Duration::from_millis(millis));
        }
        Ok(opts)
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.db_path == ":memory:"
    }
}
