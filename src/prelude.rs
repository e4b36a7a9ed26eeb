//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::adapter::{Adapter, Cursor, QueryResult};
pub use crate::connection::Connection;
pub use crate::descriptor::{Descriptor, DescriptorBuilder};
pub use crate::error::SqlConduitError;
pub use crate::factory::{
    AdapterOptions, AdapterRegistry, factory, register_adapter, registered_adapters,
};
pub use crate::instrument::{
    LogLevel, ProfileItem, Profiler, QueryLogger, QueryProfiler, TracingLogger,
};
pub use crate::results::{ResultSet, Row};
pub use crate::types::{FetchMode, RawValue, RowValues, SqlValue};

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteAdapter, SqliteOptions};
