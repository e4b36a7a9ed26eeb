//! Driver-agnostic SQL connection layer.
//!
//! A [`Connection`] wraps a vendor [`Adapter`], tracks transaction state,
//! builds INSERT/UPDATE/DELETE text, and runs every statement between the
//! attached logger and profiler:
//! ```rust,no_run
//! use std::sync::Arc;
//! use sql_conduit::prelude::*;
//! use serde_json::json;
//!
//! let profiler = Arc::new(QueryProfiler::new());
//! let mut conn = factory("Sqlite", json!({ "name": ":memory:" }))?
//!     .with_logger(Arc::new(TracingLogger))
//!     .with_profiler(profiler.clone());
//!
//! conn.query("CREATE TABLE robots (name TEXT, built TEXT)")?;
//! conn.begin()?;
//! conn.insert(
//!     "robots",
//!     &[SqlValue::from("Astro Boy"), SqlValue::raw("CURRENT_TIMESTAMP")],
//!     Some(&["name", "built"]),
//!     true,
//! )?;
//! conn.commit()?;
//!
//! let rows = conn.fetch_all("SELECT name FROM robots", FetchMode::Assoc)?;
//! assert_eq!(rows[0].get("name"), Some(&RowValues::Text("Astro Boy".into())));
//! assert_eq!(profiler.number_total_statements(), 5);
//! # Ok::<(), SqlConduitError>(())
//! ```

pub mod adapter;
pub mod connection;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod instrument;
pub mod prelude;
pub mod query_builder;
pub mod results;
pub mod types;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use adapter::{Adapter, Cursor, QueryResult};
pub use connection::Connection;
pub use descriptor::{Descriptor, DescriptorBuilder};
pub use error::SqlConduitError;
pub use factory::{AdapterOptions, AdapterRegistry, factory, register_adapter};
pub use instrument::{LogLevel, Profiler, QueryLogger};
pub use results::{ResultSet, Row};
pub use types::{FetchMode, RawValue, RowValues, SqlValue};
