// SQLite adapter - bundled implementation of the adapter contract
//
// - config: options read from the connection descriptor
// - query: result extraction into buffered cursors
// - connection: the `Adapter` implementation over rusqlite

pub mod config;
pub mod connection;
pub mod query;

use crate::adapter::Adapter;
use crate::descriptor::Descriptor;
use crate::error::SqlConduitError;

pub use config::SqliteOptions;
pub use connection::SqliteAdapter;
pub use query::build_result_set;

/// Name the adapter is registered under.
pub const ADAPTER_NAME: &str = "Sqlite";

/// Registry constructor for [`SqliteAdapter`].
///
/// # Errors
/// Returns `SqlConduitError::ConfigError` if the descriptor lacks a database
/// name, or the rusqlite error if the database cannot be opened.
pub fn construct(descriptor: &Descriptor) -> Result<Box<dyn Adapter>, SqlConduitError> {
    let opts = SqliteOptions::from_descriptor(descriptor)?;
    Ok(Box::new(SqliteAdapter::open(&opts)?))
}
