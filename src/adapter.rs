use crate::error::SqlConduitError;
use crate::results::Row;
use crate::types::FetchMode;

/// What an adapter's `query` hands back: a cursor over the result rows, or
/// `None` when the statement produced no result set.
pub type QueryResult = Option<Box<dyn Cursor>>;

/// Result-set handle returned by [`Adapter::query`].
pub trait Cursor: Send {
    /// Choose the shape of subsequently fetched rows.
    fn set_fetch_mode(&mut self, mode: FetchMode);

    /// Pull the next row; `Ok(None)` signals exhaustion.
    ///
    /// # Errors
    /// Returns the adapter's error if reading the row fails.
    fn fetch_array(&mut self) -> Result<Option<Row>, SqlConduitError>;
}

/// Vendor-specific driver plugged into a [`crate::Connection`].
///
/// The connection wraps every `query` call with its instrumentation hooks, so
/// implementations only talk to the server.
pub trait Adapter: Send {
    /// Execute one SQL statement.
    ///
    /// # Errors
    /// Returns the driver's error if the statement fails.
    fn query(&mut self, sql: &str) -> Result<QueryResult, SqlConduitError>;

    /// Escape `value` for inclusion between single quotes.
    fn escape_string(&self, value: &str) -> String;

    /// Identifier used to prefix log lines for this connection.
    fn connection_id(&self) -> String;
}

impl std::fmt::Debug for dyn Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("connection_id", &self.connection_id())
            .finish()
    }
}

impl std::fmt::Debug for dyn Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").finish_non_exhaustive()
    }
}
