use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rusqlite::Connection as RusqliteConnection;

use super::config::SqliteOptions;
use super::query::build_result_set;
use crate::adapter::{Adapter, QueryResult};
use crate::error::SqlConduitError;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// [`Adapter`] over a single rusqlite connection.
///
/// Row-returning statements are read to completion and handed back as a
/// buffered cursor; other statements return no cursor.
pub struct SqliteAdapter {
    conn: RusqliteConnection,
    connection_id: u64,
}

impl SqliteAdapter {
    /// Open the database described by `opts`.
    ///
    /// File databases are switched to WAL journaling.
    ///
    /// # Errors
    /// Returns `SqlConduitError::SqliteError` if the database cannot be opened
    /// or configured.
    pub fn open(opts: &SqliteOptions) -> Result<Self, SqlConduitError> {
        let conn = if opts.is_in_memory() {
            RusqliteConnection::open_in_memory()?
        } else {
            RusqliteConnection::open(&opts.db_path)?
        };
        if let Some(timeout) = opts.busy_timeout {
            conn.busy_timeout(timeout)?;
        }
        if !opts.is_in_memory() {
            conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))?;
        }

        let connection_id = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(connection_id, db_path = %opts.db_path, "sqlite database opened");
        Ok(Self {
            conn,
            connection_id,
        })
    }

    /// Borrow the underlying rusqlite connection.
    #[must_use]
    pub fn raw_connection(&self) -> &RusqliteConnection {
        &self.conn
    }
}

impl Adapter for SqliteAdapter {
    fn query(&mut self, sql: &str) -> Result<QueryResult, SqlConduitError> {
        let mut stmt = self.conn.prepare(sql)?;
        if stmt.column_count() == 0 {
            let rows_affected = stmt.execute([])?;
            tracing::trace!(connection_id = self.connection_id, rows_affected, "statement executed");
            return Ok(None);
        }
        let result_set = build_result_set(&mut stmt)?;
        Ok(Some(Box::new(result_set)))
    }

    fn escape_string(&self, value: &str) -> String {
        value.replace('\'', "''")
    }

    fn connection_id(&self) -> String {
        self.connection_id.to_string()
    }
}

impl fmt::Debug for SqliteAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteAdapter")
            .field("connection_id", &self.connection_id)
            .field("path", &self.conn.path())
            .finish()
    }
}
