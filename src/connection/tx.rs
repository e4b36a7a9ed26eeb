use super::Connection;
use crate::adapter::QueryResult;
use crate::error::SqlConduitError;

impl Connection {
    /// Start a transaction and send `BEGIN`.
    ///
    /// Calling this inside an open transaction is allowed: the state stays
    /// the same and `BEGIN` is sent again.
    ///
    /// # Errors
    /// Returns the adapter's error; the transaction flags are already set.
    pub fn begin(&mut self) -> Result<QueryResult, SqlConduitError> {
        if self.under_transaction {
            tracing::warn!(
                connection_id = %self.adapter.connection_id(),
                "begin called while a transaction is already open"
            );
        }
        self.auto_commit = false;
        self.under_transaction = true;
        tracing::debug!(connection_id = %self.adapter.connection_id(), "transaction started");
        self.query("BEGIN")
    }

    /// Commit the open transaction.
    ///
    /// # Errors
    /// Returns `SqlConduitError::NoActiveTransaction` (without sending SQL) when
    /// no transaction is open, or the adapter's error from `COMMIT`.
    pub fn commit(&mut self) -> Result<QueryResult, SqlConduitError> {
        self.end_transaction("COMMIT")
    }

    /// Roll back the open transaction.
    ///
    /// # Errors
    /// Returns `SqlConduitError::NoActiveTransaction` (without sending SQL) when
    /// no transaction is open, or the adapter's error from `ROLLBACK`.
    pub fn rollback(&mut self) -> Result<QueryResult, SqlConduitError> {
        self.end_transaction("ROLLBACK")
    }

    fn end_transaction(&mut self, statement: &str) -> Result<QueryResult, SqlConduitError> {
        if !self.under_transaction {
            return Err(SqlConduitError::NoActiveTransaction);
        }
        self.under_transaction = false;
        self.auto_commit = true;
        tracing::debug!(
            connection_id = %self.adapter.connection_id(),
            "transaction finished with {statement}"
        );
        self.query(statement)
    }

    /// Force the transaction flag without sending SQL or touching auto-commit.
    ///
    /// For adapters that learn the server's transaction state some other way.
    /// This can leave `is_under_transaction` and `have_auto_commit` out of step;
    /// restoring them is the caller's job.
    pub fn set_under_transaction(&mut self, under_transaction: bool) {
        self.under_transaction = under_transaction;
    }

    #[must_use]
    pub fn is_under_transaction(&self) -> bool {
        self.under_transaction
    }

    #[must_use]
    pub fn have_auto_commit(&self) -> bool {
        self.auto_commit
    }
}
