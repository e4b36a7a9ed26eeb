use super::Connection;
use crate::adapter::QueryResult;
use crate::error::SqlConduitError;
use crate::query_builder::{Quoting, build_delete, build_insert, build_update};
use crate::types::SqlValue;

impl Connection {
    fn with_quoting<T>(&self, auto_quotes: bool, build: impl FnOnce(&Quoting<'_>) -> T) -> T {
        if auto_quotes {
            let escape = |value: &str| self.adapter.escape_string(value);
            build(&Quoting::Escaped(&escape))
        } else {
            build(&Quoting::Verbatim)
        }
    }

    /// Insert one row.
    ///
    /// With `auto_quotes`, literal values are escaped and single-quoted and raw
    /// values are escaped only.
    ///
    /// # Errors
    /// Returns `SqlConduitError::EmptyValues` for an empty `values` slice (no SQL
    /// is sent), or the adapter's error.
    pub fn insert(
        &mut self,
        table: &str,
        values: &[SqlValue],
        fields: Option<&[&str]>,
        auto_quotes: bool,
    ) -> Result<QueryResult, SqlConduitError> {
        let sql = self.with_quoting(auto_quotes, |quoting| {
            build_insert(table, values, fields, quoting)
        })?;
        self.query(&sql)
    }

    /// Update rows, pairing `fields` and `values` by position.
    ///
    /// # Errors
    /// Returns `SqlConduitError::FieldValueCountMismatch` when the slices differ in
    /// length (no SQL is sent), or the adapter's error.
    pub fn update(
        &mut self,
        table: &str,
        fields: &[&str],
        values: &[SqlValue],
        where_condition: Option<&str>,
        auto_quotes: bool,
    ) -> Result<QueryResult, SqlConduitError> {
        let sql = self.with_quoting(auto_quotes, |quoting| {
            build_update(table, fields, values, where_condition, quoting)
        })?;
        self.query(&sql)
    }

    /// Delete rows. An empty `where_condition` deletes the whole table.
    ///
    /// # Errors
    /// Returns the adapter's error.
    pub fn delete(
        &mut self,
        table: &str,
        where_condition: &str,
    ) -> Result<QueryResult, SqlConduitError> {
        let sql = build_delete(table, where_condition);
        self.query(&sql)
    }
}
