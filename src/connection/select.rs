use super::Connection;
use crate::error::SqlConduitError;
use crate::results::Row;
use crate::types::FetchMode;

impl Connection {
    /// Run `sql` and return its first row.
    ///
    /// Returns an empty [`Row`] when the statement produced no cursor or the
    /// cursor had no rows.
    ///
    /// # Errors
    /// Returns the adapter's error from executing or fetching.
    pub fn fetch_one(&mut self, sql: &str, fetch_mode: FetchMode) -> Result<Row, SqlConduitError> {
        let Some(mut cursor) = self.query(sql)? else {
            return Ok(Row::empty());
        };
        cursor.set_fetch_mode(fetch_mode);
        Ok(cursor.fetch_array()?.unwrap_or_default())
    }

    /// Run `sql` and collect every row, in cursor order.
    ///
    /// # Errors
    /// Returns the adapter's error from executing or from any row fetch; rows
    /// read before the failure are discarded.
    pub fn fetch_all(
        &mut self,
        sql: &str,
        fetch_mode: FetchMode,
    ) -> Result<Vec<Row>, SqlConduitError> {
        let mut rows = Vec::new();
        let Some(mut cursor) = self.query(sql)? else {
            return Ok(rows);
        };
        cursor.set_fetch_mode(fetch_mode);
        while let Some(row) = cursor.fetch_array()? {
            rows.push(row);
        }
        Ok(rows)
    }
}
