use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::row::{Row, build_index};
use crate::adapter::Cursor;
use crate::error::SqlConduitError;
use crate::types::{FetchMode, RowValues};

/// Fully buffered result of a statement.
///
/// Adapters that read every row up front hand one of these back from
/// `query`; it implements [`Cursor`] by draining rows in order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Rows not yet fetched
    rows: VecDeque<Vec<RowValues>>,
    /// The number of rows affected (for DML statements)
    pub rows_affected: usize,
    /// Column names shared by all rows (to avoid duplicating in each row)
    column_names: Arc<Vec<String>>,
    column_index_cache: Arc<HashMap<String, usize>>,
    fetch_mode: FetchMode,
}

impl ResultSet {
    /// Create an empty result set for the given columns.
    #[must_use]
    pub fn new(column_names: Vec<String>) -> Self {
        let cache = build_index(&column_names);
        Self {
            rows: VecDeque::new(),
            rows_affected: 0,
            column_names: Arc::new(column_names),
            column_index_cache: Arc::new(cache),
            fetch_mode: FetchMode::default(),
        }
    }

    /// Create a result set with a known row capacity.
    #[must_use]
    pub fn with_capacity(column_names: Vec<String>, capacity: usize) -> Self {
        let mut rs = Self::new(column_names);
        rs.rows.reserve(capacity);
        rs
    }

    #[must_use]
    pub fn column_names(&self) -> &Arc<Vec<String>> {
        &self.column_names
    }

    /// Append one row of values.
    pub fn add_row_values(&mut self, row_values: Vec<RowValues>) {
        self.rows.push_back(row_values);
        self.rows_affected += 1;
    }

    /// Rows still waiting to be fetched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl Cursor for ResultSet {
    fn set_fetch_mode(&mut self, mode: FetchMode) {
        self.fetch_mode = mode;
    }

    fn fetch_array(&mut self) -> Result<Option<Row>, SqlConduitError> {
        Ok(self.rows.pop_front().map(|values| {
            Row::with_cache(
                Arc::clone(&self.column_names),
                Arc::clone(&self.column_index_cache),
                values,
                self.fetch_mode,
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_rows_in_order() {
        let mut rs = ResultSet::with_capacity(vec!["n".into()], 2);
        rs.add_row_values(vec![RowValues::Int(1)]);
        rs.add_row_values(vec![RowValues::Int(2)]);
        assert_eq!(rs.rows_affected, 2);

        rs.set_fetch_mode(FetchMode::Assoc);
        let first = rs.fetch_array().unwrap().unwrap();
        assert_eq!(first.get("n"), Some(&RowValues::Int(1)));
        assert_eq!(first.fetch_mode(), FetchMode::Assoc);
        let second = rs.fetch_array().unwrap().unwrap();
        assert_eq!(second.get("n"), Some(&RowValues::Int(2)));
        assert!(rs.fetch_array().unwrap().is_none());
        assert_eq!(rs.remaining(), 0);
    }
}
