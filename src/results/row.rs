use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{FetchMode, RowValues};

/// A row handed back by a cursor.
///
/// The fetch mode the row was produced under decides how its columns can be
/// addressed: `Assoc` rows answer only [`Row::get`], `Num` rows answer only
/// [`Row::get_by_index`], `Both` rows answer both.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// The column names for this row (shared across all rows of a cursor)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row
    pub values: Vec<RowValues>,
    mode: FetchMode,
    // Shared name -> position lookup, built once per cursor
    #[doc(hidden)]
    pub(crate) column_index_cache: Arc<HashMap<String, usize>>,
}

impl Row {
    /// Create a row, building the column lookup from `column_names`.
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>, mode: FetchMode) -> Self {
        let cache = Arc::new(build_index(&column_names));
        Self {
            column_names,
            values,
            mode,
            column_index_cache: cache,
        }
    }

    pub(crate) fn with_cache(
        column_names: Arc<Vec<String>>,
        column_index_cache: Arc<HashMap<String, usize>>,
        values: Vec<RowValues>,
        mode: FetchMode,
    ) -> Self {
        Self {
            column_names,
            values,
            mode,
            column_index_cache,
        }
    }

    /// The row returned when a statement produced no cursor.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn fetch_mode(&self) -> FetchMode {
        self.mode
    }

    /// Position of a column, or `None` if unknown or the row is index-only.
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        if !self.mode.by_name() {
            return None;
        }
        if let Some(&idx) = self.column_index_cache.get(column_name) {
            return Some(idx);
        }
        self.column_names.iter().position(|col| col == column_name)
    }

    /// Value by column name.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Value by column position.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        if !self.mode.by_index() {
            return None;
        }
        self.values.get(index)
    }
}

pub(crate) fn build_index(column_names: &[String]) -> HashMap<String, usize> {
    column_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect()
}
