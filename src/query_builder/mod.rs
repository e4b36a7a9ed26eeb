//! SQL text construction for INSERT/UPDATE/DELETE.
//!
//! These builders concatenate strings; they do not bind parameters. Values are
//! either emitted verbatim or, with automatic quoting, run through the
//! adapter's escape function:
//! ```rust
//! use sql_conduit::prelude::*;
//! use sql_conduit::query_builder::{Quoting, build_insert};
//!
//! let escape = |s: &str| s.replace('\'', "''");
//! let sql = build_insert(
//!     "robots",
//!     &[SqlValue::from("Astro Boy"), SqlValue::raw("NOW()")],
//!     Some(&["name", "created_at"]),
//!     &Quoting::Escaped(&escape),
//! )?;
//! assert_eq!(sql, "INSERT INTO robots (name, created_at) VALUES ('Astro Boy', NOW())");
//! # Ok::<(), SqlConduitError>(())
//! ```

mod dml;

use std::borrow::Cow;

use crate::types::SqlValue;

pub use dml::{build_delete, build_insert, build_update};

/// How values are rendered into statement text.
pub enum Quoting<'a> {
    /// Emit every value exactly as given.
    Verbatim,
    /// Escape every value; wrap literals (not raw values) in single quotes.
    Escaped(&'a dyn Fn(&str) -> String),
}

impl Quoting<'_> {
    #[must_use]
    pub fn format_value<'v>(&self, value: &'v SqlValue) -> Cow<'v, str> {
        match self {
            Quoting::Verbatim => Cow::Borrowed(value.as_str()),
            Quoting::Escaped(escape) => match value {
                SqlValue::Raw(raw) => Cow::Owned(escape(raw.value())),
                SqlValue::Literal(literal) => Cow::Owned(format!("'{}'", escape(literal))),
            },
        }
    }
}

impl std::fmt::Debug for Quoting<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quoting::Verbatim => f.write_str("Verbatim"),
            Quoting::Escaped(_) => f.write_str("Escaped(..)"),
        }
    }
}
