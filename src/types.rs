use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::SqlConduitError;

/// One column value of a fetched [`crate::Row`].
///
/// Adapters map driver values onto these variants, which mirror SQLite's
/// storage classes.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    Null,
}

impl RowValues {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        match self {
            RowValues::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Floats as-is; integers widen so `SUM`/`AVG` columns read uniformly.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            RowValues::Float(value) => Some(*value),
            #[allow(clippy::cast_precision_loss)]
            RowValues::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RowValues::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            RowValues::Blob(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A pre-formatted SQL fragment that the DML builders emit without quoting.
///
/// ```rust
/// use sql_conduit::prelude::*;
///
/// let now = RawValue::new("NOW()");
/// assert_eq!(now.value(), "NOW()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawValue(String);

impl RawValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value handed to `insert`/`update`.
///
/// `Literal` values are escaped and single-quoted when automatic quoting is on;
/// `Raw` values are escaped but never quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlValue {
    Literal(String),
    Raw(RawValue),
}

impl SqlValue {
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(RawValue::new(value))
    }

    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// The text carried by the value, before any escaping.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SqlValue::Literal(s) => s,
            SqlValue::Raw(raw) => raw.value(),
        }
    }
}

impl From<RawValue> for SqlValue {
    fn from(raw: RawValue) -> Self {
        SqlValue::Raw(raw)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Literal(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Literal(value.to_owned())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Literal(value.to_string())
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Literal(value.to_string())
    }
}

/// Shape of the rows a cursor hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FetchMode {
    /// Columns addressable by name only
    Assoc,
    /// Columns addressable by name and by position
    #[default]
    Both,
    /// Columns addressable by position only
    Num,
}

impl FetchMode {
    #[must_use]
    pub fn by_name(self) -> bool {
        matches!(self, FetchMode::Assoc | FetchMode::Both)
    }

    #[must_use]
    pub fn by_index(self) -> bool {
        matches!(self, FetchMode::Num | FetchMode::Both)
    }
}

impl FromStr for FetchMode {
    type Err = SqlConduitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <FetchMode as ValueEnum>::from_str(s, true)
            .map_err(|_| SqlConduitError::InvalidArgument(format!("unknown fetch mode '{s}'")))
    }
}
