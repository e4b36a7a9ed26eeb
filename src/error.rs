use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlConduitError {
    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to insert into {table} without data")]
    EmptyValues { table: String },

    #[error("The number of values to update ({values}) is not the same as fields ({fields})")]
    FieldValueCountMismatch { fields: usize, values: usize },

    #[error("There is not an active transaction on the connection")]
    NoActiveTransaction,

    #[error("A valid adapter name is required")]
    InvalidAdapterName,

    #[error("Invalid connection options: {0}")]
    InvalidOptions(String),

    #[error("Database adapter {0} was not found")]
    AdapterNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("Other database error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for SqlConduitError {
    fn from(err: serde_json::Error) -> Self {
        SqlConduitError::ConfigError(format!("descriptor is not valid JSON: {err}"))
    }
}
