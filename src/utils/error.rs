//! Error handling for texfrag rendering
//!
//! Rendering itself is total over well-formed input; the only failures are
//! lookups into rows that lack a requested column, and the surrounding
//! loading/configuration steps.

use thiserror::Error;

/// Render and load error type
#[derive(Error, Debug)]
pub enum Error {
    /// A row has no value for a column named in the column list
    #[error("row {row} has no column '{column}'")]
    MissingColumn { column: String, row: usize },

    /// The explicit column list was empty
    #[error("at least one column is required to render a table")]
    EmptyColumns,

    /// Tabular input could not be parsed
    #[error("invalid table data: {message}")]
    Data { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for texfrag operations
pub type Result<T> = std::result::Result<T, Error>;

// Convenience constructors for errors
impl Error {
    pub fn missing_column(column: impl Into<String>, row: usize) -> Self {
        Error::MissingColumn {
            column: column.into(),
            row,
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        Error::Data {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::data(err.to_string())
    }
}

#[cfg(feature = "data-loading")]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::config(err.to_string())
    }
}
