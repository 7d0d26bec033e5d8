//! Error types shared by the samples and the driver boundary.

use std::io;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in a sample run.
///
/// The first two variants come out of command-line resolution and are the
/// only ones a sample treats as fatal; the rest surface from a driver or
/// from row access and are logged by the harness.
#[derive(Error, Debug)]
pub enum Error {
    /// `-u` or `-p` was never supplied.
    #[error("Bad options format: -u and -p are required")]
    MissingCredential,

    /// A flag sat at the end of the command line with nothing after it.
    #[error("Option {flag} requires 1 argument")]
    MissingArgumentValue { flag: String },

    /// A connect string outside the `<host>/<service>:<mode>` grammar.
    #[error("Invalid connection string: {message}")]
    InvalidConnectString { message: String },

    /// Error reported by the database itself.
    #[error("ORA-{code:05}: {message}")]
    Database { code: u32, message: String },

    /// I/O failure inside a driver.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value refused to convert to the requested Rust type.
    #[error("Cannot convert value: {message}")]
    TypeConversion { message: String },

    /// Row access by a name the result set does not have.
    #[error("Unknown column name: {name}")]
    ColumnNotFound { name: String },

    /// Row access past the end of the select list.
    #[error("Column index {index} out of range ({count} columns)")]
    ColumnIndexOutOfBounds { index: usize, count: usize },
}

impl Error {
    /// Database error carrying a driver-reported code.
    pub fn database(code: u32, message: impl Into<String>) -> Self {
        Self::Database {
            code,
            message: message.into(),
        }
    }

    /// Conversion failure for a value that does not fit the requested type.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }

    /// Rejection of a connect string that does not parse.
    pub fn invalid_connect_string(message: impl Into<String>) -> Self {
        Self::InvalidConnectString {
            message: message.into(),
        }
    }
}
