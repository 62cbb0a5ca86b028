//! Error types for the pathkit library.
//!
//! Pure path algebra never fails, so this hierarchy only covers the
//! filesystem boundary (working directory queries and changes) and
//! configuration loading. Errors are built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be represented or was rejected.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    /// Changing the current working directory failed.
    ///
    /// The working directory is left as it was before the call.
    #[error("cannot change directory to {path}: {source}")]
    ChangeDirectory {
        /// The requested target directory.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No lexical relative path exists between two paths.
    #[error("no relative path from {base} to {path}")]
    NoRelativePath {
        /// The path a relative form was requested for.
        path: String,
        /// The base directory the result would be relative to.
        base: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error means a filesystem entry was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::io;
    ///
    /// let err = Error::ChangeDirectory {
    ///     path: "/missing".into(),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::CurrentDirectory(source)
            | Self::ChangeDirectory { source, .. }
            | Self::Io(source) => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
