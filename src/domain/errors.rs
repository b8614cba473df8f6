// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the conversion crate.
//!
//! Every failure is an I/O condition on one of the two files involved in a
//! conversion. All errors use `thiserror` for proper error handling and conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for conversion operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envyaml::domain::errors::ConvertError;
/// use std::path::PathBuf;
///
/// fn read_env_file() -> Result<String, ConvertError> {
///     Err(ConvertError::SourceNotFound {
///         path: PathBuf::from(".env.local"),
///     })
/// }
///
/// assert!(read_env_file().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The environment file does not exist.
    #[error("Environment file not found: {}", .path.display())]
    SourceNotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The environment file exists but could not be read.
    #[error("Failed to read environment file {}: {source}", .path.display())]
    SourceRead {
        /// The path being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The YAML output could not be written.
    #[error("Failed to write YAML file {}: {source}", .path.display())]
    DestinationWrite {
        /// The path being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Classifies an I/O error raised while reading the environment file.
    ///
    /// A `NotFound` error becomes [`ConvertError::SourceNotFound`], everything
    /// else is wrapped in [`ConvertError::SourceRead`].
    pub fn from_read_error(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            ConvertError::SourceNotFound { path }
        } else {
            ConvertError::SourceRead { path, source: err }
        }
    }

    /// Wraps an I/O error raised while writing the YAML file.
    pub fn from_write_error(path: impl Into<PathBuf>, err: io::Error) -> Self {
        ConvertError::DestinationWrite {
            path: path.into(),
            source: err,
        }
    }

    /// Returns the path of the file the failure relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::SourceNotFound { path }
            | ConvertError::SourceRead { path, .. }
            | ConvertError::DestinationWrite { path, .. } => path,
        }
    }
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
