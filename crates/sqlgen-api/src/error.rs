//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sqlgen plugin surface
///
/// The taxonomy is deliberately small: generation hooks are expected to
/// succeed in normal use, and configuration problems surface through the
/// [`SqlMapPlugin::validate`](crate::ports::SqlMapPlugin::validate)
/// warnings channel rather than as errors. The type exists so the plugin
/// contract can express fallible hooks and so extension units share one
/// error surface.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Internal generator error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
