use std::io;
use std::time::Duration;
use thiserror::Error;

/// Custom error type for barstat
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' did not finish within {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("'{program}' exited with status {status}")]
    Failed { program: String, status: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for barstat
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatusError::Config(msg.into())
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        StatusError::Serialization(msg.into())
    }

    pub fn spawn<S: Into<String>>(program: S, source: io::Error) -> Self {
        StatusError::Spawn {
            program: program.into(),
            source,
        }
    }
}
