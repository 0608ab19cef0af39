use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when the input cookie file does not exist
pub const EXIT_INPUT_NOT_FOUND: u8 = 2;

/// Exit code used for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Core error types for cookie-filter
#[derive(Debug, Error)]
pub enum Error {
    /// Input cookie file is missing
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// I/O operation on a specific path failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or was invalid
    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    ///
    /// A missing input gets its own code so callers can tell it apart from
    /// write failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound(_) => EXIT_INPUT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
