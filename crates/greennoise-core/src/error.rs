//! Error types for the green noise core.

use thiserror::Error;

/// Result type for core operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Errors that can occur during generation, encoding, or playback.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Invalid generation parameter.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The generated buffer has zero peak magnitude and cannot be normalized.
    #[error("degenerate signal: generated buffer has zero peak magnitude")]
    DegenerateSignal,

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Audio output device unavailable or failed mid-stream.
    #[error("audio device error: {message}")]
    Device {
        /// Error message.
        message: String,
    },
}

impl NoiseError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a device error.
    pub fn device(message: impl Into<String>) -> Self {
        Self::Device {
            message: message.into(),
        }
    }
}
