//! Error types for the invitation core

use thiserror::Error;

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum InviteError {
    /// The platform refused to start audio playback (e.g. autoplay policy).
    ///
    /// Only ever produced by a playback backend; the audio controller logs
    /// it and never hands it to callers.
    #[error("Playback start rejected: {0}")]
    PlaybackRejected(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file contained unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// An editor operation referenced a row that does not exist
    #[error("Index {index} out of range for {what} (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type alias using InviteError
pub type InviteResult<T> = Result<T, InviteError>;
