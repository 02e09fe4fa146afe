/// Core error types for Jukebox
use thiserror::Error;

/// Result type alias using `JukeboxError`
pub type Result<T> = std::result::Result<T, JukeboxError>;

/// Core error type for Jukebox
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JukeboxError {
    /// Playlist payload is malformed, lacks `songs`, or has no tracks
    #[error("Failed to decode playlist: {0}")]
    Decode(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl JukeboxError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for JukeboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for JukeboxError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
