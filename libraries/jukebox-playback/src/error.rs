//! Error types for playback control

use jukebox_core::JukeboxError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// No playlist has been loaded yet
    #[error("No playlist loaded")]
    NoPlaylist,

    /// Playlist has zero tracks
    #[error("Playlist has no tracks")]
    EmptyPlaylist,

    /// No track in the playlist has this link
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Control message could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Volume percent that is not a number
    #[error("Invalid volume: {0}")]
    InvalidVolume(f64),

    /// Invalid seek position
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(std::time::Duration),

    /// Playback device error
    #[error("Playback device error: {0}")]
    Device(String),

    /// Playlist decoding or configuration error
    #[error(transparent)]
    Core(#[from] JukeboxError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
