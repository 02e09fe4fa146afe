//! Player events
//!
//! Queued by the controller and drained by the UI to stay in sync:
//! - Playlist loads
//! - Track changes (skip, selection, track end)
//! - State, volume and shuffle changes
//! - Progress updates (polled by the host)

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A playlist replaced the previous one
    PlaylistLoaded {
        /// Playlist name
        name: String,
        /// Number of tracks
        length: usize,
    },

    /// A different track was handed to the device
    TrackChanged {
        /// Position in the playlist
        index: usize,
        /// Track name
        name: String,
        /// Track link
        link: String,
    },

    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle was switched on or off
    ShuffleChanged {
        /// New shuffle flag
        enabled: bool,
    },

    /// The UI should swap its background image or video
    BackgroundChanged {
        /// Path of the new background
        path: String,
    },

    /// Position update
    Progress {
        /// Current playback position
        position_ms: u64,
        /// Total track duration, if known
        duration_ms: Option<u64>,
        /// Rounded percentage, if the duration is known
        percent: Option<u8>,
    },

    /// A control operation failed
    Error {
        /// Error message
        message: String,
    },
}
