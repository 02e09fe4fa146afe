//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track selection strategy used by `SongSequencer::next`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Walk the playlist in order, wrapping after the last track
    #[default]
    Sequential,

    /// Pick any track uniformly at random, the current one included
    Shuffle,
}

impl PlaybackMode {
    /// Mode for a shuffle flag
    pub fn from_shuffle(enabled: bool) -> Self {
        if enabled {
            Self::Shuffle
        } else {
            Self::Sequential
        }
    }

    /// Check if this is shuffle mode
    pub fn is_shuffle(self) -> bool {
        self == Self::Shuffle
    }
}

/// Playback state as seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Nothing handed to the device yet
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Playback progress read from the device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Current position in the track
    pub position: Duration,

    /// Track length, unknown until the device has read the metadata
    pub duration: Option<Duration>,
}

impl Progress {
    /// Position as a rounded percentage of the duration
    ///
    /// `None` while the duration is unknown or zero.
    pub fn percent(&self) -> Option<u8> {
        let duration = self.duration?.as_secs_f64();
        if duration <= 0.0 {
            return None;
        }

        let ratio = (self.position.as_secs_f64() / duration).clamp(0.0, 1.0);
        Some((ratio * 100.0).round() as u8)
    }
}
