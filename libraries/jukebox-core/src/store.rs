//! Playlist store
//!
//! Decodes a playlist payload of the shape
//! `{ "name": "...", "songs": [ { "name", "link", "duration" }, ... ] }`
//! into a `Playlist` and guarantees it holds at least one track. Fetching the
//! payload is the host's job; decoding is a pure transform.

use crate::error::{JukeboxError, Result};
use crate::types::{Playlist, Track};
use tracing::{debug, warn};

/// Decoded, non-empty playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistStore {
    playlist: Playlist,
}

impl PlaylistStore {
    /// Decode a playlist from JSON text
    pub fn load(raw: &str) -> Result<Self> {
        let playlist: Playlist = serde_json::from_str(raw).map_err(|e| {
            warn!(error = %e, "Rejected playlist payload");
            JukeboxError::from(e)
        })?;
        Self::from_playlist(playlist)
    }

    /// Decode a playlist from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let playlist: Playlist = serde_json::from_value(value)?;
        Self::from_playlist(playlist)
    }

    /// Wrap an existing playlist, rejecting it if it has no tracks
    pub fn from_playlist(playlist: Playlist) -> Result<Self> {
        if playlist.is_empty() {
            warn!(name = %playlist.name, "Rejected playlist without songs");
            return Err(JukeboxError::decode("playlist contains no songs"));
        }

        debug!(name = %playlist.name, tracks = playlist.len(), "Decoded playlist");
        Ok(Self { playlist })
    }

    /// Tracks in playback order (never empty)
    pub fn tracks(&self) -> &[Track] {
        self.playlist.tracks()
    }

    /// The decoded playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Take the decoded playlist
    pub fn into_playlist(self) -> Playlist {
        self.playlist
    }
}
