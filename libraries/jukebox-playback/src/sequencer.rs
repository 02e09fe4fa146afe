//! Song sequencing over a playlist
//!
//! A cursor over the active playlist plus a selection strategy. Sequential
//! mode walks the tracks in order and wraps at both ends; shuffle mode
//! replaces the cursor with a uniformly random index on every `next`, which
//! may land on the current track again. `previous` always steps back by one,
//! whatever the mode.

use crate::error::{PlaybackError, Result};
use crate::types::PlaybackMode;
use jukebox_core::{Playlist, Track};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wrap-around cursor over a non-empty playlist
#[derive(Debug, Clone)]
pub struct SongSequencer {
    playlist: Playlist,

    /// Always in `[0, playlist.len())`
    cursor: usize,

    mode: PlaybackMode,

    rng: StdRng,
}

impl SongSequencer {
    /// Create a sequencer positioned on the first track
    pub fn new(playlist: Playlist) -> Result<Self> {
        Self::with_rng(playlist, StdRng::from_entropy())
    }

    /// Create a sequencer whose shuffle picks are reproducible
    pub fn with_seed(playlist: Playlist, seed: u64) -> Result<Self> {
        Self::with_rng(playlist, StdRng::seed_from_u64(seed))
    }

    fn with_rng(playlist: Playlist, rng: StdRng) -> Result<Self> {
        if playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        Ok(Self {
            playlist,
            cursor: 0,
            mode: PlaybackMode::Sequential,
            rng,
        })
    }

    /// Replace the playlist and move back to its first track
    ///
    /// An empty playlist is rejected and the current playlist, cursor and
    /// mode are kept.
    pub fn set_playlist(&mut self, playlist: Playlist) -> Result<()> {
        if playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        self.playlist = playlist;
        self.cursor = 0;
        Ok(())
    }

    /// Enable or disable shuffle for subsequent `next` calls
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.mode = PlaybackMode::from_shuffle(enabled);
    }

    /// Set the selection strategy
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
    }

    /// Current selection strategy
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Check if shuffle is enabled
    pub fn is_shuffle(&self) -> bool {
        self.mode.is_shuffle()
    }

    /// Track under the cursor
    pub fn current(&self) -> &Track {
        &self.playlist.tracks()[self.cursor]
    }

    /// Cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Active playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Number of tracks in the active playlist
    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Advance according to the mode and return the selected track
    pub fn next(&mut self) -> &Track {
        let len = self.playlist.len();
        self.cursor = match self.mode {
            PlaybackMode::Sequential => (self.cursor + 1) % len,
            PlaybackMode::Shuffle => self.rng.gen_range(0..len),
        };
        self.current()
    }

    /// Step back one track, wrapping to the last one from the first
    ///
    /// Shuffle mode does not change this.
    pub fn previous(&mut self) -> &Track {
        let len = self.playlist.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    /// Move to the first track with `link`
    ///
    /// Unknown links leave the cursor where it is.
    pub fn select(&mut self, link: &str) -> Result<&Track> {
        let index = self
            .playlist
            .position_of(link)
            .ok_or_else(|| PlaybackError::TrackNotFound(link.to_string()))?;
        self.cursor = index;
        Ok(self.current())
    }

    /// The device finished the current track; pick what plays next
    pub fn on_track_ended(&mut self) -> &Track {
        self.next()
    }
}
