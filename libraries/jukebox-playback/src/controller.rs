//! Jukebox controller - control surface over sequencer and device
//!
//! Owns the playback device, the song sequencer (once a playlist exists),
//! volume and the pending event queue. The host calls in from UI handlers
//! and from the device's "ended" notification; every call runs to
//! completion before the next one.

use crate::{
    command::ControlCommand,
    device::PlaybackDevice,
    error::{PlaybackError, Result},
    events::PlayerEvent,
    sequencer::SongSequencer,
    types::{PlaybackMode, PlaybackState, Progress},
    volume::Volume,
};
use jukebox_core::{PlayerConfig, Playlist, PlaylistStore, Track};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Playback controller
///
/// Sequencing operations (`next`, `previous`, `select_track`, `load_track`,
/// `toggle_pause`, `on_track_ended`, seeking) fail with
/// `PlaybackError::NoPlaylist` until a playlist has been loaded. Volume and
/// shuffle can be set at any time.
pub struct JukeboxController<D: PlaybackDevice> {
    device: D,

    // None until the first playlist arrives
    sequencer: Option<SongSequencer>,

    // Applied to the sequencer when it is created
    mode: PlaybackMode,

    // Fixed shuffle seed (tests); entropy otherwise
    seed: Option<u64>,

    volume: Volume,

    state: PlaybackState,

    // Link currently handed to the device
    loaded: Option<String>,

    progress_interval: Duration,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<D: PlaybackDevice> JukeboxController<D> {
    /// Create a controller and apply the configured volume to the device
    pub fn new(device: D, config: &PlayerConfig) -> Result<Self> {
        Self::build(device, config, None)
    }

    /// Create a controller whose shuffle picks are reproducible
    pub fn with_seed(device: D, config: &PlayerConfig, seed: u64) -> Result<Self> {
        Self::build(device, config, Some(seed))
    }

    fn build(mut device: D, config: &PlayerConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let volume = Volume::new(config.initial_volume, config.volume_curve);
        device.set_volume(volume.fraction())?;

        Ok(Self {
            device,
            sequencer: None,
            mode: PlaybackMode::from_shuffle(config.shuffle),
            seed,
            volume,
            state: PlaybackState::Stopped,
            loaded: None,
            progress_interval: Duration::from_millis(config.progress_interval_ms),
            pending_events: Vec::new(),
        })
    }

    // ===== Playlist =====

    /// Decode a playlist payload and make it the active playlist
    ///
    /// On failure the previous playlist (if any) stays active.
    pub fn load_playlist(&mut self, raw: &str) -> Result<()> {
        let store = PlaylistStore::load(raw)?;
        self.set_playlist(store.into_playlist())
    }

    /// Make `playlist` the active playlist, positioned on its first track
    ///
    /// Does not touch the device: whatever is playing keeps playing until
    /// the next track change.
    pub fn set_playlist(&mut self, playlist: Playlist) -> Result<()> {
        let name = playlist.name.clone();
        let length = playlist.len();

        match self.sequencer.as_mut() {
            Some(sequencer) => sequencer.set_playlist(playlist)?,
            None => {
                let mut sequencer = match self.seed {
                    Some(seed) => SongSequencer::with_seed(playlist, seed)?,
                    None => SongSequencer::new(playlist)?,
                };
                sequencer.set_mode(self.mode);
                self.sequencer = Some(sequencer);
            }
        }

        info!(name = %name, tracks = length, "Playlist loaded");
        self.pending_events
            .push(PlayerEvent::PlaylistLoaded { name, length });
        Ok(())
    }

    // ===== Playback Control =====

    /// Pause if playing, play otherwise
    ///
    /// Before any track has been handed to the device this loads and plays
    /// the track under the cursor.
    pub fn toggle_pause(&mut self) -> Result<()> {
        self.sequencer()?;

        if self.loaded.is_none() {
            return self.play_current();
        }

        if self.device.is_paused() {
            self.device.play()?;
            self.set_state(PlaybackState::Playing);
        } else {
            self.device.pause()?;
            self.set_state(PlaybackState::Paused);
        }
        Ok(())
    }

    /// Skip to next track and play it
    pub fn next(&mut self) -> Result<()> {
        self.sequencer_mut()?.next();
        self.play_current()
    }

    /// Go back one track and play it
    pub fn previous(&mut self) -> Result<()> {
        self.sequencer_mut()?.previous();
        self.play_current()
    }

    /// Play the first track with `link`
    pub fn select_track(&mut self, link: &str) -> Result<()> {
        self.sequencer_mut()?.select(link)?;
        self.play_current()
    }

    /// Load the first track with `link` without starting it
    pub fn load_track(&mut self, link: &str) -> Result<()> {
        self.sequencer_mut()?.select(link)?;
        self.load_current()?;
        self.set_state(PlaybackState::Paused);
        Ok(())
    }

    /// The device finished its track: advance and play what comes next
    ///
    /// Returns the track that is now playing.
    pub fn on_track_ended(&mut self) -> Result<Track> {
        let track = self.sequencer_mut()?.on_track_ended().clone();
        debug!(link = %track.link, "Track ended, advancing");
        self.play_current()?;
        Ok(track)
    }

    // ===== Shuffle =====

    /// Flip shuffle on or off
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.mode.is_shuffle());
    }

    /// Enable or disable shuffle for subsequent skips
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.mode = PlaybackMode::from_shuffle(enabled);
        if let Some(sequencer) = self.sequencer.as_mut() {
            sequencer.set_mode(self.mode);
        }

        debug!(enabled, "Shuffle changed");
        self.pending_events
            .push(PlayerEvent::ShuffleChanged { enabled });
    }

    /// Check if shuffle is enabled
    pub fn is_shuffle(&self) -> bool {
        self.mode.is_shuffle()
    }

    // ===== Volume Control =====

    /// Set volume (0-100)
    pub fn set_volume(&mut self, level: u8) -> Result<()> {
        self.volume.set_level(level);
        self.apply_volume()
    }

    /// Set volume from an untyped percent, rounded and clamped to 0-100
    pub fn set_volume_percent(&mut self, percent: f64) -> Result<()> {
        let Some(level) = Volume::level_from_percent(percent) else {
            return Err(PlaybackError::InvalidVolume(percent));
        };
        self.set_volume(level)
    }

    /// Set volume from a `[0, 1]` slider value
    pub fn set_volume_fraction(&mut self, fraction: f64) -> Result<()> {
        self.volume.set_fraction(fraction);
        self.apply_volume()
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.volume.toggle_mute();
        self.apply_volume()
    }

    /// Get current volume
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    // ===== Seeking =====

    /// Seek to position in the loaded track
    pub fn seek_to(&mut self, position: Duration) -> Result<()> {
        self.require_loaded()?;

        if let Some(duration) = self.device.duration() {
            if position > duration {
                return Err(PlaybackError::InvalidSeekPosition(position));
            }
        }

        self.device.seek(position)
    }

    /// Seek to position by percentage (0.0 - 1.0)
    pub fn seek_to_percent(&mut self, percent: f32) -> Result<()> {
        self.require_loaded()?;

        let duration = self
            .device
            .duration()
            .ok_or_else(|| PlaybackError::Device("track duration not known yet".to_string()))?;
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };

        self.device.seek(duration.mul_f32(percent))
    }

    // ===== Progress =====

    /// Read position and duration from the device
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.device.current_time(),
            duration: self.device.duration(),
        }
    }

    /// Queue a progress event; the host calls this every `progress_interval`
    pub fn emit_progress(&mut self) {
        let progress = self.progress();
        self.pending_events.push(PlayerEvent::Progress {
            position_ms: progress.position.as_millis() as u64,
            duration_ms: progress.duration.map(|d| d.as_millis() as u64),
            percent: progress.percent(),
        });
    }

    /// How often the host should poll progress
    pub fn progress_interval(&self) -> Duration {
        self.progress_interval
    }

    // ===== Control Messages =====

    /// Run a parsed control message
    ///
    /// Failures are also queued as `PlayerEvent::Error`, since the message
    /// bridge has no return channel.
    pub fn handle(&mut self, command: ControlCommand) -> Result<()> {
        let result = match &command {
            ControlCommand::Load(link) => self.load_track(link),
            ControlCommand::Play(link) => self.select_track(link),
            ControlCommand::TogglePause => self.toggle_pause(),
            ControlCommand::Volume(level) => self.set_volume(*level),
            ControlCommand::Background(path) => {
                self.pending_events
                    .push(PlayerEvent::BackgroundChanged { path: path.clone() });
                Ok(())
            }
            ControlCommand::Next => self.next(),
            ControlCommand::Previous => self.previous(),
            ControlCommand::ToggleShuffle => {
                self.toggle_shuffle();
                Ok(())
            }
        };

        if let Err(ref e) = result {
            warn!(command = %command, error = %e, "Control command failed");
            self.pending_events.push(PlayerEvent::Error {
                message: e.to_string(),
            });
        }
        result
    }

    /// Parse and run a control message
    pub fn handle_message(&mut self, msg: &str) -> Result<()> {
        match ControlCommand::parse(msg) {
            Ok(command) => self.handle(command),
            Err(e) => {
                warn!(msg, error = %e, "Rejected control message");
                self.pending_events.push(PlayerEvent::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Track under the cursor, if a playlist is loaded
    pub fn current_track(&self) -> Option<&Track> {
        self.sequencer.as_ref().map(SongSequencer::current)
    }

    /// Active playlist, if any
    pub fn playlist(&self) -> Option<&Playlist> {
        self.sequencer.as_ref().map(SongSequencer::playlist)
    }

    /// Link currently loaded into the device
    pub fn loaded_link(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Playback device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Playback device (mutable)
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn sequencer(&self) -> Result<&SongSequencer> {
        self.sequencer.as_ref().ok_or(PlaybackError::NoPlaylist)
    }

    fn sequencer_mut(&mut self) -> Result<&mut SongSequencer> {
        self.sequencer.as_mut().ok_or(PlaybackError::NoPlaylist)
    }

    fn require_loaded(&self) -> Result<()> {
        self.sequencer()?;
        if self.loaded.is_none() {
            return Err(PlaybackError::Device("no track loaded".to_string()));
        }
        Ok(())
    }

    /// Hand the track under the cursor to the device
    fn load_current(&mut self) -> Result<()> {
        let sequencer = self.sequencer()?;
        let index = sequencer.cursor();
        let track = sequencer.current().clone();

        self.device.load(&track.link)?;
        debug!(index, link = %track.link, "Loaded track");

        self.loaded = Some(track.link.clone());
        self.pending_events.push(PlayerEvent::TrackChanged {
            index,
            name: track.name,
            link: track.link,
        });
        Ok(())
    }

    fn play_current(&mut self) -> Result<()> {
        self.load_current()?;

        // A fresh load leaves the device paused on the new track
        if let Err(e) = self.device.play() {
            self.set_state(PlaybackState::Paused);
            return Err(e);
        }
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn apply_volume(&mut self) -> Result<()> {
        self.device.set_volume(self.volume.fraction())?;
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
        Ok(())
    }
}
