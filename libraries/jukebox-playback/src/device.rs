//! Platform-agnostic playback device trait
//!
//! Abstracts the element that actually plays audio (an HTML `<audio>` element
//! in the browser, a mock in tests).

use crate::error::Result;
use std::time::Duration;

/// Playback device driven by the controller
///
/// The device reports track completion out of band: the host calls
/// `JukeboxController::on_track_ended` when the device says it has ended.
pub trait PlaybackDevice {
    /// Point the device at a new resource and start buffering it
    fn load(&mut self, link: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Check if the device is paused (true before anything has played)
    fn is_paused(&self) -> bool;

    /// Set output volume
    ///
    /// # Arguments
    /// * `fraction` - Volume in `[0, 1]`
    fn set_volume(&mut self, fraction: f64) -> Result<()>;

    /// Seek to position in the loaded track
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Get current playback position
    fn current_time(&self) -> Duration;

    /// Get loaded track duration, if the device knows it yet
    fn duration(&self) -> Option<Duration>;
}
