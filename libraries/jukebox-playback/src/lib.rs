//! Jukebox - Playback Control
//!
//! Platform-agnostic playlist sequencing and playback control for Jukebox.
//!
//! This crate provides:
//! - Song sequencing over a playlist (sequential with wrap-around, or shuffle)
//! - Volume control (percent level, mute, linear or perceptual curve)
//! - A text control-message bridge (`play <link>`, `volume 40`, ...)
//! - Progress reporting and seeking
//! - Events for UI synchronization
//!
//! # Architecture
//!
//! `jukebox-playback` never touches the DOM or an audio API directly. The
//! element that plays audio is abstracted by the `PlaybackDevice` trait; with
//! the `wasm` feature, `HtmlAudioDevice` implements it over `<audio>` and
//! `WasmJukebox` exposes the control surface to JavaScript.
//!
//! # Example: Sequencing
//!
//! ```rust
//! use jukebox_core::{Playlist, Track};
//! use jukebox_playback::SongSequencer;
//!
//! let playlist = Playlist::new(
//!     "Letters",
//!     vec![
//!         Track::new("A", "a.mp3", "1:00"),
//!         Track::new("B", "b.mp3", "2:00"),
//!         Track::new("C", "c.mp3", "3:00"),
//!     ],
//! );
//!
//! let mut sequencer = SongSequencer::new(playlist).unwrap();
//! assert_eq!(sequencer.next().name, "B");
//! assert_eq!(sequencer.next().name, "C");
//! assert_eq!(sequencer.next().name, "A");
//! assert_eq!(sequencer.previous().name, "C");
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use jukebox_core::PlayerConfig;
//! use jukebox_playback::{JukeboxController, PlaybackDevice, Result};
//! use std::time::Duration;
//!
//! // Implement PlaybackDevice for your platform
//! struct MyAudioElement {
//!     // ... platform-specific player
//! }
//!
//! impl PlaybackDevice for MyAudioElement {
//!     fn load(&mut self, link: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn is_paused(&self) -> bool { true }
//!     fn set_volume(&mut self, fraction: f64) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, position: Duration) -> Result<()> { Ok(()) }
//!     fn current_time(&self) -> Duration { Duration::ZERO }
//!     fn duration(&self) -> Option<Duration> { None }
//! }
//!
//! let mut jukebox = JukeboxController::new(MyAudioElement {}, &PlayerConfig::default()).unwrap();
//! jukebox.load_playlist(r#"{ "songs": [ { "name": "A", "link": "a.mp3", "duration": "1:00" } ] }"#).unwrap();
//! jukebox.handle_message("togglePause").unwrap();
//!
//! // Forward the element's "ended" notification
//! jukebox.on_track_ended().unwrap();
//!
//! for event in jukebox.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

mod command;
mod controller;
mod device;
mod error;
mod events;
mod sequencer;
pub mod types;
mod volume;

pub mod wasm;

// Public exports
pub use command::ControlCommand;
pub use controller::JukeboxController;
pub use device::PlaybackDevice;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use sequencer::SongSequencer;
pub use types::{PlaybackMode, PlaybackState, Progress};
pub use volume::Volume;
