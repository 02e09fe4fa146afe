//! Jukebox Core
//!
//! Platform-agnostic playlist types, payload decoding and configuration for
//! the Jukebox player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `TrackRow`
//! - **Playlist Store**: decoding of `{ "songs": [...] }` payloads into a
//!   non-empty `Playlist`
//! - **Configuration**: `PlayerConfig`, loaded from TOML and the environment
//! - **Error Handling**: unified `JukeboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use jukebox_core::PlaylistStore;
//!
//! let raw = r#"{
//!     "name": "EVE Soundtrack",
//!     "songs": [
//!         { "name": "Below the Asteroids", "link": "/music/asteroids.mp3", "duration": "4:12" }
//!     ]
//! }"#;
//!
//! let store = PlaylistStore::load(raw).unwrap();
//! assert_eq!(store.tracks().len(), 1);
//! assert_eq!(store.tracks()[0].name, "Below the Asteroids");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;
pub mod store;
pub mod types;

pub use error::{JukeboxError, Result};
pub use settings::{PlayerConfig, VolumeCurve};
pub use store::PlaylistStore;
pub use types::{Playlist, Track, TrackRow};
