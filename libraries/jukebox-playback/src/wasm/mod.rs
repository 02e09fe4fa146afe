//! WASM bindings for jukebox-playback
//!
//! This module provides WebAssembly bindings for the JukeboxController,
//! driving an HTML `<audio>` element from the browser. Fetching the playlist
//! and rendering the track table stay in JavaScript.

#[cfg(feature = "wasm")]
pub mod device;

#[cfg(feature = "wasm")]
pub mod controller;

#[cfg(feature = "wasm")]
pub use controller::WasmJukebox;

#[cfg(feature = "wasm")]
pub use device::HtmlAudioDevice;
