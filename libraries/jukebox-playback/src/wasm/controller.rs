//! WASM-compatible JukeboxController wrapper

use super::device::HtmlAudioDevice;
use crate::{JukeboxController, PlaybackError, PlaybackState, PlayerEvent};
use js_sys::Function;
use jukebox_core::PlayerConfig;
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Progress as handed to JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressView {
    position_secs: f64,
    duration_secs: Option<f64>,
    percent: Option<u8>,
}

/// WASM-compatible jukebox
///
/// This wraps the core JukeboxController with a JavaScript-friendly API.
/// Every call flushes the queued `PlayerEvent`s to the `onEvent` callback.
#[wasm_bindgen]
pub struct WasmJukebox {
    inner: JukeboxController<HtmlAudioDevice>,

    on_event: Option<Function>,
}

#[wasm_bindgen]
impl WasmJukebox {
    /// Create a jukebox with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlAudioElement) -> Result<WasmJukebox, JsValue> {
        Self::build(audio, &PlayerConfig::default())
    }

    /// Create a jukebox from a plain config object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(audio: HtmlAudioElement, config: JsValue) -> Result<WasmJukebox, JsValue> {
        let config: PlayerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Self::build(audio, &config)
    }

    // ===== Playlist =====

    /// Load a playlist from the fetched JSON text
    #[wasm_bindgen(js_name = loadPlaylist)]
    pub fn load_playlist(&mut self, json: &str) -> Result<(), JsValue> {
        let result = self.inner.load_playlist(json);
        self.finish(result)
    }

    /// Numbered rows for the track table (empty before a playlist loads)
    pub fn tracks(&self) -> JsValue {
        let rows = self
            .inner
            .playlist()
            .map(jukebox_core::Playlist::rows)
            .unwrap_or_default();

        serde_wasm_bindgen::to_value(&rows).unwrap_or(JsValue::NULL)
    }

    /// Track under the cursor, or null
    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> JsValue {
        self.inner
            .current_track()
            .and_then(|track| serde_wasm_bindgen::to_value(track).ok())
            .unwrap_or(JsValue::NULL)
    }

    // ===== Playback Control =====

    /// Pause if playing, play otherwise
    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> Result<(), JsValue> {
        let result = self.inner.toggle_pause();
        self.finish(result)
    }

    /// Skip to next track
    pub fn next(&mut self) -> Result<(), JsValue> {
        let result = self.inner.next();
        self.finish(result)
    }

    /// Go to previous track
    pub fn previous(&mut self) -> Result<(), JsValue> {
        let result = self.inner.previous();
        self.finish(result)
    }

    /// Play the track with this link (table row click)
    #[wasm_bindgen(js_name = selectTrack)]
    pub fn select_track(&mut self, link: &str) -> Result<(), JsValue> {
        let result = self.inner.select_track(link);
        self.finish(result)
    }

    /// Load the track with this link without playing it
    #[wasm_bindgen(js_name = loadTrack)]
    pub fn load_track(&mut self, link: &str) -> Result<(), JsValue> {
        let result = self.inner.load_track(link);
        self.finish(result)
    }

    /// Forward the audio element's `ended` event
    ///
    /// Returns the track that is now playing.
    #[wasm_bindgen(js_name = trackEnded)]
    pub fn track_ended(&mut self) -> Result<JsValue, JsValue> {
        let result = self.inner.on_track_ended();
        let track = self.finish(result)?;
        serde_wasm_bindgen::to_value(&track)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Run a space-separated control message (`"play /music/a.mp3"`)
    #[wasm_bindgen(js_name = handleCommand)]
    pub fn handle_command(&mut self, msg: &str) -> Result<(), JsValue> {
        // The controller already queued an Error event for failures
        let result = self.inner.handle_message(msg);
        self.flush_events();
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // ===== Shuffle =====

    /// Flip shuffle on or off
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.flush_events();
    }

    /// Check if shuffle is enabled
    #[wasm_bindgen(js_name = isShuffle)]
    pub fn is_shuffle(&self) -> bool {
        self.inner.is_shuffle()
    }

    // ===== Volume Control =====

    /// Set volume (0-100); out-of-range numbers are clamped
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f64) -> Result<(), JsValue> {
        let result = self.inner.set_volume_percent(level);
        self.finish(result)
    }

    /// Set volume from a `[0, 1]` range input
    #[wasm_bindgen(js_name = setVolumeFraction)]
    pub fn set_volume_fraction(&mut self, fraction: f64) -> Result<(), JsValue> {
        let result = self.inner.set_volume_fraction(fraction);
        self.finish(result)
    }

    /// Toggle mute
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) -> Result<(), JsValue> {
        let result = self.inner.toggle_mute();
        self.finish(result)
    }

    /// Get current volume (0-100)
    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> u8 {
        self.inner.volume().level()
    }

    // ===== Seeking =====

    /// Seek to position in seconds
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, position_secs: f64) -> Result<(), JsValue> {
        if !position_secs.is_finite() || position_secs < 0.0 {
            return Err(JsValue::from_str("Invalid seek position"));
        }
        let result = self.inner.seek_to(Duration::from_secs_f64(position_secs));
        self.finish(result)
    }

    /// Seek to position by percentage (0.0 - 1.0)
    #[wasm_bindgen(js_name = seekToPercent)]
    pub fn seek_to_percent(&mut self, percent: f32) -> Result<(), JsValue> {
        let result = self.inner.seek_to_percent(percent);
        self.finish(result)
    }

    // ===== State Queries =====

    /// Get current playback state as string
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        match self.inner.state() {
            PlaybackState::Stopped => "stopped".to_string(),
            PlaybackState::Playing => "playing".to_string(),
            PlaybackState::Paused => "paused".to_string(),
        }
    }

    /// Current position, duration and percentage
    pub fn progress(&self) -> JsValue {
        let progress = self.inner.progress();
        let view = ProgressView {
            position_secs: progress.position.as_secs_f64(),
            duration_secs: progress.duration.map(|d| d.as_secs_f64()),
            percent: progress.percent(),
        };
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }

    /// Emit a progress event; call every `progressIntervalMs`
    #[wasm_bindgen(js_name = emitProgress)]
    pub fn emit_progress(&mut self) {
        self.inner.emit_progress();
        self.flush_events();
    }

    /// Suggested progress polling interval
    #[wasm_bindgen(js_name = progressIntervalMs)]
    pub fn progress_interval_ms(&self) -> f64 {
        self.inner.progress_interval().as_millis() as f64
    }

    // ===== Event Listeners =====

    /// Register the event callback
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }
}

impl WasmJukebox {
    fn build(audio: HtmlAudioElement, config: &PlayerConfig) -> Result<WasmJukebox, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let inner = JukeboxController::new(HtmlAudioDevice::new(audio), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner,
            on_event: None,
        })
    }

    fn finish<T>(&mut self, result: crate::Result<T>) -> Result<T, JsValue> {
        self.flush_events();
        result.map_err(|e| self.handle_error(&e))
    }

    fn flush_events(&mut self) {
        let events = self.inner.drain_events();
        for event in &events {
            self.emit(event);
        }
    }

    fn emit(&self, event: &PlayerEvent) {
        if let Some(ref cb) = self.on_event {
            if let Ok(js_event) = serde_wasm_bindgen::to_value(event) {
                cb.call1(&JsValue::NULL, &js_event).ok();
            }
        }
    }

    fn handle_error(&self, error: &PlaybackError) -> JsValue {
        let message = error.to_string();
        web_sys::console::warn_1(&JsValue::from_str(&message));

        self.emit(&PlayerEvent::Error {
            message: message.clone(),
        });

        JsValue::from_str(&message)
    }
}
