//! `PlaybackDevice` over an HTML audio element

use crate::{PlaybackDevice, PlaybackError, Result};
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// Playback device backed by `<audio>`
///
/// The element's `ended` event is not observed here; the page forwards it to
/// `WasmJukebox::track_ended`.
pub struct HtmlAudioDevice {
    audio: HtmlAudioElement,
}

impl HtmlAudioDevice {
    /// Wrap an audio element
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }

    /// The wrapped element
    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl PlaybackDevice for HtmlAudioDevice {
    fn load(&mut self, link: &str) -> Result<()> {
        self.audio.set_src(link);
        self.audio.load();
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // The returned promise rejects on autoplay blocks; the element stays
        // paused and the next togglePause retries.
        self.audio.play().map(|_| ()).map_err(js_error)
    }

    fn pause(&mut self) -> Result<()> {
        self.audio.pause().map_err(js_error)
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn set_volume(&mut self, fraction: f64) -> Result<()> {
        self.audio.set_volume(fraction.clamp(0.0, 1.0));
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.audio.set_current_time(position.as_secs_f64());
        Ok(())
    }

    fn current_time(&self) -> Duration {
        seconds(self.audio.current_time()).unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        // NaN until metadata loads, +Infinity for live streams
        seconds(self.audio.duration())
    }
}

fn seconds(value: f64) -> Option<Duration> {
    if value.is_finite() && value >= 0.0 {
        Some(Duration::from_secs_f64(value))
    } else {
        None
    }
}

fn js_error(err: JsValue) -> PlaybackError {
    PlaybackError::Device(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
