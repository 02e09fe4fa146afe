//! Volume control
//!
//! Volume is held as a percent level (0-100) with a separate mute flag, and
//! converted to the `[0, 1]` fraction a media element expects. The linear
//! curve is a plain slider; the perceptual curve maps 0-100% onto
//! -60 dB..0 dB.

use jukebox_core::VolumeCurve;

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,

    curve: VolumeCurve,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    /// * `curve` - Percent to device-volume mapping
    pub fn new(level: u8, curve: VolumeCurve) -> Self {
        Self {
            level: level.min(100),
            muted: false,
            curve,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Round and clamp a loosely typed percent (JS number, message text)
    ///
    /// Returns `None` for NaN and infinities.
    pub fn level_from_percent(percent: f64) -> Option<u8> {
        if !percent.is_finite() {
            return None;
        }
        Some(percent.round().clamp(0.0, 100.0) as u8)
    }

    /// Set volume from a `[0, 1]` slider value
    ///
    /// Out-of-range values are clamped, NaN counts as silence.
    pub fn set_fraction(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.level = (fraction * 100.0).round() as u8;
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Device volume in `[0, 1]`
    ///
    /// Returns 0.0 if muted.
    pub fn fraction(&self) -> f64 {
        if self.muted || self.level == 0 {
            return 0.0;
        }

        match self.curve {
            VolumeCurve::Linear => f64::from(self.level) / 100.0,
            VolumeCurve::Perceptual => {
                // Map 0-100% to -60 dB to 0 dB
                let db = (f64::from(self.level) - 100.0) * 0.6;
                10.0_f64.powf(db / 20.0)
            }
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(100, VolumeCurve::Linear)
    }
}
