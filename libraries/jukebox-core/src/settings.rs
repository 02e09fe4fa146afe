//! Player configuration

use crate::error::{JukeboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix (`JUKEBOX_INITIAL_VOLUME=40`, ...)
pub const ENV_PREFIX: &str = "JUKEBOX";

/// How a volume percent maps onto the device's `[0, 1]` volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeCurve {
    /// `level / 100`, as a plain HTML volume slider does
    #[default]
    Linear,

    /// 0-100% spread over -60 dB..0 dB
    Perceptual,
}

/// Player configuration
///
/// Every field has a default, so an empty file (or none) is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Where the host fetches the playlist payload from
    #[serde(default = "default_playlist_url")]
    pub playlist_url: String,

    /// Volume percent applied when the player starts
    #[serde(default = "default_initial_volume")]
    pub initial_volume: u8,

    /// Start in shuffle mode
    #[serde(default)]
    pub shuffle: bool,

    /// How often the host should poll progress
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    /// Mapping from volume percent to device volume
    #[serde(default)]
    pub volume_curve: VolumeCurve,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playlist_url: default_playlist_url(),
            initial_volume: default_initial_volume(),
            shuffle: false,
            progress_interval_ms: default_progress_interval_ms(),
            volume_curve: VolumeCurve::default(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables prefixed with `JUKEBOX_` override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(JukeboxError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path));
        }

        let env = config::Environment::with_prefix(ENV_PREFIX);
        settings = settings.add_source(env.try_parsing(true));

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(?config, "Loaded player configuration");
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.initial_volume > 100 {
            return Err(JukeboxError::config(format!(
                "initial_volume must be 0-100, got {}",
                self.initial_volume
            )));
        }

        if self.progress_interval_ms == 0 {
            return Err(JukeboxError::config(
                "progress_interval_ms must be greater than zero",
            ));
        }

        if self.playlist_url.trim().is_empty() {
            return Err(JukeboxError::config("playlist_url is required"));
        }

        Ok(())
    }
}

// Default values
fn default_playlist_url() -> String {
    "/Jukebox/playlists/EVE_Soundtrack.json".to_string()
}

fn default_initial_volume() -> u8 {
    100
}

fn default_progress_interval_ms() -> u64 {
    1000
}
