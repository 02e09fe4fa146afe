//! Control messages
//!
//! The UI talks to the player through space-separated text messages such as
//! `play /music/theme.mp3` or `volume 40`. Only the first parameter is read;
//! anything after it is ignored.

use crate::error::{PlaybackError, Result};
use crate::volume::Volume;
use std::fmt;
use std::str::FromStr;

/// A parsed control message
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    /// Select a track and load it without playing
    Load(String),

    /// Select a track and play it
    Play(String),

    /// Pause if playing, play otherwise
    TogglePause,

    /// Set volume percent (0-100)
    Volume(u8),

    /// Swap the UI background
    Background(String),

    /// Skip to the next track
    Next,

    /// Go back one track
    Previous,

    /// Flip shuffle on or off
    ToggleShuffle,
}

impl ControlCommand {
    /// Parse a control message
    pub fn parse(msg: &str) -> Result<Self> {
        let mut parts = msg.split_whitespace();
        let command = parts
            .next()
            .ok_or_else(|| PlaybackError::InvalidCommand("empty message".to_string()))?;
        let param = parts.next();

        match command {
            "load" => Ok(Self::Load(required(command, param)?.to_string())),
            "play" => Ok(Self::Play(required(command, param)?.to_string())),
            "togglePause" => Ok(Self::TogglePause),
            "volume" => parse_volume(required(command, param)?).map(Self::Volume),
            "background" => Ok(Self::Background(required(command, param)?.to_string())),
            "next" => Ok(Self::Next),
            "previous" => Ok(Self::Previous),
            "toggleShuffle" => Ok(Self::ToggleShuffle),
            other => Err(PlaybackError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            ))),
        }
    }
}

impl FromStr for ControlCommand {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(link) => write!(f, "load {}", link),
            Self::Play(link) => write!(f, "play {}", link),
            Self::TogglePause => write!(f, "togglePause"),
            Self::Volume(level) => write!(f, "volume {}", level),
            Self::Background(path) => write!(f, "background {}", path),
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
            Self::ToggleShuffle => write!(f, "toggleShuffle"),
        }
    }
}

fn required<'a>(command: &str, param: Option<&'a str>) -> Result<&'a str> {
    param.ok_or_else(|| PlaybackError::InvalidCommand(format!("'{}' needs a parameter", command)))
}

/// Volume percent; fractional and out-of-range values are rounded and clamped
fn parse_volume(raw: &str) -> Result<u8> {
    raw.parse::<f64>()
        .ok()
        .and_then(Volume::level_from_percent)
        .ok_or_else(|| PlaybackError::InvalidCommand(format!("invalid volume '{}'", raw)))
}
