/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single entry of a playlist
///
/// Tracks carry no identity of their own; two tracks are told apart only by
/// their position in the playlist that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name
    pub name: String,

    /// Resource locator handed to the playback device
    pub link: String,

    /// Duration label as shown in the track table (e.g. `"4:12"`)
    pub duration: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        name: impl Into<String>,
        link: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            duration: duration.into(),
        }
    }

    /// Parse the duration label into a `Duration`
    ///
    /// Accepts `ss`, `m:ss` and `h:mm:ss`. Returns `None` for anything else;
    /// the label is informational and a bad one never fails a load.
    pub fn duration(&self) -> Option<Duration> {
        parse_duration_label(&self.duration)
    }
}

fn parse_duration_label(label: &str) -> Option<Duration> {
    let parts: Vec<&str> = label.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut total: u64 = 0;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u64 = part.parse().ok()?;
        // Only the leading component may exceed 59
        if i > 0 && value >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
    }

    Some(Duration::from_secs(total))
}
