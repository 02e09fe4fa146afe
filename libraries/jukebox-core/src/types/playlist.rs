/// Playlist domain types
use crate::types::Track;
use serde::{Deserialize, Deserializer, Serialize};

/// Named, ordered list of tracks
///
/// Insertion order is playback order. A `Playlist` value may be empty; the
/// store and the sequencer are the ones that refuse to work with one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (absent or null in most payloads)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Tracks in playback order
    #[serde(rename = "songs")]
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// Tracks in playback order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the first track with the given link
    pub fn position_of(&self, link: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.link == link)
    }

    /// Numbered rows for the track table
    pub fn rows(&self) -> Vec<TrackRow> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| TrackRow {
                number: i + 1,
                name: track.name.clone(),
                duration: track.duration.clone(),
                link: track.link.clone(),
            })
            .collect()
    }
}

/// One rendered row of the track table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRow {
    /// 1-based position in the playlist
    pub number: usize,

    /// Track name
    pub name: String,

    /// Duration label
    pub duration: String,

    /// Link to play when the row is clicked
    pub link: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Playlist {
        Playlist::new(
            "Letters",
            vec![
                Track::new("A", "a.mp3", "1:00"),
                Track::new("B", "b.mp3", "2:00"),
                Track::new("C", "c.mp3", "3:00"),
            ],
        )
    }

    #[test]
    fn preserves_insertion_order() {
        let playlist = abc();
        let names: Vec<&str> = playlist.tracks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(playlist.len(), 3);
        assert!(!playlist.is_empty());
    }

    #[test]
    fn position_of_returns_first_match() {
        let mut tracks = abc().tracks().to_vec();
        tracks.push(Track::new("A again", "a.mp3", "1:00"));
        let playlist = Playlist::new("dupes", tracks);

        assert_eq!(playlist.position_of("a.mp3"), Some(0));
        assert_eq!(playlist.position_of("c.mp3"), Some(2));
        assert_eq!(playlist.position_of("missing.mp3"), None);
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let rows = abc().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[2].number, 3);
        assert_eq!(rows[1].name, "B");
        assert_eq!(rows[1].link, "b.mp3");
        assert_eq!(rows[1].duration, "2:00");
    }

    #[test]
    fn serializes_tracks_as_songs() {
        let json = serde_json::to_value(abc()).unwrap();
        assert!(json.get("songs").is_some());
        assert!(json.get("tracks").is_none());
    }

    #[test]
    fn empty_playlist_is_a_value() {
        let playlist = Playlist::default();
        assert!(playlist.is_empty());
        assert_eq!(playlist.get(0), None);
    }
}
