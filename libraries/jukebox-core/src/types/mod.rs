mod playlist;
mod track;

pub use playlist::{Playlist, TrackRow};
pub use track::Track;
