use serde::Deserialize;

/// A single playable item as handed to the player.
///
/// `cover_url` and `track_url` are opaque locators; only the media backend
/// interprets `track_url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub cover_url: String,
    pub track_url: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        cover_url: impl Into<String>,
        track_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover_url: cover_url.into(),
            track_url: track_url.into(),
        }
    }

    /// `Artist - Title`, or just the title when the artist is blank.
    pub fn display(&self) -> String {
        let artist = self.artist.trim();
        if artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", artist, self.title)
        }
    }
}
