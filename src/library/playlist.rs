//! TOML playlist files.
//!
//! ```toml
//! [[tracks]]
//! title = "Intro"
//! artist = "Someone"
//! cover_url = "covers/intro.jpg"
//! track_url = "audio/intro.mp3"
//! ```
//!
//! Relative local locators are resolved against the playlist's directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::LibraryError;
use super::model::Track;

#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Read the tracks listed in the playlist file at `path`.
pub fn load_playlist(path: &Path) -> Result<Vec<Track>, LibraryError> {
    let text = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let tracks = parse_playlist(&text, base).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = tracks.len(), "loaded playlist");
    Ok(tracks)
}

pub(crate) fn parse_playlist(text: &str, base: &Path) -> Result<Vec<Track>, toml::de::Error> {
    let file: PlaylistFile = toml::from_str(text)?;
    Ok(file
        .tracks
        .into_iter()
        .map(|mut t| {
            t.track_url = resolve_locator(&t.track_url, base);
            t.cover_url = resolve_locator(&t.cover_url, base);
            t
        })
        .collect())
}

/// Join relative filesystem locators onto `base`; anything with a scheme,
/// absolute paths and empty strings pass through unchanged.
fn resolve_locator(locator: &str, base: &Path) -> String {
    if locator.is_empty() || locator.contains("://") {
        return locator.to_string();
    }
    let p = Path::new(locator);
    if p.is_absolute() {
        locator.to_string()
    } else {
        base.join(p).display().to_string()
    }
}
