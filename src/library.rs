//! Track list sources.
//!
//! The player never discovers tracks itself; it is handed a list built here,
//! either from a TOML playlist file or from a directory scan.

use std::path::Path;

use crate::config::LibrarySettings;

mod error;
mod model;
mod playlist;
mod scan;

pub use error::LibraryError;
pub use model::Track;
pub use playlist::load_playlist;
pub use scan::scan;

fn is_playlist_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Build the track list for `target`.
///
/// Directories are scanned, `.toml` files parsed as playlists and a single
/// audio file becomes a one-track list. Anything else is rejected.
pub fn resolve_tracks(target: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, LibraryError> {
    if target.is_dir() {
        return Ok(scan(target, settings));
    }
    if !target.is_file() {
        return Err(LibraryError::NotFound(target.to_path_buf()));
    }
    if is_playlist_file(target) {
        return load_playlist(target);
    }
    if scan::is_audio_file(target, settings) {
        return Ok(vec![scan::read_track(target, settings)]);
    }
    Err(LibraryError::Unsupported(target.to_path_buf()))
}
