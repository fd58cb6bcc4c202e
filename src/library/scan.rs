use std::path::Path;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

pub(super) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Look for a cover image next to `path`, trying `settings.cover_names` in order.
fn find_cover(path: &Path, settings: &LibrarySettings) -> String {
    let Some(parent) = path.parent() else {
        return String::new();
    };
    settings
        .cover_names
        .iter()
        .map(|name| parent.join(name))
        .find(|candidate| candidate.is_file())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Walk `dir` and build a track for every audio file found.
///
/// Tags are read with `lofty`; files without tags fall back to their file stem
/// as the title and an empty artist. The result is sorted by display string.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }
        tracks.push(read_track(path, settings));
    }

    tracks.sort_by_key(|t| t.display().to_lowercase());
    tracing::info!(dir = %dir.display(), count = tracks.len(), "scanned library");
    tracks
}

/// Build a track for one audio file from its tags, falling back to the file stem.
pub(super) fn read_track(path: &Path, settings: &LibrarySettings) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = String::new();

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title() {
                    if !v.trim().is_empty() {
                        title = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.artist() {
                    artist = v.trim().to_string();
                }
            }
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable tags");
        }
    }

    Track {
        title,
        artist,
        cover_url: find_cover(path, settings),
        track_url: path.display().to_string(),
    }
}
