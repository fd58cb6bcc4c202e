//! Playlist state owned by the player.

use crate::library::Track;

use super::error::PlayerError;

/// Volume applied on construction and restored when unmuting.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Which speaker glyph the volume row shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Unmuted,
}

/// User intent versus what the media handle actually accepted.
///
/// The UI renders `intended`; `confirmed` only flips on once a play request
/// succeeded and drops on pause, failure, end of track or rebinding.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlayIntent {
    pub intended: bool,
    pub confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct PlaylistState {
    tracks: Vec<Track>,
    current_index: usize,
    pub(super) intent: PlayIntent,
    pub(super) volume: f32,
    pub(super) current_time: f64,
    pub(super) duration: f64,
}

impl PlaylistState {
    pub fn new(tracks: Vec<Track>, volume: f32) -> Result<Self, PlayerError> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self {
            tracks,
            current_index: 0,
            intent: PlayIntent::default(),
            volume,
            current_time: 0.0,
            duration: 0.0,
        })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.current_index]
    }

    /// Step forward one track, wrapping to the start.
    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.tracks.len();
        self.current_index
    }

    /// Step back one track, wrapping to the end.
    pub fn retreat(&mut self) -> usize {
        let len = self.tracks.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.intent.intended
    }

    pub fn intent(&self) -> PlayIntent {
        self.intent
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        if self.volume > 0.0 {
            VolumeIcon::Unmuted
        } else {
            VolumeIcon::Muted
        }
    }
}
