//! The `Player`: playlist state bound to one media handle.

use crate::library::Track;
use crate::media::{MediaEvent, MediaEventKind, MediaHandle};

use super::binding::{Binding, BindingPhase};
use super::error::PlayerError;
use super::state::{DEFAULT_VOLUME, PlayIntent, PlaylistState, VolumeIcon};
use super::time::Progress;

pub struct Player<M: MediaHandle> {
    state: PlaylistState,
    media: M,
    binding: Option<Binding>,
    default_volume: f32,
}

impl<M: MediaHandle> Player<M> {
    /// Create a player over `tracks` with the stock default volume.
    pub fn new(tracks: Vec<Track>, media: M) -> Result<Self, PlayerError> {
        Self::with_default_volume(tracks, media, DEFAULT_VOLUME)
    }

    /// Create a player whose start and unmute volume is `default_volume`.
    ///
    /// The first track is bound immediately. Fails on an empty track list.
    pub fn with_default_volume(
        tracks: Vec<Track>,
        mut media: M,
        default_volume: f32,
    ) -> Result<Self, PlayerError> {
        let default_volume = if default_volume.is_finite() {
            default_volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        let state = PlaylistState::new(tracks, default_volume)?;
        media.set_volume(default_volume);

        let mut player = Self {
            state,
            media,
            binding: None,
            default_volume,
        };
        player.rebind();
        Ok(player)
    }

    /// Flip between playing and paused.
    ///
    /// The intent flips immediately; a rejected play request is logged and
    /// leaves the intent as "playing".
    pub fn toggle_play_pause(&mut self) {
        if self.state.intent.intended {
            self.media.pause();
            self.state.intent = PlayIntent::default();
            self.set_phase(BindingPhase::Paused);
            tracing::info!(track = self.state.current_index(), "paused");
        } else {
            self.state.intent.intended = true;
            self.start_playback();
        }
    }

    pub fn next_track(&mut self) {
        let before = self.state.current_index();
        let after = self.state.advance();
        if after != before {
            self.rebind();
        }
    }

    pub fn prev_track(&mut self) {
        let before = self.state.current_index();
        let after = self.state.retreat();
        if after != before {
            self.rebind();
        }
    }

    /// Move the playback position. Callers keep `target_seconds` within `[0, duration]`.
    pub fn seek(&mut self, target_seconds: f64) {
        tracing::debug!(target_seconds, "seek");
        self.media.seek(target_seconds);
    }

    /// Set the volume, clamped to `[0, 1]`. Only an actual change reaches the handle.
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            tracing::warn!(volume, "ignoring non-finite volume");
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        if volume == self.state.volume {
            return;
        }
        self.state.volume = volume;
        self.media.set_volume(volume);
    }

    /// Mute, or restore the default volume if already muted.
    ///
    /// The volume in effect before muting is not remembered.
    pub fn toggle_mute(&mut self) {
        let target = if self.state.volume > 0.0 {
            0.0
        } else {
            self.default_volume
        };
        self.set_volume(target);
    }

    /// Drain queued media events and dispatch them. Returns how many were drained.
    pub fn pump(&mut self) -> usize {
        let events = self.media.drain_events();
        let drained = events.len();
        for event in events {
            self.handle_event(event);
        }
        drained
    }

    /// Dispatch one event. Events for listeners outside the current binding are dropped.
    pub fn handle_event(&mut self, event: MediaEvent) {
        let Some(kind) = self.binding.as_ref().and_then(|b| b.route(event.listener)) else {
            tracing::debug!(listener = %event.listener, kind = ?event.kind, "stale media event");
            return;
        };

        match kind {
            MediaEventKind::LoadedData => {
                self.state.duration = self.media.duration();
                self.state.current_time = self.media.current_time();
                if self.phase() == Some(BindingPhase::Idle) {
                    self.set_phase(BindingPhase::Loaded);
                }
                tracing::debug!(duration = self.state.duration, "metadata loaded");
            }
            MediaEventKind::TimeUpdate => {
                self.state.current_time = self.media.current_time();
            }
            MediaEventKind::Ended => {
                tracing::info!(track = self.state.current_index(), "track ended");
                self.state.intent.confirmed = false;
                self.next_track();
            }
        }
    }

    /// Detach the current binding's listeners. Called on drop.
    pub fn unbind(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.detach(&mut self.media);
        }
    }

    fn rebind(&mut self) {
        self.unbind();

        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.state.intent.confirmed = false;

        let index = self.state.current_index();
        let track = self.state.current_track();
        if let Err(e) = self.media.set_source(&track.track_url) {
            tracing::warn!(track = index, locator = %track.track_url, error = %e, "failed to load source");
        }
        tracing::info!(track = index, title = %track.title, "bound track");

        self.binding = Some(Binding::attach(&mut self.media, index));
        if self.state.intent.intended {
            self.start_playback();
        }
    }

    fn start_playback(&mut self) {
        match self.media.play() {
            Ok(()) => {
                self.state.intent.confirmed = true;
                self.set_phase(BindingPhase::Playing);
                tracing::info!(track = self.state.current_index(), "playing");
            }
            Err(e) => {
                self.state.intent.confirmed = false;
                tracing::error!(
                    track = self.state.current_index(),
                    intended = self.state.intent.intended,
                    confirmed = self.state.intent.confirmed,
                    error = %e,
                    "error playing audio"
                );
            }
        }
    }

    fn set_phase(&mut self, phase: BindingPhase) {
        if let Some(b) = self.binding.as_mut() {
            b.phase = phase;
        }
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn current_track(&self) -> &Track {
        self.state.current_track()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn volume(&self) -> f32 {
        self.state.volume()
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.state.duration()
    }

    pub fn phase(&self) -> Option<BindingPhase> {
        self.binding.as_ref().map(Binding::phase)
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.state.current_time(), self.state.duration())
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        self.state.volume_icon()
    }

    #[cfg(test)]
    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}

impl<M: MediaHandle> Drop for Player<M> {
    fn drop(&mut self) {
        self.unbind();
    }
}
