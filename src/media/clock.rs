//! Playback position and event bookkeeping for the rodio handle.
//!
//! Everything here runs against caller-supplied instants and a "sink ran dry"
//! flag, so it works without an output device.

use std::time::{Duration, Instant};

use super::listeners::ListenerRegistry;
use super::types::{ListenerId, MediaEvent, MediaEventKind};

/// Minimum spacing between two `TimeUpdate` events while playing.
pub(super) const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Default)]
pub(super) struct PlaybackClock {
    length: Option<Duration>,
    playing: bool,
    // Start of the current uninterrupted stretch of playback and the time
    // accumulated before it.
    started_at: Option<Instant>,
    accumulated: Duration,

    listeners: ListenerRegistry,
    queued: Vec<MediaEvent>,
    loaded_pending: bool,
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    /// Forget the previous source entirely. Listeners and queued events stay.
    pub fn reset(&mut self) {
        self.length = None;
        self.playing = false;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.loaded_pending = false;
        self.last_tick = None;
    }

    /// A new source is ready; `LoadedData` goes out on the next drain.
    pub fn source_loaded(&mut self) {
        self.loaded_pending = true;
    }

    pub fn length(&self) -> Option<Duration> {
        self.length
    }

    /// Record the source length if it is not known yet.
    pub fn fill_length(&mut self, length: Option<Duration>) {
        if self.length.is_none() {
            self.length = length;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Back to the top of the source, for replaying after the end.
    pub fn rewind(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    pub fn start(&mut self, now: Instant) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.started_at = Some(now);
    }

    pub fn pause(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated = self
                .accumulated
                .saturating_add(now.saturating_duration_since(st));
        }
        self.playing = false;
    }

    /// Convert a requested position into an offset within the source.
    ///
    /// Negative and non-finite requests map to zero; anything past the known
    /// length is capped to it.
    pub fn seek_target(&self, seconds: f64) -> Duration {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Duration::ZERO;
        }
        let target = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
        match self.length {
            Some(len) => target.min(len),
            None => target,
        }
    }

    /// The source was repositioned to `target`.
    pub fn seeked(&mut self, target: Duration, now: Instant) {
        self.accumulated = target;
        self.started_at = self.playing.then_some(now);
        self.raise(MediaEventKind::TimeUpdate);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |st| now.saturating_duration_since(st));
        self.accumulated.saturating_add(running)
    }

    pub fn current_time(&self, now: Instant) -> f64 {
        let elapsed = self.elapsed(now);
        match self.length {
            Some(len) => elapsed.min(len).as_secs_f64(),
            None => elapsed.as_secs_f64(),
        }
    }

    pub fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn raise(&mut self, kind: MediaEventKind) {
        self.queued.extend(self.listeners.emit(kind));
    }

    /// Collect pending events as of `now`.
    ///
    /// `sink_empty` reports whether the output has played everything it was
    /// given. While playing, that ends the source: one final `TimeUpdate` and
    /// one `Ended`, after which the clock is stopped.
    pub fn drain(&mut self, now: Instant, sink_empty: bool) -> Vec<MediaEvent> {
        if self.loaded_pending {
            self.loaded_pending = false;
            self.raise(MediaEventKind::LoadedData);
        }

        if self.playing {
            if sink_empty {
                self.accumulated = self.length.unwrap_or_else(|| self.elapsed(now));
                self.started_at = None;
                self.playing = false;
                self.raise(MediaEventKind::TimeUpdate);
                self.raise(MediaEventKind::Ended);
            } else if self
                .last_tick
                .is_none_or(|t| now.saturating_duration_since(t) >= TICK)
            {
                self.last_tick = Some(now);
                self.raise(MediaEventKind::TimeUpdate);
            }
        }

        std::mem::take(&mut self.queued)
    }
}
