//! In-memory `MediaHandle` for exercising the player without an audio device.

use super::handle::MediaHandle;
use super::listeners::ListenerRegistry;
use super::types::{ListenerId, MediaError, MediaEvent, MediaEventKind};

#[derive(Debug, Default)]
pub struct FakeMedia {
    pub source: Option<String>,
    pub sources: Vec<String>,
    pub playing: bool,
    pub volume: f32,
    pub position: f64,
    pub length: f64,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub volume_calls: usize,
    pub seeks: Vec<f64>,
    /// When set, every `play` call is rejected.
    pub reject_play: bool,
    listeners: ListenerRegistry,
    queued: Vec<MediaEvent>,
}

impl FakeMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `kind` for every listener currently registered for it.
    pub fn fire(&mut self, kind: MediaEventKind) {
        self.queued.extend(self.listeners.emit(kind));
    }

    /// Pretend metadata arrived for the current source.
    pub fn load(&mut self, length: f64) {
        self.length = length;
        self.fire(MediaEventKind::LoadedData);
    }

    /// Pretend playback reached `position`.
    pub fn advance_to(&mut self, position: f64) {
        self.position = position;
        self.fire(MediaEventKind::TimeUpdate);
    }

    pub fn finish(&mut self) {
        self.position = self.length;
        self.playing = false;
        self.fire(MediaEventKind::Ended);
    }
}

impl MediaHandle for FakeMedia {
    fn set_source(&mut self, locator: &str) -> Result<(), MediaError> {
        self.source = Some(locator.to_string());
        self.sources.push(locator.to_string());
        self.playing = false;
        self.position = 0.0;
        self.length = 0.0;
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if self.reject_play {
            return Err(MediaError::Output("autoplay blocked".to_string()));
        }
        if self.source.is_none() {
            return Err(MediaError::NoSource);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.seeks.push(seconds);
        self.position = seconds;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume_calls += 1;
        self.volume = volume;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.length
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.queued)
    }
}
