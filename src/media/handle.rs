use super::types::{ListenerId, MediaError, MediaEvent, MediaEventKind};

/// A single playable-media handle: one loaded source plus its transport state.
///
/// Events are queued by the handle and handed out through `drain_events`;
/// only listeners registered at the time an event is raised receive it.
pub trait MediaHandle {
    /// Switch to a new source. The previous source is stopped.
    fn set_source(&mut self, locator: &str) -> Result<(), MediaError>;

    /// Start or resume playback of the current source.
    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self);

    /// Jump to `seconds` from the start of the source.
    fn seek(&mut self, seconds: f64);

    fn set_volume(&mut self, volume: f32);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Source length in seconds, `0.0` until known.
    fn duration(&self) -> f64;

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId) -> bool;

    fn listener_count(&self) -> usize;

    fn drain_events(&mut self) -> Vec<MediaEvent>;
}
