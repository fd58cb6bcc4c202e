//! Association between one track and the listeners attached for it.

use crate::media::{ListenerId, MediaEventKind, MediaHandle};

/// Lifecycle of a single binding.
///
/// `Idle -> Loaded -> Playing <-> Paused`; a track change tears the binding
/// down and the next one starts again at `Idle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BindingPhase {
    Idle,
    Loaded,
    Playing,
    Paused,
}

#[derive(Debug)]
pub struct Binding {
    track_index: usize,
    loaded_data: ListenerId,
    time_update: ListenerId,
    ended: ListenerId,
    pub(super) phase: BindingPhase,
}

impl Binding {
    /// Register one listener per event kind on `media` for `track_index`.
    pub fn attach<M: MediaHandle>(media: &mut M, track_index: usize) -> Self {
        Self {
            track_index,
            loaded_data: media.add_listener(MediaEventKind::LoadedData),
            time_update: media.add_listener(MediaEventKind::TimeUpdate),
            ended: media.add_listener(MediaEventKind::Ended),
            phase: BindingPhase::Idle,
        }
    }

    /// Remove every listener this binding registered.
    pub fn detach<M: MediaHandle>(self, media: &mut M) {
        for id in self.listeners() {
            if !media.remove_listener(id) {
                tracing::warn!(listener = %id, "listener already gone at detach");
            }
        }
        tracing::debug!(track = self.track_index, "binding detached");
    }

    pub fn phase(&self) -> BindingPhase {
        self.phase
    }

    pub fn listeners(&self) -> [ListenerId; 3] {
        [self.loaded_data, self.time_update, self.ended]
    }

    /// The handler `id` belongs to, or `None` if it is not one of ours.
    pub fn route(&self, id: ListenerId) -> Option<MediaEventKind> {
        if id == self.loaded_data {
            Some(MediaEventKind::LoadedData)
        } else if id == self.time_update {
            Some(MediaEventKind::TimeUpdate)
        } else if id == self.ended {
            Some(MediaEventKind::Ended)
        } else {
            None
        }
    }
}
