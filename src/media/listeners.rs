use super::types::{ListenerId, MediaEvent, MediaEventKind};

/// Bookkeeping for listeners attached to one media handle.
///
/// Emitting a kind produces one `MediaEvent` per listener currently registered
/// for it, in registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, MediaEventKind)>,
}

impl ListenerRegistry {
    pub fn add(&mut self, kind: MediaEventKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, kind));
        id
    }

    /// Returns false when `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn emit(&self, kind: MediaEventKind) -> impl Iterator<Item = MediaEvent> + '_ {
        self.entries
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|&(listener, kind)| MediaEvent { listener, kind })
    }
}
