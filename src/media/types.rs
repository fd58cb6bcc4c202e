//! Small types shared by every media handle implementation.

use std::fmt;

use thiserror::Error;

/// The three events a player binding listens for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    /// Metadata (duration) for the current source is available.
    LoadedData,
    /// The playback position advanced.
    TimeUpdate,
    /// The current source played to its end.
    Ended,
}

/// Identity of one registered listener. Ids are never reused by a handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An event addressed to one listener.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MediaEvent {
    pub listener: ListenerId,
    pub kind: MediaEventKind,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no source loaded")]
    NoSource,

    #[error("unsupported locator: {0}")]
    UnsupportedLocator(String),

    #[error("failed to open {locator}: {source}")]
    Open {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {locator}: {reason}")]
    Decode { locator: String, reason: String },

    #[error("audio output unavailable: {0}")]
    Output(String),
}
