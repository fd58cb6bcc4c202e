//! Building `rodio` sinks for a local file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::MediaError;

/// A paused sink positioned at `start_at`, plus the decoder-reported length.
pub(super) struct PreparedSink {
    pub sink: Sink,
    pub total: Option<Duration>,
}

/// Open and decode `path`, returning a paused `Sink` that starts at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<PreparedSink, MediaError> {
    let locator = path.display().to_string();
    let file = File::open(path).map_err(|source| MediaError::Open {
        locator: locator.clone(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| MediaError::Decode {
        locator,
        reason: e.to_string(),
    })?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    // `skip_duration` is the seeking primitive; Duration::ZERO is a no-op.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok(PreparedSink { sink, total })
}

/// Probe the length of `path` from its container headers.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    use lofty::prelude::*;

    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "duration probe failed");
            None
        }
    }
}
