//! `MediaHandle` backed by the default `rodio` output device.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::clock::PlaybackClock;
use super::handle::MediaHandle;
use super::sink::{create_sink_at, probe_duration};
use super::types::{ListenerId, MediaError, MediaEvent, MediaEventKind};

pub struct RodioMedia {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    volume: f32,
    clock: PlaybackClock,
}

/// Map a track locator onto a local path. Only plain paths and `file://` are playable.
fn local_path(locator: &str) -> Result<PathBuf, MediaError> {
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(MediaError::NoSource);
    }
    if let Some(rest) = locator.strip_prefix("file://") {
        return Ok(PathBuf::from(rest));
    }
    if locator.contains("://") {
        return Err(MediaError::UnsupportedLocator(locator.to_string()));
    }
    Ok(PathBuf::from(locator))
}

impl RodioMedia {
    /// Open the default output device.
    pub fn open() -> Result<Self, MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
            volume: 1.0,
            clock: PlaybackClock::default(),
        })
    }

    fn stop_current(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.clock.reset();
    }

    fn rebuild_sink(&mut self, path: &Path, start_at: Duration) -> Result<(), MediaError> {
        let prepared = create_sink_at(&self.stream, path, start_at, self.volume)?;
        if let Some(old) = self.sink.replace(prepared.sink) {
            old.stop();
        }
        if self.clock.length().is_none() {
            self.clock
                .fill_length(prepared.total.or_else(|| probe_duration(path)));
        }
        Ok(())
    }
}

impl MediaHandle for RodioMedia {
    fn set_source(&mut self, locator: &str) -> Result<(), MediaError> {
        self.stop_current();
        self.path = None;

        let path = local_path(locator)?;
        self.rebuild_sink(&path, Duration::ZERO)?;
        self.path = Some(path);
        self.clock.source_loaded();
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let Some(path) = self.path.clone() else {
            return Err(MediaError::NoSource);
        };
        if self.clock.is_playing() {
            return Ok(());
        }
        // Playing again after the end restarts from the top.
        if self.sink.as_ref().is_none_or(|s| s.empty()) {
            self.rebuild_sink(&path, Duration::ZERO)?;
            self.clock.rewind();
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        self.clock.start(Instant::now());
        Ok(())
    }

    fn pause(&mut self) {
        if !self.clock.is_playing() {
            return;
        }
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.clock.pause(Instant::now());
    }

    fn seek(&mut self, seconds: f64) {
        let Some(path) = self.path.clone() else {
            return;
        };
        let target = self.clock.seek_target(seconds);

        if let Err(e) = self.rebuild_sink(&path, target) {
            tracing::warn!(error = %e, "seek failed");
            return;
        }
        if self.clock.is_playing() {
            if let Some(s) = self.sink.as_ref() {
                s.play();
            }
        }
        self.clock.seeked(target, Instant::now());
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    fn current_time(&self) -> f64 {
        self.clock.current_time(Instant::now())
    }

    fn duration(&self) -> f64 {
        self.clock.length().map_or(0.0, |d| d.as_secs_f64())
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        self.clock.add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.clock.remove_listener(id)
    }

    fn listener_count(&self) -> usize {
        self.clock.listener_count()
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        let ran_dry = self.sink.as_ref().is_some_and(|s| s.empty());
        self.clock.drain(Instant::now(), ran_dry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_accepts_plain_and_file_locators() {
        assert_eq!(
            local_path("/music/a.mp3").unwrap(),
            PathBuf::from("/music/a.mp3")
        );
        assert_eq!(
            local_path("file:///music/a.mp3").unwrap(),
            PathBuf::from("/music/a.mp3")
        );
    }

    #[test]
    fn local_path_rejects_remote_and_empty_locators() {
        assert!(matches!(
            local_path("https://example.com/a.mp3"),
            Err(MediaError::UnsupportedLocator(_))
        ));
        assert!(matches!(local_path("   "), Err(MediaError::NoSource)));
    }
}
