use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing::Level;

use crate::config::{LoggingSettings, default_log_path};

/// Install a file-backed `tracing` subscriber.
///
/// The terminal belongs to the UI, so events go to a log file. When no file
/// can be opened logging stays disabled and a note goes to stderr before the
/// UI starts.
pub fn init(settings: &LoggingSettings) {
    let level = settings.level.parse::<Level>().unwrap_or(Level::INFO);

    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        eprintln!("tunebox: no log location available, logging disabled");
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("tunebox: cannot create {}: {e}", dir.display());
            return;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("tunebox: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if let Err(e) = installed {
        eprintln!("tunebox: logging disabled: {e}");
    }
}
