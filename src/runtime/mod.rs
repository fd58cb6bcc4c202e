use std::env;
use std::io::{self, Stdout};
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::library::resolve_tracks;
use crate::media::RodioMedia;
use crate::player::Player;
use crate::shell::Shell;

mod event_loop;
mod logging;
mod settings;


/// Run `setup`; when it fails, call `restore` before handing the error back.
fn setup_or_restore<T, E>(
    setup: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce(),
) -> Result<T, E> {
    setup().inspect_err(|_| restore())
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = settings::load_settings();
    let settings = loaded.settings;
    logging::init(&settings.logging);
    if let Some(reason) = &loaded.fallback_reason {
        tracing::warn!(%reason, "running with default settings");
    }

    let target = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    let tracks = resolve_tracks(&target, &settings.library)?;
    let media = RodioMedia::open()?;
    let mut player = Player::with_default_volume(tracks, media, settings.player.default_volume)?;
    let shell = Shell::new(&settings.shell);
    tracing::info!(input = %target.display(), "starting");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let run_result = event_loop::run(&mut terminal, &settings, &shell, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    run_result
}
