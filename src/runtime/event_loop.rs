use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::media::MediaHandle;
use crate::player::Player;
use crate::shell::Shell;
use crate::ui;

/// Main terminal event loop: pumps media events into the player, redraws and
/// handles keys. Returns `Ok(())` when the user quits.
pub fn run<M: MediaHandle>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    shell: &Shell,
    player: &mut Player<M>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        player.pump();

        terminal.draw(|f| ui::draw(f, shell, &*player, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to the player. Returns true when the user asked to quit.
pub(super) fn handle_key_event<M: MediaHandle>(
    key: KeyEvent,
    settings: &config::Settings,
    player: &mut Player<M>,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_play_pause(),
        KeyCode::Char('l') | KeyCode::Right => player.next_track(),
        KeyCode::Char('h') | KeyCode::Left => player.prev_track(),
        KeyCode::Char('L') => scrub(player, settings.controls.scrub_seconds as f64),
        KeyCode::Char('H') => scrub(player, -(settings.controls.scrub_seconds as f64)),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            player.set_volume(player.volume() + settings.controls.volume_step)
        }
        KeyCode::Char('-') => player.set_volume(player.volume() - settings.controls.volume_step),
        KeyCode::Char('m') => player.toggle_mute(),
        _ => {}
    }
    false
}

/// Seek relative to the current position, bounded like a range input to
/// `[0, duration]` (an unknown duration pins the target at 0).
fn scrub<M: MediaHandle>(player: &mut Player<M>, delta: f64) {
    let max = player.duration().max(0.0);
    let target = (player.current_time() + delta).clamp(0.0, max);
    player.seek(target);
}
