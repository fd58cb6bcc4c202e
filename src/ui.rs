//! UI rendering for the player card.
//!
//! The shell draws the outer frame; everything inside is the player surface:
//! track info, progress, transport row, volume row and key help.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Padding, Paragraph, Wrap},
};

use crate::config::ControlsSettings;
use crate::media::MediaHandle;
use crate::player::{Player, VolumeIcon};
use crate::shell::{Shell, Theme};

const HEADING_FONT: &str = "--font-poppins";
const BODY_FONT: &str = "--font-montserrat";

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] seek -/+{}s", scrub_seconds),
        "[-/+] volume".to_string(),
        "[m] mute".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// The transport row: previous, play or pause, next.
fn transport_text(is_playing: bool) -> String {
    let toggle = if is_playing { "⏸" } else { "▶" };
    format!("⏮    {}    ⏭", toggle)
}

fn volume_glyph(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => "🔇",
        VolumeIcon::Unmuted => "🔉",
    }
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}

/// Render the whole screen: shell frame with the player card inside.
pub fn draw<M: MediaHandle>(
    frame: &mut Frame,
    shell: &Shell,
    player: &Player<M>,
    controls: &ControlsSettings,
) {
    shell.render(frame, |frame, area, theme| {
        draw_card(frame, area, theme, player, controls);
    });
}

fn draw_card<M: MediaHandle>(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    player: &Player<M>,
    controls: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    // Cover and track info
    let track = player.current_track();
    let info = vec![
        Line::from(Span::styled(
            track.title.clone(),
            theme.font(HEADING_FONT, 700),
        )),
        Line::from(Span::styled(
            or_dash(&track.artist).to_string(),
            theme.font(BODY_FONT, 400),
        )),
        Line::from(Span::styled(
            format!("cover: {}", or_dash(&track.cover_url)),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let info_par = Paragraph::new(info).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .title(format!(
                " {}/{} ",
                player.current_index() + 1,
                player.state().tracks().len()
            )),
    );
    frame.render_widget(info_par, chunks[0]);

    // Progress
    let progress = player.progress();
    let progress_block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .title(" progress ");
    let progress_inner = progress_block.inner(chunks[1]);
    frame.render_widget(progress_block, chunks[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(progress_inner);
    let gauge = LineGauge::default()
        .ratio(progress.ratio)
        .label("")
        .filled_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(gauge, rows[0]);
    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    frame.render_widget(Paragraph::new(progress.elapsed), times[0]);
    frame.render_widget(
        Paragraph::new(progress.total).alignment(Alignment::Right),
        times[1],
    );

    // Transport controls
    let transport = Paragraph::new(transport_text(player.is_playing()))
        .alignment(Alignment::Center)
        .style(theme.font(HEADING_FONT, 600));
    frame.render_widget(transport, chunks[2]);

    // Volume
    let volume_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(chunks[3]);
    frame.render_widget(
        Paragraph::new(format!(" {}", volume_glyph(player.volume_icon()))),
        volume_cols[0],
    );
    let volume_gauge = LineGauge::default()
        .ratio(f64::from(player.volume()).clamp(0.0, 1.0))
        .label(format!("{:>3}%", (player.volume() * 100.0).round() as u32));
    frame.render_widget(volume_gauge, volume_cols[1]);

    // Key help
    let footer = Paragraph::new(controls_text(controls.scrub_seconds))
        .style(theme.font(BODY_FONT, 300))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" controls "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
