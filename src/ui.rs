//! Terminal rendering of the playlist and transport status.

use crate::config::Config;
use crate::player::PlaybackState;
use crate::session::{RepeatMode, Session};
use crate::track::format_duration;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use std::time::Duration;

/// Everything a frame shows, borrowed from the app for one draw.
pub struct View<'a> {
    pub session: &'a Session,
    pub config: &'a Config,
    pub state: PlaybackState,
    pub position: Duration,
    pub duration: Option<Duration>,
    /// Highlighted row, independent of the playing track.
    pub cursor: usize,
    pub show_help: bool,
    pub message: Option<&'a str>,
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Playlist
            Constraint::Length(4), // Status
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let header = Paragraph::new("tapedeck")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_playlist(frame, chunks[1], view);
    frame.render_widget(Paragraph::new(status_lines(view)), chunks[2]);

    let footer = Paragraph::new(footer_text(view.config))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);

    if view.show_help {
        draw_help(frame, view.config);
    }
}

fn draw_playlist(frame: &mut Frame, area: Rect, view: &View) {
    let playlist = view.session.playlist();
    let active = view.session.current_index();

    let rows = playlist.iter().enumerate().map(|(index, track)| {
        let playing = Some(index) == active;
        let marker = if playing { "▶" } else { " " };
        let row = Row::new(vec![
            Cell::from(format!("{marker}{:>3}", track.track_number)),
            Cell::from(track.file_name.clone()),
            Cell::from(format!("{:>8}", track.duration_label())),
        ]);
        if playing {
            row.style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });

    let title = format!(" Playlist ({}) ", playlist.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec!["   #", "File", "Duration"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = (!playlist.is_empty()).then(|| view.cursor.min(playlist.len() - 1));
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

fn status_lines<'a>(view: &View<'a>) -> Vec<Line<'a>> {
    let state = match view.state {
        PlaybackState::Playing => "▶ Playing",
        PlaybackState::Paused => "⏸ Paused",
        PlaybackState::Stopped => "⏹ Stopped",
    };

    let now_playing = view
        .session
        .current_track()
        .map_or_else(|| "No track loaded".to_string(), |track| track.file_name.clone());

    let position = view
        .session
        .current_index()
        .map_or_else(|| "-".to_string(), |index| (index + 1).to_string());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(state, Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled(now_playing, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(format!(
            "{} / {}  |  Track {}/{}  |  Shuffle: {}  |  Repeat: {}",
            format_duration(Some(view.position)),
            format_duration(view.duration),
            position,
            view.session.len(),
            if view.session.is_shuffled() { "On" } else { "Off" },
            repeat_label(view.session.repeat_mode()),
        )),
    ];

    if let Some(message) = view.message {
        lines.push(Line::from(Span::styled(message, Style::default().fg(Color::Red))));
    }
    lines
}

fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "Off",
        RepeatMode::All => "All",
        RepeatMode::Single => "One",
    }
}

fn footer_text(config: &Config) -> String {
    let keys = &config.keys;
    format!(
        "{}: Play/Pause | {}: Next | {}: Prev | {}/{}: Seek ±{}s | {}: Shuffle | {}: Repeat | {}: Help | {}: Quit",
        keys.play_pause.label(),
        keys.next.label(),
        keys.prev.label(),
        keys.seek_back.label(),
        keys.seek_forward.label(),
        config.playback.seek_step,
        keys.shuffle.label(),
        keys.repeat.label(),
        keys.help.label(),
        keys.quit.label(),
    )
}

fn draw_help(frame: &mut Frame, config: &Config) {
    let keys = &config.keys;
    let entries = [
        ("Play / pause", &keys.play_pause),
        ("Next track", &keys.next),
        ("Previous track", &keys.prev),
        ("Seek forward", &keys.seek_forward),
        ("Seek back", &keys.seek_back),
        ("Toggle shuffle", &keys.shuffle),
        ("Cycle repeat", &keys.repeat),
        ("Cursor up", &keys.cursor_up),
        ("Cursor down", &keys.cursor_down),
        ("Play selected", &keys.play_selected),
        ("Remove selected", &keys.remove_selected),
        ("Help", &keys.help),
        ("Quit", &keys.quit),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(action, binding)| Line::from(format!("{action:<16} {}", binding.keys().join(", "))))
        .collect();

    let area = centered(frame.area(), 44, lines.len() as u16 + 2);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys (any key closes) "),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
