// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the now-playing bar.
//!
//! This module renders the current entry, its playback state, elapsed and
//! remaining time, and a progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{PlaybackEngine, PlayerState},
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    util::format::format_time,
};

/// Renders the now-playing widget including entry info and progress.
pub(crate) fn draw_player<E: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<E>) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let state = app.controller.state();
    let icon = match state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let entry_label = app.controller.playlist().current_entry().map(|entry| entry.label());
    let label = match (state, app.now_playing.title.as_deref()) {
        (PlayerState::Stopped, _) | (_, None) => entry_label.unwrap_or("Nothing loaded"),
        (_, Some(title)) => title,
    };

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    if state != PlayerState::Stopped || app.now_playing.time.is_some() {
        let duration = app.now_playing.duration.unwrap_or(0.0) as u64;
        let time = app.now_playing.time.unwrap_or(0.0) as u64;
        let remaining = duration.saturating_sub(time);

        let time_line = Line::from(vec![
            Span::styled(format_time(time), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
            Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::styled(format_time(duration), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
            Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::styled(format_time(remaining), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
            Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        ]);

        f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);
    }

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(theme.error_colour)),
            chunks[1],
        );
    }

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(app.now_playing.position().unwrap_or(0.0))
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[3]);
}
