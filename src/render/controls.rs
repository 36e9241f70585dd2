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

//! Render the transport controls panel.
//!
//! Lists the key bound to each control next to its icon, followed by the
//! volume level.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    controller::MAX_VOLUME,
    player::PlaybackEngine,
    render::icons::{ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_VOLUME},
};

pub(crate) fn draw_controls<E: PlaybackEngine>(f: &mut Frame, area: Rect, app: &App<E>) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let play_pause = format!("{}{}", ICON_PLAY, ICON_PAUSE);
    let buttons = [
        ("+", "Add Videos", "o"),
        (ICON_PREV, "Prev", "p"),
        (play_pause.as_str(), "Play / Pause", "spc"),
        (ICON_NEXT, "Next", "n"),
        (":", "Command", ":"),
    ];

    let lines: Vec<Line> = buttons
        .iter()
        .map(|(icon, label, key)| {
            Line::from(vec![
                Span::styled(format!("{:<3}", icon), Style::default().fg(theme.accent_colour)),
                Span::styled(format!("{:<13}", label), Style::default().fg(theme.text_colour)),
                Span::styled(format!("[{}]", key), Style::default().fg(theme.border_colour)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let volume = app.controller.volume();

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} Volume ", ICON_VOLUME), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}%", volume), Style::default().fg(theme.accent_colour)),
        ]))
        .style(Style::default().fg(theme.text_colour)),
        chunks[2],
    );

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(f64::from(volume) / f64::from(MAX_VOLUME))
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, chunks[3]);
}
