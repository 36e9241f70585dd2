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

//! UI rendering logic for the playlist pane.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    model::playlist::Playlist,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlist: &Playlist,
        state: PlayerState,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_text = format!("Playlist | {} videos", playlist.len());
        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        // The marker shows which entry the cursor is on, the highlight may be elsewhere
        let marker = match state {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => " ",
        };

        let items: Vec<ListItem> = playlist
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_current = playlist.cursor() == Some(i);
                let prefix = if is_current { marker } else { " " };
                let label_style = if is_current {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_colour)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", prefix), Style::default().fg(theme.accent_colour)),
                    Span::styled(entry.label(), label_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .style(Style::default().bg(theme.panel_colour))
            .highlight_style(Style::default().bg(theme.highlight_colour).fg(theme.text_colour));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
