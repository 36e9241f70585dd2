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

//! UI rendering logic for the file browser popup.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::FileBrowser,
    render::icons::{ICON_FOLDER, ICON_SELECTED},
    theme::Theme,
};

impl FileBrowser {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered(area, 80, 80);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Add Videos ")
            .style(Style::default().bg(theme.panel_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.dir.display().to_string())
                .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let marker = if self.selection.contains(&entry.path) {
                    ICON_SELECTED
                } else if entry.is_dir {
                    ICON_FOLDER
                } else {
                    " "
                };

                let name = if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(theme.accent_colour)),
                    Span::styled(name, Style::default().fg(theme.text_colour)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_colour).fg(theme.text_colour));
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let footer = format!(
            "space select | enter open/add | a add | h up | esc close | {} selected",
            self.selection.len()
        );
        f.render_widget(
            Paragraph::new(footer).style(Style::default().fg(theme.border_colour)),
            chunks[2],
        );
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
