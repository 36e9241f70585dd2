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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod controls;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    player::PlaybackEngine,
    render::{commander::draw_commander, controls::draw_controls, player::draw_player},
};

const TITLE: &str = "Reel Video Player";

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into a title, the playlist and
///   controls, the now-playing bar and the command line.
/// * **State Mapping**: Converting the playlist and playback state into
///   widgets.
/// * **Styling**: Applying colors defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions).
pub(crate) fn draw<E: PlaybackEngine>(f: &mut Frame, app: &mut App<E>) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: title, main, player, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.text_colour).add_modifier(Modifier::BOLD)),
        outer[0],
    );

    // Main layout: playlist, controls
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .horizontal_margin(1)
        .split(outer[1]);

    let state = app.controller.state();
    app.playlist_view
        .draw(f, main[0], app.controller.playlist(), state, &app.theme);

    draw_controls(f, main[1], app);

    draw_player(f, outer[2], app);

    draw_commander(f, outer[3], app);

    if app.file_browser.is_active {
        app.file_browser.draw(f, area, &app.theme);
    }
}
