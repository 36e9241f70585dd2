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

//! Interactive UI components.
//!
//! Each component keeps its own widget state, maps raw key events to an
//! optional action for the application to carry out, and knows how to draw
//! itself.
//!
//! * [`PlaylistView`]: the playlist pane.
//! * [`FileBrowser`]: the popup used to pick video files to add.

mod browser;
mod playlist;

pub(crate) use browser::{BrowserAction, FileBrowser};
pub(crate) use playlist::{PlaylistAction, PlaylistView};

use ratatui::widgets::ListState;

// Moves a list highlight down, wrapping at the end.
fn goto_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i >= len - 1 { 0 } else { i + 1 },
        None => 0,
    };
    state.select(Some(i));
}

// Moves a list highlight up, wrapping at the start.
fn goto_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i == 0 { len - 1 } else { i - 1 },
        None => 0,
    };
    state.select(Some(i));
}

fn goto_last(state: &mut ListState, len: usize) {
    state.select(len.checked_sub(1));
}
