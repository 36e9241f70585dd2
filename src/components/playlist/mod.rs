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

//! Playlist pane state.
//!
//! The pane mirrors the playlist one row per entry. Its highlight can be
//! moved freely with the keyboard, and is snapped back to the playing entry
//! whenever the controller loads media.

mod event;
mod render;

use ratatui::widgets::ListState;

pub(crate) enum PlaylistAction {
    /// Play the entry at this row.
    Activate(usize),
}

#[derive(Default)]
pub(crate) struct PlaylistView {
    pub(crate) list_state: ListState,
    // Controller load count last pushed into the highlight
    synced_loads: u64,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Pushes the controller's selection into the highlight.
    ///
    /// The highlight snaps to `selected` whenever `loads` shows that media
    /// was loaded since the last sync, and is otherwise left where the
    /// keyboard put it.
    pub(crate) fn sync_selection(&mut self, selected: Option<usize>, loads: u64, len: usize) {
        if loads != self.synced_loads {
            self.synced_loads = loads;
            if selected.is_some() {
                self.list_state.select(selected);
            }
        }

        if self.list_state.selected().is_none() && len > 0 {
            self.list_state.select(Some(0));
        }
    }
}
