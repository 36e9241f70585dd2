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

//! Input handling for the playlist pane.
//!
//! This module maps raw terminal keyboard events to highlight navigation and
//! row activation.

use crossterm::event::{Event, KeyCode};

use crate::components::{PlaylistAction, PlaylistView, goto_last, goto_next, goto_previous};

impl PlaylistView {
    /// Handles a key event, returning an action when a row is activated.
    ///
    /// # Arguments
    ///
    /// * `event` - The terminal event.
    /// * `len` - The number of rows currently in the playlist.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<PlaylistAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => goto_next(&mut self.list_state, len),
            KeyCode::Char('k') | KeyCode::Up => goto_previous(&mut self.list_state, len),
            KeyCode::Char('g') | KeyCode::Home => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') | KeyCode::End => goto_last(&mut self.list_state, len),

            KeyCode::Enter => {
                return self
                    .highlighted()
                    .filter(|&i| i < len)
                    .map(PlaylistAction::Activate);
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_activates_highlighted_row() {
        let mut view = PlaylistView::new();
        view.process_event(&key(KeyCode::Down), 3);
        view.process_event(&key(KeyCode::Char('j')), 3);

        let action = view.process_event(&key(KeyCode::Enter), 3);

        assert!(matches!(action, Some(PlaylistAction::Activate(1))));
    }

    #[test]
    fn enter_on_empty_playlist_does_nothing() {
        let mut view = PlaylistView::new();

        assert!(view.process_event(&key(KeyCode::Enter), 0).is_none());
    }

    #[test]
    fn end_jumps_to_last_row() {
        let mut view = PlaylistView::new();

        view.process_event(&key(KeyCode::Char('G')), 4);

        assert_eq!(view.highlighted(), Some(3));
    }
}
