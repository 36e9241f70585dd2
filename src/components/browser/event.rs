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

//! Input handling for the file browser.
//!
//! This module maps raw terminal keyboard events to directory navigation,
//! file selection and the actions that leave the browser.

use std::io;

use crossterm::event::{Event, KeyCode};

use crate::components::{BrowserAction, FileBrowser, goto_last, goto_next, goto_previous};

impl FileBrowser {
    /// Handles a key event while the browser is open.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory the user navigates into cannot be read.
    pub(crate) fn process_event(&mut self, event: &Event) -> io::Result<Option<BrowserAction>> {
        let Event::Key(key_event) = event else {
            return Ok(None);
        };

        let len = self.entries.len();

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(Some(BrowserAction::Close)),

            KeyCode::Char('j') | KeyCode::Down => goto_next(&mut self.list_state, len),
            KeyCode::Char('k') | KeyCode::Up => goto_previous(&mut self.list_state, len),
            KeyCode::Char('g') | KeyCode::Home => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') | KeyCode::End => goto_last(&mut self.list_state, len),

            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => self.parent_dir()?,
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(dir) = self.highlighted().filter(|e| e.is_dir).map(|e| e.path.clone()) {
                    self.change_dir(&dir)?;
                }
            }

            KeyCode::Char(' ') => {
                self.toggle_select_current();
                goto_next(&mut self.list_state, len);
            }

            // Add whatever is highlighted, a directory adds everything beneath it
            KeyCode::Char('a') => {
                return Ok(self
                    .highlighted()
                    .map(|e| BrowserAction::Add(vec![e.path.clone()])));
            }

            KeyCode::Enter => {
                if !self.selection.is_empty() {
                    return Ok(Some(BrowserAction::Add(self.selected_paths())));
                }

                match self.highlighted().cloned() {
                    Some(entry) if entry.is_dir => self.change_dir(&entry.path)?,
                    Some(entry) => return Ok(Some(BrowserAction::Add(vec![entry.path]))),
                    None => {}
                }
            }

            _ => {}
        }

        Ok(None)
    }
}
