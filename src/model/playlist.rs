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

//! Playlist store.
//!
//! This module provides the ordered, append-only list of entries queued for
//! playback together with the navigation cursor. Insertion order is display
//! order is navigation order.

use std::path::PathBuf;

use crate::{error::PlaylistError, model::PlaylistEntry};

#[derive(Debug, Default)]
pub(crate) struct Playlist {
    entries: Vec<PlaylistEntry>,
    // None until the first entry is added, then always a valid index
    cursor: Option<usize>,
}

impl Playlist {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends each path as a new entry, preserving argument order.
    ///
    /// Paths are neither deduplicated nor checked for existence; a bad file
    /// only shows up when the engine tries to play it.
    pub(crate) fn add<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.entries.extend(paths.into_iter().map(PlaylistEntry::new));

        if self.cursor.is_none() && !self.entries.is_empty() {
            self.cursor = Some(0);
        }
    }

    pub(crate) fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub(crate) fn current_entry(&self) -> Option<&PlaylistEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Moves the cursor to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::InvalidIndex`] if `index` is not a valid
    /// position, leaving the cursor where it was.
    pub(crate) fn set_cursor(&mut self, index: usize) -> Result<(), PlaylistError> {
        if index >= self.entries.len() {
            return Err(PlaylistError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }

        self.cursor = Some(index);
        Ok(())
    }

    /// Steps the cursor forward, returning `false` at the last entry.
    pub(crate) fn advance(&mut self) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps the cursor back, returning `false` at the first entry.
    pub(crate) fn retreat(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }
}
