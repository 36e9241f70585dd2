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

//! Domain models and core data structures.
//!
//! This module defines the playlist entry, the playlist store that orders
//! entries for playback, and the filesystem helpers that discover video files
//! to add to it.

pub(crate) mod playlist;
pub(crate) mod scan;

use std::path::{Path, PathBuf};

/// A single media file queued in the playlist.
///
/// The label is derived once from the path and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistEntry {
    path: PathBuf,
    label: String,
}

impl PlaylistEntry {
    pub(crate) fn new(path: PathBuf) -> Self {
        let label = Self::label_for(&path);
        Self { path, label }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// The base file name, as shown in the playlist pane.
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    fn label_for(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}
