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

//! File browser state management.
//!
//! This module provides state for the popup used to pick videos to add to the
//! playlist. It lists the sub-directories of the current directory followed
//! by the files whose extension looks like a video, and tracks a
//! multi-selection of files to commit in one go.

mod event;
mod render;

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use ratatui::widgets::ListState;

use crate::model::scan::is_video_file;

pub(crate) enum BrowserAction {
    /// Add these files or directories to the playlist.
    Add(Vec<PathBuf>),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BrowserEntry {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
    pub(crate) is_dir: bool,
}

pub(crate) struct FileBrowser {
    pub(crate) is_active: bool,
    pub(crate) dir: PathBuf,
    pub(crate) entries: Vec<BrowserEntry>,
    pub(crate) selection: HashSet<PathBuf>,
    pub(crate) list_state: ListState,
    extensions: Vec<String>,
}

impl FileBrowser {
    pub(crate) fn new(dir: PathBuf, extensions: Vec<String>) -> Self {
        Self {
            is_active: false,
            dir,
            entries: Vec::new(),
            selection: HashSet::new(),
            list_state: ListState::default(),
            extensions,
        }
    }

    /// Shows the browser, re-reading the current directory.
    pub(crate) fn open(&mut self) -> io::Result<()> {
        let dir = self.dir.clone();
        self.change_dir(&dir)?;
        self.is_active = true;
        Ok(())
    }

    pub(crate) fn close(&mut self) {
        self.is_active = false;
        self.selection.clear();
    }

    /// Lists `dir`, replacing the current entries and clearing the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, in which case the
    /// browser keeps showing the previous directory.
    pub(crate) fn change_dir(&mut self, dir: &Path) -> io::Result<()> {
        let entries = Self::read_entries(dir, &self.extensions)?;

        self.dir = dir.to_path_buf();
        self.entries = entries;
        self.selection.clear();
        self.list_state
            .select((!self.entries.is_empty()).then_some(0));

        Ok(())
    }

    pub(crate) fn parent_dir(&mut self) -> io::Result<()> {
        match self.dir.parent().map(Path::to_path_buf) {
            Some(parent) => self.change_dir(&parent),
            None => Ok(()),
        }
    }

    pub(crate) fn highlighted(&self) -> Option<&BrowserEntry> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }

    fn toggle_select_current(&mut self) {
        if let Some(entry) = self.highlighted().filter(|e| !e.is_dir) {
            let path = entry.path.clone();
            if !self.selection.insert(path.clone()) {
                self.selection.remove(&path);
            }
        }
    }

    /// The selected files, in the order they are listed.
    pub(crate) fn selected_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| self.selection.contains(&e.path))
            .map(|e| e.path.clone())
            .collect()
    }

    fn read_entries(dir: &Path, extensions: &[String]) -> io::Result<Vec<BrowserEntry>> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') {
                continue;
            }

            if path.is_dir() {
                dirs.push(BrowserEntry { path, name, is_dir: true });
            } else if is_video_file(&path, extensions) {
                files.push(BrowserEntry { path, name, is_dir: false });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.extend(files);

        Ok(dirs)
    }
}
