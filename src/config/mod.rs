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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::controller::MAX_VOLUME;

pub(crate) const CONFIG_NAME: &str = "reelui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) volume: u8,
    pub(crate) volume_step: u8,
    pub(crate) video_extensions: Vec<String>,
    pub(crate) browse_dir: Option<PathBuf>,
    pub(crate) video_output: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: 70,
            volume_step: 5,
            video_extensions: ["mp4", "avi", "mkv", "mov"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            browse_dir: None,
            video_output: None,
        }
    }
}

impl AppConfig {
    /// The starting volume, clamped in case the file was edited by hand.
    pub(crate) fn initial_volume(&self) -> u8 {
        self.volume.min(MAX_VOLUME)
    }

    /// Records the volume the session ended on, if the user changed it.
    ///
    /// A starting volume given on the command line only lasts for the
    /// session, so it is not persisted unless adjusted afterwards.
    pub(crate) fn record_session_volume(&mut self, start: u8, end: u8) {
        if end != start {
            self.volume = end;
        }
    }

    /// The directory the file browser opens in.
    pub(crate) fn start_dir(&self) -> PathBuf {
        self.browse_dir
            .clone()
            .filter(|dir| dir.is_dir())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Where the configuration file lives, if the platform has a config
/// directory.
pub(crate) fn config_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None).ok()
}

/// The directory holding the configuration file, also used for the log.
pub(crate) fn config_dir() -> Option<PathBuf> {
    config_path().and_then(|path| path.parent().map(Path::to_path_buf))
}

/// Loads the configuration at `path`, creating it with defaults if missing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse. The file is
/// left untouched in that case.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}

pub(crate) fn save_config(path: &Path, cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}
