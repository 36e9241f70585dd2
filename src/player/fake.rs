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

//! In-memory playback engine for unit tests.
//!
//! Records what it was asked to do so tests can check the controller's
//! branching without a real media stack.

use std::path::{Path, PathBuf};

use crate::{
    error::EngineError,
    player::{EngineEvent, PlaybackEngine},
};

#[derive(Default)]
pub(crate) struct FakeEngine {
    pub(crate) loaded: Option<PathBuf>,
    pub(crate) load_count: usize,
    pub(crate) playing: bool,
    pub(crate) volume: Option<u8>,
    pub(crate) volume_at_load: Vec<Option<u8>>,
    pub(crate) fail_loads: bool,
    pub(crate) events: Vec<EngineEvent>,
}

impl FakeEngine {
    /// Simulates the media reaching its natural end.
    pub(crate) fn finish(&mut self) {
        self.playing = false;
        self.loaded = None;
        self.events.push(EngineEvent::FileFinished);
    }
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        self.volume_at_load.push(self.volume);
        self.load_count += 1;
        if self.fail_loads {
            return Err(EngineError::command("loadfile", "no such file"));
        }
        self.loaded = Some(path.to_path_buf());
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.playing = self.loaded.is_some();
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.playing = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.playing = self.loaded.is_some();
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_volume(&mut self, level: u8) -> Result<(), EngineError> {
        self.volume = Some(level);
        Ok(())
    }

    fn poll(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}
