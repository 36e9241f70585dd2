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

//! Playback control.
//!
//! This module bridges user intents (add files, play/pause, next, previous,
//! select an entry, change the volume) to the playback engine, and keeps the
//! playlist cursor, the engine and the UI selection highlight consistent.
//!
//! # State
//!
//! The engine can only say whether it is currently playing, which does not
//! distinguish paused media from stopped or finished media. The controller
//! therefore remembers whether the last transition was an explicit pause and
//! uses that to decide between resuming and starting afresh.
//!
//! Engine failures are not translated or retried, they are logged and the
//! controller carries on as if the request succeeded.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    error::{EngineError, PlaylistError},
    model::playlist::Playlist,
    player::{PlaybackEngine, PlayerState},
};

pub(crate) const MAX_VOLUME: u8 = 100;

pub(crate) struct PlaybackController<E: PlaybackEngine> {
    engine: E,
    playlist: Playlist,
    paused: bool,
    volume: u8,
    selected: Option<usize>,
    // Bumped on every load, including reloads of the same entry
    loads: u64,
}

impl<E: PlaybackEngine> PlaybackController<E> {
    pub(crate) fn new(engine: E, volume: u8) -> Self {
        Self {
            engine,
            playlist: Playlist::new(),
            paused: false,
            volume,
            selected: None,
            loads: 0,
        }
    }

    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The playlist row that should carry the selection highlight.
    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// How many times media has been loaded.
    ///
    /// The UI compares this against the last value it saw to tell that a
    /// load happened, even when the same entry was reloaded.
    pub(crate) fn loads(&self) -> u64 {
        self.loads
    }

    pub(crate) fn volume(&self) -> u8 {
        self.volume
    }

    pub(crate) fn state(&self) -> PlayerState {
        if self.engine.is_playing() {
            PlayerState::Playing
        } else if self.paused {
            PlayerState::Paused
        } else {
            PlayerState::Stopped
        }
    }

    pub(crate) fn add<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.playlist.len();
        self.playlist.add(paths);
        info!(added = self.playlist.len() - before, total = self.playlist.len(), "Playlist updated");
    }

    /// Loads and plays the entry under the cursor, from the beginning.
    ///
    /// Does nothing if the playlist is empty.
    pub(crate) fn play_current(&mut self) {
        let Some(index) = self.playlist.cursor() else {
            debug!("Nothing to play, playlist is empty");
            return;
        };
        let Some(entry) = self.playlist.current_entry() else {
            return;
        };

        info!(index, path = %entry.path().display(), "Loading media");

        let path = entry.path().to_path_buf();
        report(self.engine.load(&path));
        report(self.engine.play());
        report(self.engine.set_volume(self.volume));

        self.paused = false;
        self.selected = Some(index);
        self.loads += 1;
    }

    /// Pauses, resumes or starts playback depending on what happened last.
    pub(crate) fn toggle_play_pause(&mut self) {
        if self.engine.is_playing() {
            report(self.engine.pause());
            self.paused = true;
        } else if self.paused {
            report(self.engine.resume());
            self.paused = false;
        } else {
            self.play_current();
        }
    }

    pub(crate) fn next(&mut self) {
        if self.playlist.advance() {
            self.play_current();
        } else {
            debug!("Already at the last entry");
        }
    }

    pub(crate) fn previous(&mut self) {
        if self.playlist.retreat() {
            self.play_current();
        } else {
            debug!("Already at the first entry");
        }
    }

    /// Jumps to the entry at `index` and plays it.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::InvalidIndex`] if `index` is not in the
    /// playlist, in which case the engine is not touched.
    pub(crate) fn select_index(&mut self, index: usize) -> Result<(), PlaylistError> {
        self.playlist.set_cursor(index)?;
        self.play_current();
        Ok(())
    }

    /// Forwards an already clamped volume level to the engine.
    pub(crate) fn set_volume(&mut self, level: u8) {
        self.volume = level;
        report(self.engine.set_volume(level));
    }

    /// Changes the volume by `delta`, clamped to the valid range.
    pub(crate) fn adjust_volume(&mut self, delta: i32) {
        let level = (i32::from(self.volume) + delta).clamp(0, i32::from(MAX_VOLUME));
        self.set_volume(level as u8);
    }
}

fn report(result: Result<(), EngineError>) {
    if let Err(e) = result {
        warn!("Playback engine error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::player::fake::FakeEngine;

    fn controller_with(names: &[&str]) -> PlaybackController<FakeEngine> {
        let mut controller = PlaybackController::new(FakeEngine::default(), 70);
        controller.add(names.iter().map(|name| PathBuf::from(*name)));
        controller
    }

    #[test]
    fn play_current_selects_cursor_and_applies_volume() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.playlist.set_cursor(1).unwrap();

        controller.play_current();

        assert_eq!(controller.selected(), controller.playlist().cursor());
        assert_eq!(controller.selected(), Some(1));
        assert_eq!(controller.engine.loaded.as_deref(), Some(Path::new("/v/b.mp4")));
        assert_eq!(controller.engine.volume, Some(70));
        assert_eq!(controller.state(), PlayerState::Playing);
    }

    #[test]
    fn play_current_always_reloads() {
        let mut controller = controller_with(&["/v/a.mp4"]);

        controller.play_current();
        controller.play_current();

        assert_eq!(controller.engine.load_count, 2);
    }

    #[test]
    fn every_load_is_counted() {
        let mut controller = controller_with(&["/v/a.mp4"]);
        assert_eq!(controller.loads(), 0);

        controller.play_current();
        controller.toggle_play_pause();
        assert_eq!(controller.loads(), 1);

        controller.select_index(0).unwrap();
        assert_eq!(controller.loads(), 2);
    }

    #[test]
    fn toggle_twice_resumes_without_reload() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.play_current();
        assert_eq!(controller.engine.load_count, 1);

        controller.toggle_play_pause();
        assert_eq!(controller.state(), PlayerState::Paused);
        assert!(controller.paused);

        controller.toggle_play_pause();
        assert_eq!(controller.state(), PlayerState::Playing);
        assert!(!controller.paused);
        assert_eq!(controller.engine.load_count, 1);
    }

    #[test]
    fn toggle_from_idle_starts_fresh() {
        let mut controller = controller_with(&["/v/a.mp4"]);

        controller.toggle_play_pause();

        assert_eq!(controller.engine.load_count, 1);
        assert_eq!(controller.state(), PlayerState::Playing);
        assert_eq!(controller.selected(), Some(0));
    }

    #[test]
    fn toggle_after_natural_end_restarts() {
        let mut controller = controller_with(&["/v/a.mp4"]);
        controller.play_current();
        controller.engine.finish();
        assert_eq!(controller.state(), PlayerState::Stopped);

        controller.toggle_play_pause();

        assert_eq!(controller.engine.load_count, 2);
        assert_eq!(controller.state(), PlayerState::Playing);
    }

    #[test]
    fn next_at_last_entry_changes_nothing() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.select_index(1).unwrap();
        controller.toggle_play_pause();

        let load_count = controller.engine.load_count;
        controller.next();

        assert_eq!(controller.playlist().cursor(), Some(1));
        assert_eq!(controller.engine.load_count, load_count);
        assert_eq!(controller.state(), PlayerState::Paused);
    }

    #[test]
    fn previous_at_first_entry_changes_nothing() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.play_current();

        controller.previous();

        assert_eq!(controller.playlist().cursor(), Some(0));
        assert_eq!(controller.engine.load_count, 1);
    }

    #[test]
    fn navigation_scenario_restarts_as_playing() {
        let mut controller = controller_with(&["/v/A.mp4", "/v/B.mp4", "/v/C.mp4"]);
        assert_eq!(controller.playlist().cursor(), Some(0));

        controller.next();
        assert_eq!(controller.playlist().cursor(), Some(1));
        assert_eq!(controller.engine.loaded.as_deref(), Some(Path::new("/v/B.mp4")));
        assert_eq!(controller.state(), PlayerState::Playing);

        controller.toggle_play_pause();
        assert_eq!(controller.state(), PlayerState::Paused);
        assert!(controller.paused);
        assert_eq!(controller.engine.load_count, 1);

        controller.next();
        assert_eq!(controller.playlist().cursor(), Some(2));
        assert_eq!(controller.engine.loaded.as_deref(), Some(Path::new("/v/C.mp4")));
        assert_eq!(controller.state(), PlayerState::Playing);
        assert!(!controller.paused);

        controller.next();
        assert_eq!(controller.playlist().cursor(), Some(2));
        assert_eq!(controller.engine.load_count, 2);
        assert_eq!(controller.state(), PlayerState::Playing);
    }

    #[test]
    fn empty_playlist_operations_are_silent() {
        let mut controller = controller_with(&[]);

        controller.toggle_play_pause();
        controller.next();
        controller.previous();
        controller.play_current();

        assert_eq!(controller.playlist().cursor(), None);
        assert_eq!(controller.selected(), None);
        assert_eq!(controller.engine.load_count, 0);
        assert_eq!(controller.state(), PlayerState::Stopped);
    }

    #[test]
    fn volume_is_reapplied_on_every_load() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.set_volume(40);
        assert_eq!(controller.engine.volume, Some(40));

        controller.play_current();
        assert_eq!(controller.engine.volume, Some(40));

        controller.engine.volume = Some(100);
        controller.next();
        assert_eq!(controller.engine.volume, Some(40));
        assert_eq!(controller.engine.volume_at_load, vec![Some(40), Some(100)]);
    }

    #[test]
    fn set_volume_leaves_cursor_and_state_alone() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.play_current();
        controller.toggle_play_pause();

        controller.set_volume(15);

        assert_eq!(controller.volume(), 15);
        assert_eq!(controller.playlist().cursor(), Some(0));
        assert_eq!(controller.state(), PlayerState::Paused);
        assert_eq!(controller.engine.load_count, 1);
    }

    #[test]
    fn adjust_volume_clamps() {
        let mut controller = controller_with(&[]);

        controller.adjust_volume(45);
        assert_eq!(controller.volume(), 100);

        controller.adjust_volume(-150);
        assert_eq!(controller.volume(), 0);
        assert_eq!(controller.engine.volume, Some(0));
    }

    #[test]
    fn select_index_plays_even_when_already_current() {
        let mut controller = controller_with(&["/v/a.mp4", "/v/b.mp4"]);
        controller.play_current();

        controller.select_index(0).unwrap();

        assert_eq!(controller.engine.load_count, 2);
        assert_eq!(controller.selected(), Some(0));
    }

    #[test]
    fn select_index_out_of_range_leaves_engine_alone() {
        let mut controller = controller_with(&["/v/a.mp4"]);

        let result = controller.select_index(3);

        assert_eq!(result, Err(PlaylistError::InvalidIndex { index: 3, len: 1 }));
        assert_eq!(controller.engine.load_count, 0);
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn engine_failures_are_not_surfaced() {
        let mut controller = controller_with(&["/v/missing.mp4"]);
        controller.engine.fail_loads = true;

        controller.play_current();

        assert_eq!(controller.engine.load_count, 1);
        assert_eq!(controller.selected(), Some(0));
        assert_eq!(controller.state(), PlayerState::Stopped);
    }
}
