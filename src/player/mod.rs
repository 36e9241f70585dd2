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

//! Playback engine abstraction.
//!
//! This module defines the narrow capability surface the application needs
//! from a media playback engine. Decoding, rendering and audio output all
//! happen inside the engine; the application only loads media, starts,
//! pauses and resumes it, and sets the output volume.
//!
//! The production implementation is [`mpv_engine::MpvEngine`], backed by `libmpv`.

#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod mpv_engine;

use std::path::Path;

use crate::error::EngineError;

/// Represents the current playback status of the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Notifications drained from the engine on each tick.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EngineEvent {
    TitleChanged(String),
    DurationChanged(f64),
    TimeChanged(f64),
    FileFinished,
}

/// What the engine last reported about the loaded media.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct NowPlaying {
    pub(crate) title: Option<String>,
    pub(crate) duration: Option<f64>,
    pub(crate) time: Option<f64>,
}

impl NowPlaying {
    pub(crate) fn apply(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::TitleChanged(title) => self.title = Some(title),
            EngineEvent::DurationChanged(duration) => self.duration = Some(duration),
            EngineEvent::TimeChanged(seconds) => self.time = Some(seconds),
            EngineEvent::FileFinished => self.time = self.duration,
        }
    }

    /// Playback progress as a ratio in `[0, 1]`, if the duration is known.
    pub(crate) fn position(&self) -> Option<f64> {
        match (self.time, self.duration) {
            (Some(time), Some(duration)) if duration > 0.0 => Some((time / duration).clamp(0.0, 1.0)),
            _ => None,
        }
    }
}

/// The control surface of an external playback engine.
pub(crate) trait PlaybackEngine {
    /// Loads the media at `path`, replacing anything currently loaded.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Starts playback of freshly loaded media.
    fn play(&mut self) -> Result<(), EngineError>;

    fn pause(&mut self) -> Result<(), EngineError>;

    /// Continues paused media from where it stopped.
    fn resume(&mut self) -> Result<(), EngineError>;

    /// Whether media is loaded and actively playing.
    ///
    /// This cannot tell paused media apart from stopped or finished media.
    fn is_playing(&self) -> bool;

    /// Sets the output volume as a percentage.
    fn set_volume(&mut self, level: u8) -> Result<(), EngineError>;

    /// Drains pending engine notifications.
    fn poll(&mut self) -> Vec<EngineEvent> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_progress_from_engine_events() {
        let mut now_playing = NowPlaying::default();
        assert_eq!(now_playing.position(), None);

        now_playing.apply(EngineEvent::TitleChanged("beach.mp4".to_string()));
        now_playing.apply(EngineEvent::DurationChanged(200.0));
        now_playing.apply(EngineEvent::TimeChanged(50.0));

        assert_eq!(now_playing.title.as_deref(), Some("beach.mp4"));
        assert_eq!(now_playing.position(), Some(0.25));
    }

    #[test]
    fn finished_file_shows_full_progress() {
        let mut now_playing = NowPlaying::default();
        now_playing.apply(EngineEvent::DurationChanged(90.0));
        now_playing.apply(EngineEvent::TimeChanged(89.5));

        now_playing.apply(EngineEvent::FileFinished);

        assert_eq!(now_playing.position(), Some(1.0));
    }

    #[test]
    fn zero_duration_has_no_position() {
        let now_playing = NowPlaying {
            title: None,
            duration: Some(0.0),
            time: Some(3.0),
        };

        assert_eq!(now_playing.position(), None);
    }
}
