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

//! MPV-backed playback engine.
//!
//! This module implements [`PlaybackEngine`] on top of `libmpv`. MPV owns
//! demuxing, decoding, audio/video sync and the video output window; this
//! type only forwards load, pause and volume requests and translates the
//! property changes MPV reports back into [`EngineEvent`]s.
//!
//! The handle lives on the UI thread. Events are drained without blocking
//! whenever the application ticks.

use std::path::Path;

use ::mpv::{EndFileReason, Event, Format, MpvHandler, MpvHandlerBuilder};
use tracing::{debug, info};

use crate::{
    error::EngineError,
    player::{EngineEvent, PlaybackEngine},
};

pub(crate) struct MpvEngine {
    handler: MpvHandler,
    // Set by load, cleared when MPV reports the file ended or failed
    loaded: bool,
    pause: bool,
}

impl MpvEngine {
    /// Creates a new MPV player instance.
    ///
    /// # Arguments
    ///
    /// * `video_output` - An optional MPV `vo` driver name, MPV picks its own
    ///   default when this is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the MPV context cannot be created or configured.
    pub(crate) fn new(video_output: Option<&str>) -> Result<Self, EngineError> {
        let mut builder =
            MpvHandlerBuilder::new().map_err(|e| EngineError::Init(format!("{:?}", e)))?;

        if let Some(vo) = video_output {
            builder
                .set_option("vo", vo)
                .map_err(|e| EngineError::Init(format!("vo={}: {:?}", vo, e)))?;
        }
        builder
            .set_option("idle", "yes")
            .map_err(|e| EngineError::Init(format!("idle: {:?}", e)))?;

        let mut handler = builder
            .build()
            .map_err(|e| EngineError::Init(format!("{:?}", e)))?;

        handler
            .observe_property::<&str>("media-title", 0)
            .map_err(|e| EngineError::command("observe media-title", e))?;
        handler
            .observe_property::<f64>("duration", 0)
            .map_err(|e| EngineError::command("observe duration", e))?;
        handler
            .observe_property::<f64>("time-pos", 0)
            .map_err(|e| EngineError::command("observe time-pos", e))?;
        handler
            .observe_property::<bool>("pause", 0)
            .map_err(|e| EngineError::command("observe pause", e))?;

        info!(?video_output, "MPV engine initialised");

        Ok(Self {
            handler,
            loaded: false,
            pause: false,
        })
    }

    fn set_pause(&mut self, pause: bool) -> Result<(), EngineError> {
        self.handler
            .set_property("pause", pause)
            .map_err(|e| EngineError::command(format!("set pause={}", pause), e))?;
        self.pause = pause;
        Ok(())
    }

    /// Drains every queued MPV event without blocking.
    fn drain_events(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        while let Some(mpv_event) = self.handler.wait_event(0.0) {
            let event = match mpv_event {
                Event::PropertyChange { name, change, .. } => match (name, change) {
                    ("media-title", Format::Str(title)) => {
                        Some(EngineEvent::TitleChanged(title.to_string()))
                    }
                    ("duration", Format::Double(duration)) => {
                        Some(EngineEvent::DurationChanged(duration))
                    }
                    ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                        Some(EngineEvent::TimeChanged(seconds))
                    }
                    ("pause", Format::Flag(pause)) => {
                        self.pause = pause;
                        None
                    }
                    _ => None,
                },
                Event::EndFile(Ok(EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                    self.loaded = false;
                    Some(EngineEvent::FileFinished)
                }
                Event::EndFile(Ok(EndFileReason::MPV_END_FILE_REASON_ERROR)) => {
                    debug!("MPV reported a playback error for the current file");
                    self.loaded = false;
                    None
                }
                _ => None,
            };

            events.extend(event);
        }

        events
    }
}

impl PlaybackEngine for MpvEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        // Anything still queued belongs to the previous file, only its
        // effect on the loaded and pause flags is kept
        let stale = self.drain_events();
        debug!(discarded = stale.len(), "Dropped events for the previous file");

        let filename = path.to_string_lossy();
        self.handler
            .command(&["loadfile", &filename, "replace"])
            .map_err(|e| EngineError::command(format!("loadfile {}", filename), e))?;
        self.loaded = true;

        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.set_pause(false)
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.set_pause(true)
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.set_pause(false)
    }

    fn is_playing(&self) -> bool {
        self.loaded && !self.pause
    }

    fn set_volume(&mut self, level: u8) -> Result<(), EngineError> {
        self.handler
            .set_property("volume", i64::from(level))
            .map_err(|e| EngineError::command(format!("set volume={}", level), e))
    }

    fn poll(&mut self) -> Vec<EngineEvent> {
        self.drain_events()
    }
}
