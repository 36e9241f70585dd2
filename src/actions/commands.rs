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

//! Application command processing.
//!
//! This module implements the command pattern used to turn user intents from
//! any source (key bindings, the command line, the file browser, program
//! arguments) into controller calls. Commands run synchronously on the main
//! thread, straight after the event that produced them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{App, actions::events::AppEvent, model::scan, player::PlaybackEngine};

#[derive(Debug)]
pub(crate) enum AppCommand {
    AddPaths(Vec<PathBuf>),
    OpenBrowser,
    TogglePlayPause,
    Next,
    Previous,
    SelectIndex(usize),
    SetVolume(u8),
    AdjustVolume(i32),
    ExitApplication,
}

/// Carries out a single command against the application state.
///
/// # Errors
///
/// Returns an error if a command cannot be carried out, for example a
/// directory that cannot be listed or a playlist row that does not exist.
/// Playback engine failures are not errors at this level.
pub(crate) fn handle_command<E: PlaybackEngine>(app: &mut App<E>, command: AppCommand) -> Result<()> {
    match command {
        AppCommand::AddPaths(paths) => {
            let videos = scan::expand_paths(paths, &app.config.video_extensions);
            if videos.is_empty() {
                app.status = Some("No videos found".to_string());
            } else {
                app.status = Some(format!("Added {} videos", videos.len()));
                app.controller.add(videos);
            }
        }

        AppCommand::OpenBrowser => {
            app.file_browser
                .open()
                .with_context(|| format!("Cannot open {}", app.file_browser.dir.display()))?;
        }

        AppCommand::TogglePlayPause => app.controller.toggle_play_pause(),
        AppCommand::Next => app.controller.next(),
        AppCommand::Previous => app.controller.previous(),

        AppCommand::SelectIndex(index) => app.controller.select_index(index)?,

        AppCommand::SetVolume(level) => app.controller.set_volume(level),
        AppCommand::AdjustVolume(delta) => app.controller.adjust_volume(delta),

        AppCommand::ExitApplication => {
            info!("Exit requested");
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}
