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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard, command line), periodic
//! ticks that poll the playback engine, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    carrying out commands against the playback controller.
//! 3. **Render**: After each event is processed, the controller's selection
//!    is pushed into the playlist pane and the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, warn};

use crate::{
    App,
    actions::commands::{AppCommand, handle_command},
    components::{BrowserAction, PlaylistAction},
    player::{NowPlaying, PlaybackEngine},
    render::draw,
};

const FINE_VOLUME_DELTA: i32 = 1;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Command(AppCommand),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if a helper thread reports a fatal error or the terminal
/// cannot be drawn.
pub(crate) fn process_events<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<E>,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            event => process_event(app, event)?,
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single non-terminal event to the application state, followed by
/// the explicit sync of controller state into the UI.
pub(crate) fn process_event<E: PlaybackEngine>(app: &mut App<E>, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Command(command) => run_command(app, command),
        AppEvent::Tick => {
            for engine_event in app.controller.engine_mut().poll() {
                debug!(?engine_event, "Engine event");
                app.now_playing.apply(engine_event);
            }
        }
        AppEvent::Error(message) => app.status = Some(message),
        AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    // Whatever the engine reported belongs to the media that was replaced
    let loads = app.controller.loads();
    if loads != app.seen_loads {
        app.seen_loads = loads;
        app.now_playing = NowPlaying::default();
    }

    let playlist_len = app.controller.playlist().len();
    app.playlist_view
        .sync_selection(app.controller.selected(), loads, playlist_len);

    Ok(())
}

/// Carries out a command, reporting any failure on the status line.
fn run_command<E: PlaybackEngine>(app: &mut App<E>, command: AppCommand) {
    if let Err(e) = handle_command(app, command) {
        warn!("Command failed: {:#}", e);
        app.status = Some(format!("{:#}", e));
    }
}

/// Hides the file browser along with any message it left on the status line.
fn close_browser<E: PlaybackEngine>(app: &mut App<E>) {
    app.file_browser.close();
    app.status = None;
}

/// Maps keyboard input to application commands.
///
/// The command line gets first refusal on every key, then the file browser
/// when it is open, then the playlist pane, and finally the global
/// transport bindings.
///
/// # Errors
///
/// Returns an error if an event cannot be delivered to the event loop.
fn process_key_event<E: PlaybackEngine>(app: &mut App<E>, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    app.status = None;

    if app.file_browser.is_active {
        match app.file_browser.process_event(&event) {
            Ok(Some(BrowserAction::Add(paths))) => {
                close_browser(app);
                run_command(app, AppCommand::AddPaths(paths));
            }
            Ok(Some(BrowserAction::Close)) => close_browser(app),
            Ok(None) => {}
            Err(e) => app.status = Some(format!("Cannot open directory: {}", e)),
        }
        return Ok(());
    }

    let playlist_len = app.controller.playlist().len();
    if let Some(PlaylistAction::Activate(index)) = app.playlist_view.process_event(&event, playlist_len) {
        run_command(app, AppCommand::SelectIndex(index));
        return Ok(());
    }

    let volume_step = i32::from(app.config.volume_step);

    let command = match key.code {
        KeyCode::Char('q') => AppCommand::ExitApplication,

        KeyCode::Char('o') | KeyCode::Char('a') => AppCommand::OpenBrowser,

        KeyCode::Char(' ') => AppCommand::TogglePlayPause,
        KeyCode::Char('n') | KeyCode::Right => AppCommand::Next,
        KeyCode::Char('p') | KeyCode::Left => AppCommand::Previous,

        KeyCode::Char('-') => AppCommand::AdjustVolume(-FINE_VOLUME_DELTA),
        KeyCode::Char('=') => AppCommand::AdjustVolume(FINE_VOLUME_DELTA),
        KeyCode::Char('_') => AppCommand::AdjustVolume(-volume_step),
        KeyCode::Char('+') => AppCommand::AdjustVolume(volume_step),

        _ => return Ok(()),
    };

    run_command(app, command);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        config::AppConfig,
        player::{EngineEvent, PlayerState, fake::FakeEngine},
    };

    fn press(app: &mut App<FakeEngine>, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        process_event(app, AppEvent::Key(key)).unwrap();
    }

    fn app_with(names: &[&str]) -> App<FakeEngine> {
        let mut app = App::new(AppConfig::default(), FakeEngine::default(), 70);
        app.controller.add(names.iter().map(|name| PathBuf::from(*name)));
        app
    }

    #[test]
    fn enter_plays_highlighted_row_and_highlight_follows() {
        let mut app = app_with(&["/v/a.mp4", "/v/b.mp4", "/v/c.mp4"]);
        process_event(&mut app, AppEvent::Tick).unwrap();
        assert_eq!(app.playlist_view.highlighted(), Some(0));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.selected(), Some(2));
        assert_eq!(app.controller.engine_mut().loaded.as_deref(), Some(Path::new("/v/c.mp4")));

        press(&mut app, KeyCode::Char('p'));

        assert_eq!(app.controller.selected(), Some(1));
        assert_eq!(app.playlist_view.highlighted(), Some(1));
    }

    #[test]
    fn space_toggles_without_reload() {
        let mut app = app_with(&["/v/a.mp4"]);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state(), PlayerState::Paused);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state(), PlayerState::Playing);
        assert_eq!(app.controller.engine_mut().load_count, 1);
    }

    #[test]
    fn volume_keys_use_fine_and_coarse_steps() {
        let mut app = app_with(&[]);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('='));
        assert_eq!(app.controller.volume(), 76);

        press(&mut app, KeyCode::Char('_'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.controller.volume(), 70);
    }

    #[test]
    fn keys_on_empty_playlist_are_silent() {
        let mut app = app_with(&[]);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.playlist().cursor(), None);
        assert_eq!(app.controller.engine_mut().load_count, 0);
        assert_eq!(app.status, None);
    }

    #[test]
    fn tick_applies_engine_events() {
        let mut app = app_with(&["/v/a.mp4"]);
        press(&mut app, KeyCode::Char(' '));
        app.controller.engine_mut().events.push(EngineEvent::DurationChanged(10.0));
        app.controller.engine_mut().finish();

        process_event(&mut app, AppEvent::Tick).unwrap();

        assert_eq!(app.now_playing.position(), Some(1.0));
        assert_eq!(app.controller.state(), PlayerState::Stopped);
    }

    #[test]
    fn command_errors_reach_status_line() {
        let mut app = app_with(&["/v/a.mp4"]);

        process_event(&mut app, AppEvent::Command(AppCommand::SelectIndex(5))).unwrap();

        assert_eq!(
            app.status.as_deref(),
            Some("playlist index 5 is out of range for 1 entries")
        );
    }

    #[test]
    fn browser_captures_keys_while_open() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mov"), b"").unwrap();
        let config = AppConfig {
            browse_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let mut app = App::new(config, FakeEngine::default(), 70);

        press(&mut app, KeyCode::Char('o'));
        assert!(app.file_browser.is_active);

        // Space selects in the browser rather than toggling playback
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.engine_mut().load_count, 0);

        press(&mut app, KeyCode::Enter);

        assert!(!app.file_browser.is_active);
        assert_eq!(app.controller.playlist().len(), 1);
        assert_eq!(app.controller.playlist().entries()[0].label(), "clip.mov");
    }

    #[test]
    fn reloading_same_entry_moves_highlight_back() {
        let mut app = app_with(&["/v/a.mp4", "/v/b.mp4", "/v/c.mp4"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.playlist_view.highlighted(), Some(2));

        app.controller.engine_mut().finish();
        process_event(&mut app, AppEvent::Tick).unwrap();
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.controller.engine_mut().load_count, 2);
        assert_eq!(app.controller.selected(), Some(0));
        assert_eq!(app.playlist_view.highlighted(), Some(0));
    }

    #[test]
    fn loading_new_entry_forgets_previous_progress() {
        let mut app = app_with(&["/v/a.mp4", "/v/b.mp4"]);
        press(&mut app, KeyCode::Char(' '));
        app.controller.engine_mut().events.extend([
            EngineEvent::TitleChanged("a.mp4".to_string()),
            EngineEvent::DurationChanged(100.0),
            EngineEvent::TimeChanged(90.0),
        ]);
        process_event(&mut app, AppEvent::Tick).unwrap();
        assert_eq!(app.now_playing.position(), Some(0.9));

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.controller.selected(), Some(1));
        assert_eq!(app.now_playing, NowPlaying::default());
    }

    #[test]
    fn pause_keeps_progress() {
        let mut app = app_with(&["/v/a.mp4"]);
        press(&mut app, KeyCode::Char(' '));
        app.controller.engine_mut().events.push(EngineEvent::TimeChanged(12.0));
        process_event(&mut app, AppEvent::Tick).unwrap();

        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.now_playing.time, Some(12.0));
    }

    #[test]
    fn closing_browser_clears_its_status() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            browse_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let mut app = App::new(config, FakeEngine::default(), 70);
        press(&mut app, KeyCode::Char('o'));

        process_event(&mut app, AppEvent::Error("Cannot open directory".to_string())).unwrap();
        assert!(app.status.is_some());

        close_browser(&mut app);

        assert!(!app.file_browser.is_active);
        assert_eq!(app.status, None);
    }
}
