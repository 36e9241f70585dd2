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

//! # Video Player TUI.
//!
//! A terminal-based video player with a playlist pane and transport controls.
//!
//! All of the hard work of media playback (demuxing, decoding, audio/video
//! sync and the video window itself) is done by `libmpv`. This application
//! keeps an ordered playlist with a cursor, translates key presses into
//! engine requests and keeps the playlist highlight in step with playback.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the playlist, the engine handle and the
//!   terminal, and handles every event synchronously.
//! * **Input and Tick Threads** only forward key presses and periodic ticks
//!   to the main thread.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the helper threads and the main thread is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod cli;
mod commander;
mod components;
mod config;
mod controller;
mod error;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    actions::{
        commands::{AppCommand, handle_command},
        events::{AppEvent, process_events},
    },
    cli::Args,
    commander::Commander,
    components::{FileBrowser, PlaylistView},
    config::AppConfig,
    controller::PlaybackController,
    player::{NowPlaying, PlaybackEngine, mpv_engine::MpvEngine},
    theme::Theme,
};

const LOG_FILE: &str = "reelui.log";

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App<E: PlaybackEngine> {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaybackController<E>,

    pub playlist_view: PlaylistView,
    pub file_browser: FileBrowser,
    pub commander: Commander,

    pub now_playing: NowPlaying,
    // Controller load count that `now_playing` describes
    pub seen_loads: u64,
    pub status: Option<String>,
}

impl<E: PlaybackEngine> App<E> {
    /// Create a new instance of application state around a playback engine.
    pub fn new(config: AppConfig, engine: E, volume: u8) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let file_browser = FileBrowser::new(config.start_dir(), config.video_extensions.clone());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller: PlaybackController::new(engine, volume),
            playlist_view: PlaylistView::new(),
            file_browser,
            commander: Commander::new(),
            now_playing: NowPlaying::default(),
            seen_loads: 0,
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Parses the command line, loads the configuration, initialises the engine,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = init_logging();
    info!("Starting reelui v{}", env!("CARGO_PKG_VERSION"));

    // Only a configuration that loaded cleanly is written back on exit
    let (config, config_path) = match config::config_path() {
        Some(path) => match config::load_config(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!("Failed to load configuration from {}, using defaults: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
        None => {
            warn!("No configuration directory, using defaults");
            (AppConfig::default(), None)
        }
    };

    let volume = args.volume.unwrap_or_else(|| config.initial_volume());

    let engine = MpvEngine::new(config.video_output.as_deref())
        .context("Failed to initialise MPV")?;

    let mut app = App::new(config, engine, volume);

    if !args.files.is_empty() {
        handle_command(&mut app, AppCommand::AddPaths(args.files))
            .context("Failed to add files from the command line")?;
    }
    if args.browse {
        handle_command(&mut app, AppCommand::OpenBrowser)
            .context("Failed to open the file browser")?;
    }

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Some(path) = config_path {
        let mut config = app.config.clone();
        config.record_session_volume(volume, app.controller.volume());
        if let Err(e) = config::save_config(&path, &config) {
            warn!("Failed to save configuration: {}", e);
        }
    }

    info!("Exiting");

    res.context("Application error occurred")
}

/// Routes `tracing` output to a log file beside the configuration file.
///
/// The terminal belongs to the UI, so nothing may be written to stdout or
/// stderr while it runs. The returned guard flushes the log when dropped. If
/// there is nowhere to write the log, logging is simply disabled.
fn init_logging() -> Option<WorkerGuard> {
    let dir = config::config_dir()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal<E: PlaybackEngine>(
    app: &App<E>,
) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the helper threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to read terminal keyboard events.
/// * A tick thread to trigger periodic engine polling and UI refreshes.
///
/// After spawning them, it hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<E>,
) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!(
                        "Failed to read terminal input: {}",
                        e
                    )));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
