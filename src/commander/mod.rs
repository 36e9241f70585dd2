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

//! Command-line input logic and state management.
//!
//! This module implements a `:` command line, handling a text input component
//! and dispatching the corresponding application command event when a command
//! is submitted.
//!
//! # Commands
//!
//! | command        | action                                   |
//! |----------------|------------------------------------------|
//! | `add <path>`   | add a file, or the videos in a directory |
//! | `open`, `o`    | open the file browser                    |
//! | `p`            | play/pause                               |
//! | `pn`           | play next                                |
//! | `pp`           | play previous                            |
//! | `play <n>`     | play playlist row `n` (1-based)          |
//! | `v <0-100>`    | set the volume                           |
//! | `q`            | quit                                     |

use std::{path::PathBuf, sync::mpsc::Sender};

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::{commands::AppCommand, events::AppEvent},
    controller::MAX_VOLUME,
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, either because the command
    /// line is active or because the event activated it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let message = match parse_command(self.input.value()) {
                    Ok(command) => command.map(AppEvent::Command),
                    Err(e) => Some(AppEvent::Error(e)),
                };
                if let Some(message) = message {
                    let _ = event_tx.send(message);
                }

                self.input.reset();
                self.active = false;
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Parses a command line into an application command.
///
/// Returns `Ok(None)` for a blank line and a message describing the problem
/// for anything that is not understood.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<AppCommand>, String> {
    let buffer = buffer.trim();
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] => AppCommand::ExitApplication,

        ["open"] | ["o"] => AppCommand::OpenBrowser,

        // Paths may contain spaces, so take everything after the keyword
        ["add", _, ..] => {
            let path = buffer["add".len()..].trim();
            AppCommand::AddPaths(vec![PathBuf::from(path)])
        }
        ["add"] => return Err("add: expected a file or directory".to_string()),

        ["p"] => AppCommand::TogglePlayPause,
        ["pn"] => AppCommand::Next,
        ["pp"] => AppCommand::Previous,

        ["play", row] => match row.parse::<usize>() {
            Ok(row) if row > 0 => AppCommand::SelectIndex(row - 1),
            _ => return Err(format!("play: invalid row '{}'", row)),
        },

        ["v", volume] => match volume.parse::<u8>() {
            Ok(level) if level <= MAX_VOLUME => AppCommand::SetVolume(level),
            _ => return Err(format!("v: volume must be 0-{}, got '{}'", MAX_VOLUME, volume)),
        },

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_transport_commands() {
        assert!(matches!(parse_command("p"), Ok(Some(AppCommand::TogglePlayPause))));
        assert!(matches!(parse_command(" pn "), Ok(Some(AppCommand::Next))));
        assert!(matches!(parse_command("pp"), Ok(Some(AppCommand::Previous))));
        assert!(matches!(parse_command("play 3"), Ok(Some(AppCommand::SelectIndex(2)))));
        assert!(matches!(parse_command("v 40"), Ok(Some(AppCommand::SetVolume(40)))));
        assert!(matches!(parse_command(""), Ok(None)));
    }

    #[test]
    fn add_keeps_spaces_in_path() {
        match parse_command("add /videos/My Holiday/beach.mp4") {
            Ok(Some(AppCommand::AddPaths(paths))) => {
                assert_eq!(paths, vec![PathBuf::from("/videos/My Holiday/beach.mp4")])
            }
            _ => panic!("expected an add command"),
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("play 0").is_err());
        assert!(parse_command("v 101").is_err());
        assert!(parse_command("v loud").is_err());
        assert!(parse_command("rewind").is_err());
    }

    #[test]
    fn colon_activates_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('n')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('p')), &tx);
        commander.handle_event(&key(KeyCode::Char('n')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Command(AppCommand::Next))));
    }

    #[test]
    fn escape_abandons_input() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('q')), &tx);

        commander.handle_event(&key(KeyCode::Esc), &tx);

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
