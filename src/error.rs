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

//! Typed errors for the playlist and the playback engine.
//!
//! Application plumbing uses `anyhow`; these are the few failures that have
//! a meaningful shape of their own.

use thiserror::Error;

/// Errors raised by the playlist store.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlaylistError {
    #[error("playlist index {index} is out of range for {len} entries")]
    InvalidIndex { index: usize, len: usize },
}

/// Errors raised by a playback engine implementation.
#[derive(Debug, Error)]
pub(crate) enum EngineError {
    #[error("failed to initialise playback engine: {0}")]
    Init(String),

    #[error("engine command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

impl EngineError {
    pub(crate) fn command(command: impl Into<String>, reason: impl std::fmt::Debug) -> Self {
        Self::Command {
            command: command.into(),
            reason: format!("{:?}", reason),
        }
    }
}
