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

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// A terminal video player driving MPV.
#[derive(Parser, Debug)]
#[command(name = "reelui")]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Open the file browser on startup.
    #[arg(short, long)]
    pub(crate) browse: bool,

    /// Initial volume, overriding the configuration file.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) volume: Option<u8>,

    /// Video files or directories to add to the playlist.
    #[arg(trailing_var_arg = true)]
    pub(crate) files: Vec<PathBuf>,
}
