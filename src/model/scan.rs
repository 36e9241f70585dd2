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

//! Video file discovery.
//!
//! This module finds candidate video files on the local filesystem so they
//! can be appended to the playlist. The extension filter is advisory only,
//! the playback engine has the final say on what actually plays.
//!
//! It utilizes `WalkDir` for directory traversal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Returns true if the path has one of the given extensions, ignoring case.
pub(crate) fn is_video_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Recursively collects video files beneath `root`, sorted by path.
///
/// Unreadable directory entries are skipped.
pub(crate) fn collect_videos(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut videos: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_video_file(path, extensions))
        .collect();

    videos.sort();
    videos
}

/// Expands a mixed list of files and directories into playlist paths.
///
/// Files are passed through untouched, whatever their extension, directories
/// are replaced by the video files found beneath them.
pub(crate) fn expand_paths<I>(paths: I, extensions: &[String]) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut expanded = Vec::new();

    for path in paths {
        if path.is_dir() {
            expanded.extend(collect_videos(&path, extensions));
        } else {
            expanded.push(path);
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn extensions() -> Vec<String> {
        ["mp4", "avi", "mkv", "mov"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_extension_case_insensitively() {
        let exts = extensions();

        assert!(is_video_file(Path::new("/v/clip.MP4"), &exts));
        assert!(is_video_file(Path::new("/v/clip.mov"), &exts));
        assert!(!is_video_file(Path::new("/v/notes.txt"), &exts));
        assert!(!is_video_file(Path::new("/v/README"), &exts));
    }

    #[test]
    fn collects_videos_recursively_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("season1");
        fs::create_dir(&nested).unwrap();

        fs::write(dir.path().join("b.mkv"), b"").unwrap();
        fs::write(dir.path().join("a.mp4"), b"").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"").unwrap();
        fs::write(nested.join("e01.avi"), b"").unwrap();

        let videos = collect_videos(dir.path(), &extensions());

        assert_eq!(
            videos,
            vec![
                dir.path().join("a.mp4"),
                dir.path().join("b.mkv"),
                nested.join("e01.avi"),
            ]
        );
    }

    #[test]
    fn expand_keeps_files_and_expands_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.mov"), b"").unwrap();
        fs::write(dir.path().join("two.mp4"), b"").unwrap();

        let explicit = PathBuf::from("/elsewhere/stream.webm");
        let expanded = expand_paths(
            vec![explicit.clone(), dir.path().to_path_buf()],
            &extensions(),
        );

        assert_eq!(
            expanded,
            vec![explicit, dir.path().join("one.mov"), dir.path().join("two.mp4")]
        );
    }
}
