// SPDX-License-Identifier: MPL-2.0
//! Media source locators.

use std::path::{Path, PathBuf};

/// File extensions offered by the open dialog.
pub mod extensions {
    pub const VIDEO: &[&str] = &[
        "mp4", "mkv", "webm", "avi", "mov", "m4v", "mpg", "mpeg", "ts", "ogv",
    ];
}

/// An opaque locator for one playable item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource(PathBuf);

impl MediaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Short name for the title bar; falls back to the full path for
    /// locators without a final component.
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl From<PathBuf> for MediaSource {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_the_file_name() {
        let source = MediaSource::new("/videos/holiday/beach.mp4");
        assert_eq!(source.display_name(), "beach.mp4");
    }

    #[test]
    fn display_name_falls_back_to_full_path() {
        let source = MediaSource::new("/");
        assert_eq!(source.display_name(), "/");
    }

    #[test]
    fn path_round_trips() {
        let source = MediaSource::new("clip.webm");
        assert_eq!(source.path(), Path::new("clip.webm"));
    }
}
