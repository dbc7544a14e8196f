// SPDX-License-Identifier: MPL-2.0
//! Application configuration.
//!
//! Settings are read from a `settings.toml`, either at an explicit path
//! given on the command line or at the platform config directory. The file
//! is optional and the shell never writes it; nothing is persisted across
//! runs.
//!
//! # Configuration Sections
//!
//! - `[playback]` - sampling interval, seek step, end-of-clip threshold,
//!   startup volume
//! - `[window]` - initial window size

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR: &str = "marquee";

/// Playback behavior settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PlaybackConfig {
    /// Progress sampling interval in milliseconds.
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,

    /// Arrow-key seek step in milliseconds.
    #[serde(default)]
    pub seek_step_ms: Option<i64>,

    /// Normalized position treated as the end of a clip.
    #[serde(default)]
    pub end_of_clip_threshold: Option<f64>,

    /// Volume applied at startup, in percent.
    #[serde(default)]
    pub initial_volume: Option<i32>,
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
        )
    }

    pub fn seek_step_ms(&self) -> i64 {
        self.seek_step_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_SEEK_STEP_MS)
    }

    pub fn end_of_clip_threshold(&self) -> f64 {
        self.end_of_clip_threshold
            .unwrap_or(DEFAULT_END_OF_CLIP_THRESHOLD)
            .clamp(MIN_END_OF_CLIP_THRESHOLD, 1.0)
    }

    pub fn initial_volume(&self) -> i32 {
        self.initial_volume
            .unwrap_or(DEFAULT_INITIAL_VOLUME)
            .clamp(0, 100)
    }
}

/// Window settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct WindowConfig {
    #[serde(default)]
    pub width: Option<f32>,

    #[serde(default)]
    pub height: Option<f32>,
}

impl WindowConfig {
    pub fn size(&self) -> (f32, f32) {
        (
            self.width.filter(|w| *w > 0.0).unwrap_or(DEFAULT_WINDOW_WIDTH),
            self.height.filter(|h| *h > 0.0).unwrap_or(DEFAULT_WINDOW_HEIGHT),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

/// Loads the configuration, preferring an explicit path over the platform
/// config directory. A missing file yields defaults; a malformed file
/// yields defaults plus a warning for the log.
pub fn load(explicit: Option<&Path>) -> (Config, Option<String>) {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) => path,
            None => return (Config::default(), None),
        },
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
