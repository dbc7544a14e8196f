// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controls;
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Control-row messages are
/// forwarded as a group to keep a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A transport-controls widget was activated.
    Controls(controls::Message),
    /// Paths picked in the open dialog; empty means the user cancelled.
    OpenDialogResult(Vec<PathBuf>),
    /// Periodic sampling tick while playing.
    Tick(Instant),
    /// A key was pressed anywhere in the window.
    KeyPressed(keyboard::Key),
    /// The video surface was clicked (double-click toggles fullscreen).
    SurfacePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a `settings.toml` overriding the platform default.
    pub config_path: Option<PathBuf>,
    /// Media paths to enqueue and play on startup.
    pub start_paths: Vec<PathBuf>,
}
