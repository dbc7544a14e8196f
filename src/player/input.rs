// SPDX-License-Identifier: MPL-2.0
//! Keyboard input mapping.
//!
//! A stateless translation table from key identity to transport action.
//! The controller applies actions only while a media item is loaded;
//! unrecognized keys map to `None` and are never an error.

use crate::domain::newtypes::{rate_bounds, volume_bounds};
use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// A relative adjustment requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportAction {
    /// Play if not currently playing, else pause.
    TogglePlayPause,
    /// Seek by a signed offset in milliseconds.
    SeekBy(i64),
    /// Adjust volume by a signed number of percent points.
    VolumeBy(i32),
    /// Adjust playback rate by a signed step.
    RateBy(f64),
    /// Reset playback rate to normal speed.
    RateReset,
}

/// Maps a key press to its transport action.
///
/// `seek_step_ms` is the configured arrow-key seek offset.
pub fn action_for_key(key: &Key, seek_step_ms: i64) -> Option<TransportAction> {
    match key {
        Key::Named(Named::Space) => Some(TransportAction::TogglePlayPause),
        Key::Named(Named::ArrowRight) => Some(TransportAction::SeekBy(seek_step_ms)),
        Key::Named(Named::ArrowLeft) => Some(TransportAction::SeekBy(-seek_step_ms)),
        Key::Named(Named::ArrowUp) => Some(TransportAction::VolumeBy(volume_bounds::STEP)),
        Key::Named(Named::ArrowDown) => Some(TransportAction::VolumeBy(-volume_bounds::STEP)),
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(TransportAction::RateBy(rate_bounds::STEP)),
            "-" => Some(TransportAction::RateBy(-rate_bounds::STEP)),
            "0" => Some(TransportAction::RateReset),
            _ => None,
        },
        _ => None,
    }
}
