// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait, the only surface
//! through which the core talks to the media engine. Infrastructure
//! adapters (GStreamer in this repository) implement this trait.
//!
//! # Design Notes
//!
//! - The engine is **stateful**: it owns the live playback session (bound
//!   media, mode, position, volume, rate). The core never keeps a second
//!   copy of that state, except transiently for display.
//! - Reads are plain accessors that return immediately with the engine's
//!   current notion of the value; they never fail. Unknown duration is
//!   reported as a non-positive value.
//! - Commands return `Result` so the controller can fall back to its
//!   pre-command state when the engine rejects one.

use crate::domain::media::MediaSource;
use crate::error::EngineError;

/// Port for the media playback capability.
///
/// # Contract
///
/// Every call other than `load` is only meaningful while a media item is
/// bound; implementations treat them as no-ops otherwise.
///
/// - `load` binds the engine to a source and resets position to 0. It does
///   **not** start playback.
/// - `play`, `pause` and `stop` are idempotent. `stop` additionally resets
///   the position to 0.
/// - `set_time_ms` clamps negative targets to 0 and targets past the end
///   to the duration.
/// - `set_volume` clamps to 0..=100, `set_rate` clamps to the 0.25 floor.
pub trait PlaybackEngine: Send {
    /// Binds the engine to a new media source.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Load`] when the source cannot be opened
    /// (missing file, unplayable content). The previous binding is gone
    /// either way; callers decide what to show.
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError>;

    /// Starts or resumes playback.
    fn play(&mut self) -> Result<(), EngineError>;

    /// Pauses playback at the current position.
    fn pause(&mut self) -> Result<(), EngineError>;

    /// Stops playback and resets the position to 0.
    fn stop(&mut self) -> Result<(), EngineError>;

    /// Returns true while the engine is actively playing.
    fn is_playing(&self) -> bool;

    /// Playback progress normalized to `[0.0, 1.0]`; 0.0 when unknown.
    fn position(&self) -> f64;

    /// Seeks to a normalized position; the engine clamps to `[0, 1]`.
    fn set_position(&mut self, position: f64) -> Result<(), EngineError>;

    /// Elapsed time of the current item in milliseconds.
    fn time_ms(&self) -> i64;

    /// Seeks to an absolute time; negative targets clamp to 0.
    fn set_time_ms(&mut self, time_ms: i64) -> Result<(), EngineError>;

    /// Duration of the current item in milliseconds; `<= 0` means unknown.
    fn duration_ms(&self) -> i64;

    /// Current volume in percent.
    fn volume(&self) -> i32;

    /// Sets the volume, clamped to 0..=100.
    fn set_volume(&mut self, volume: i32) -> Result<(), EngineError>;

    /// Current playback rate.
    fn rate(&self) -> f64;

    /// Sets the playback rate, clamped to the 0.25 floor. There is no
    /// upper clamp.
    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError>;
}
