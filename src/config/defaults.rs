// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration knob.
//!
//! Kept in one place so the settings file, the CLI and the UI all agree
//! on what "unset" means.

/// Progress sampling interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Arrow-key seek step in milliseconds.
pub const DEFAULT_SEEK_STEP_MS: i64 = 10_000;

/// Normalized position treated as the end of a clip. A tolerance, not an
/// equality check.
pub const DEFAULT_END_OF_CLIP_THRESHOLD: f64 = 0.99;

/// Volume applied at startup, in percent.
pub const DEFAULT_INITIAL_VOLUME: i32 = 100;

/// Initial window size.
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Lower bound accepted for the end-of-clip threshold; values below this
/// would cut clips off mid-play.
pub const MIN_END_OF_CLIP_THRESHOLD: f64 = 0.5;
