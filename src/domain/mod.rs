// SPDX-License-Identifier: MPL-2.0
//! Pure domain types for the player shell.
//!
//! Nothing in this module touches the GUI toolkit or the playback engine;
//! everything here is plain data with its invariants enforced locally.

pub mod media;
pub mod newtypes;
pub mod playback;
pub mod playlist;

pub use media::MediaSource;
pub use newtypes::{PlaybackRate, Volume};
pub use playback::TransportState;
pub use playlist::Playlist;
