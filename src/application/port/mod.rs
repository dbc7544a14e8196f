// SPDX-License-Identifier: MPL-2.0
//! Port definitions consumed by the transport controller.

pub mod engine;

pub use engine::PlaybackEngine;
