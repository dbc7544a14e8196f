// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the port traits over concrete backends.

pub mod gst;

pub use gst::GstPlaybackEngine;
