// SPDX-License-Identifier: MPL-2.0
//! `marquee` is a minimal desktop video player built with the Iced GUI
//! framework.
//!
//! It plays a user-picked list of files in order with transport controls,
//! a sampled progress display and keyboard-driven fine adjustments for
//! seeking, volume and playback rate. Media decoding and rendering are
//! delegated to GStreamer behind a port trait.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;
pub mod ui;
