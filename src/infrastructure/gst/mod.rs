// SPDX-License-Identifier: MPL-2.0
//! GStreamer adapter implementing the [`PlaybackEngine`] port trait.
//!
//! This module provides [`GstPlaybackEngine`], a thin facade over a
//! `playbin` element. Decoding and rendering stay inside playbin; the
//! adapter only issues transport commands and bounded state queries.
//!
//! # Design Notes
//!
//! - `load` prerolls the pipeline to `Paused` with a bounded wait, so an
//!   unreadable source fails at open time rather than at `play`
//! - `stop` drops to `Ready`, which resets the position while keeping the
//!   source bound
//! - playbin has no rate query; the last commanded rate is kept here and
//!   applied through flushing seeks
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

use gstreamer as gst;

use gst::prelude::*;

use crate::application::port::PlaybackEngine;
use crate::domain::media::MediaSource;
use crate::domain::newtypes::{rate_bounds, PlaybackRate, Volume};
use crate::error::EngineError;
use tracing::debug;

/// Bounded wait for the pipeline to preroll a newly loaded source.
const PREROLL_TIMEOUT_SECS: u64 = 5;

/// `playbin`-based playback engine.
///
/// # Thread Safety
///
/// The wrapped element is reference counted and `Send`; the adapter keeps
/// mutable bookkeeping (`loaded`, `rate`) alongside it, so create one
/// instance per playback session.
pub struct GstPlaybackEngine {
    playbin: gst::Element,
    /// Last commanded rate; playbin cannot be queried for it.
    rate: f64,
    loaded: bool,
}

impl GstPlaybackEngine {
    /// Initializes GStreamer and creates the playbin element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Init`] when the GStreamer runtime or the
    /// playbin plugin is unavailable. Callers treat this as fatal at
    /// startup.
    pub fn new() -> Result<Self, EngineError> {
        gst::init().map_err(|e| EngineError::Init(e.to_string()))?;
        let playbin = gst::ElementFactory::make("playbin")
            .name("playback-engine")
            .build()
            .map_err(|e| EngineError::Init(e.to_string()))?;
        Ok(Self {
            playbin,
            rate: rate_bounds::DEFAULT,
            loaded: false,
        })
    }

    fn set_pipeline_state(
        &self,
        state: gst::State,
        command: &'static str,
    ) -> Result<(), EngineError> {
        self.playbin
            .set_state(state)
            .map(|_| ())
            .map_err(|e| EngineError::command(command, e.to_string()))
    }

    fn current_state(&self) -> gst::State {
        let (_, current, _) = self.playbin.state(gst::ClockTime::ZERO);
        current
    }

    /// Flushing seek carrying the current rate.
    fn seek_with_rate(&self, target: gst::ClockTime) -> Result<(), EngineError> {
        self.playbin
            .seek(
                self.rate,
                gst::SeekFlags::FLUSH | gst::SeekFlags::KEY_UNIT,
                gst::SeekType::Set,
                target,
                gst::SeekType::None,
                gst::ClockTime::NONE,
            )
            .map_err(|e| EngineError::command("seek", e.to_string()))
    }
}

impl PlaybackEngine for GstPlaybackEngine {
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError> {
        let uri = gst::glib::filename_to_uri(source.path(), None)
            .map_err(|e| EngineError::load(source, e.to_string()))?;

        // Drop any previous binding before rebinding the uri.
        let _ = self.playbin.set_state(gst::State::Null);
        self.loaded = false;
        self.rate = rate_bounds::DEFAULT;

        self.playbin.set_property("uri", uri.as_str());
        self.playbin
            .set_state(gst::State::Paused)
            .map_err(|e| EngineError::load(source, e.to_string()))?;

        // Preroll confirms the source is actually playable; the wait is
        // bounded so a hung demuxer cannot stall the shell.
        let timeout = gst::ClockTime::from_seconds(PREROLL_TIMEOUT_SECS);
        let (result, state, _pending) = self.playbin.state(timeout);
        match result {
            Ok(_) => {
                debug!(source = %source, ?state, "prerolled");
                self.loaded = true;
                Ok(())
            }
            Err(_) => {
                let _ = self.playbin.set_state(gst::State::Null);
                Err(EngineError::load(source, "failed to preroll"))
            }
        }
    }

    fn play(&mut self) -> Result<(), EngineError> {
        if !self.loaded {
            return Ok(());
        }
        self.set_pipeline_state(gst::State::Playing, "play")
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        if !self.loaded {
            return Ok(());
        }
        self.set_pipeline_state(gst::State::Paused, "pause")
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        if !self.loaded {
            return Ok(());
        }
        // Ready resets the position to 0 while keeping the uri bound.
        self.set_pipeline_state(gst::State::Ready, "stop")?;
        self.rate = rate_bounds::DEFAULT;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.loaded && self.current_state() == gst::State::Playing
    }

    fn position(&self) -> f64 {
        let position = self.playbin.query_position::<gst::ClockTime>();
        let duration = self.playbin.query_duration::<gst::ClockTime>();
        match (position, duration) {
            (Some(position), Some(duration)) if duration.nseconds() > 0 => {
                (position.nseconds() as f64 / duration.nseconds() as f64).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    fn set_position(&mut self, position: f64) -> Result<(), EngineError> {
        if !self.loaded {
            return Ok(());
        }
        let Some(duration) = self.playbin.query_duration::<gst::ClockTime>() else {
            return Ok(());
        };
        let fraction = position.clamp(0.0, 1.0);
        let target =
            gst::ClockTime::from_nseconds((fraction * duration.nseconds() as f64) as u64);
        self.seek_with_rate(target)
    }

    fn time_ms(&self) -> i64 {
        self.playbin
            .query_position::<gst::ClockTime>()
            .map(|t| t.mseconds() as i64)
            .unwrap_or(0)
    }

    fn set_time_ms(&mut self, time_ms: i64) -> Result<(), EngineError> {
        if !self.loaded {
            return Ok(());
        }
        let mut target_ms = time_ms.max(0) as u64;
        if let Some(duration) = self.playbin.query_duration::<gst::ClockTime>() {
            target_ms = target_ms.min(duration.mseconds());
        }
        self.seek_with_rate(gst::ClockTime::from_mseconds(target_ms))
    }

    fn duration_ms(&self) -> i64 {
        self.playbin
            .query_duration::<gst::ClockTime>()
            .map(|t| t.mseconds() as i64)
            .unwrap_or(0)
    }

    fn volume(&self) -> i32 {
        let volume: f64 = self.playbin.property("volume");
        (volume * 100.0).round() as i32
    }

    fn set_volume(&mut self, volume: i32) -> Result<(), EngineError> {
        let percent = Volume::new(volume).value();
        self.playbin
            .set_property("volume", f64::from(percent) / 100.0);
        Ok(())
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        self.rate = PlaybackRate::new(rate).value();
        if !self.loaded {
            return Ok(());
        }
        // Seeks only work once the pipeline has prerolled; before that the
        // stored rate is picked up by the next seek.
        if self.current_state() < gst::State::Paused {
            return Ok(());
        }
        let position = self
            .playbin
            .query_position::<gst::ClockTime>()
            .unwrap_or(gst::ClockTime::ZERO);
        self.seek_with_rate(position)
    }
}

impl Drop for GstPlaybackEngine {
    fn drop(&mut self) {
        let _ = self.playbin.set_state(gst::State::Null);
    }
}
