// SPDX-License-Identifier: MPL-2.0
//! Transport controller.
//!
//! The state machine mediating UI commands and engine state. It owns the
//! playlist and the injected engine capability, drives the
//! load/play/pause/stop transitions, and turns sampling ticks into display
//! updates and end-of-clip advancement.
//!
//! State is only updated after the corresponding engine call succeeds, so
//! a rejected command leaves the machine in its pre-command state.

use crate::application::port::PlaybackEngine;
use crate::domain::media::MediaSource;
use crate::domain::newtypes::{rate_bounds, PlaybackRate, Volume};
use crate::domain::playback::TransportState;
use crate::domain::playlist::Playlist;
use crate::error::{PlaylistError, Result};
use crate::player::input::TransportAction;
use crate::player::progress::{self, ProgressSnapshot};
use tracing::{info, warn};

/// Normalized position at or beyond which a clip counts as finished.
///
/// A tolerance rather than an equality check: engines rarely report an
/// exact terminal position of 1.0.
pub const END_OF_CLIP_THRESHOLD: f64 = 0.99;

/// Result of one sampling tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Nothing to report; the current display stays as is.
    Idle,
    /// Fresh display values for the slider and time label.
    Progress(ProgressSnapshot),
    /// The clip finished and the next playlist item is now playing.
    AdvancedTo(MediaSource),
    /// The last clip finished; playback stopped, controls stay enabled.
    PlaylistFinished,
}

pub struct TransportController {
    engine: Box<dyn PlaybackEngine>,
    playlist: Playlist,
    state: TransportState,
    end_of_clip_threshold: f64,
}

impl TransportController {
    pub fn new(engine: Box<dyn PlaybackEngine>, end_of_clip_threshold: f64) -> Self {
        Self {
            engine,
            playlist: Playlist::new(),
            state: TransportState::Empty,
            end_of_clip_threshold,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Derived control enablement; never stored independently.
    pub fn controls_enabled(&self) -> bool {
        self.state.controls_enabled()
    }

    pub fn current(&self) -> Option<&MediaSource> {
        self.playlist.current().ok()
    }

    pub fn playlist_len(&self) -> usize {
        self.playlist.len()
    }

    pub fn playlist_index(&self) -> Option<usize> {
        self.playlist.current_index()
    }

    pub fn volume(&self) -> i32 {
        self.engine.volume()
    }

    /// Replaces the playlist with the given sources, loads the first item
    /// and starts playing it.
    ///
    /// The engine load happens before the playlist is committed; a source
    /// that cannot be opened leaves the shell without media and without
    /// enabled controls, and the error is returned for a non-fatal notice.
    pub fn open(&mut self, sources: Vec<MediaSource>) -> Result<()> {
        let first = sources.first().cloned().ok_or(PlaylistError::Empty)?;
        if let Err(err) = self.engine.load(&first) {
            // A failed load drops whatever the engine had bound before, so
            // the machine returns to the unloaded state instead of keeping
            // controls lit for media that is not there.
            self.playlist = Playlist::new();
            self.state = TransportState::Empty;
            return Err(err.into());
        }
        self.playlist.open_new(sources)?;
        self.state = TransportState::Stopped;
        info!(source = %first, "loaded");
        self.play()
    }

    /// Starts or resumes playback. No-op while already playing or while
    /// nothing is loaded.
    pub fn play(&mut self) -> Result<()> {
        if !self.state.is_loaded() || self.state.is_playing() {
            return Ok(());
        }
        self.engine.play()?;
        self.state = TransportState::Playing;
        Ok(())
    }

    /// Pauses playback. No-op unless playing.
    pub fn pause(&mut self) -> Result<()> {
        if !self.state.is_playing() {
            return Ok(());
        }
        self.engine.pause()?;
        self.state = TransportState::Paused;
        Ok(())
    }

    /// Stops playback and rewinds to the beginning. No-op unless playing
    /// or paused.
    pub fn stop(&mut self) -> Result<()> {
        if !self.state.is_playing() && !self.state.is_paused() {
            return Ok(());
        }
        self.engine.stop()?;
        self.state = TransportState::Stopped;
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.state.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Commits a seek to a normalized position (from the seek slider).
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
        if !self.state.is_loaded() {
            return Ok(());
        }
        self.engine.set_position(fraction.clamp(0.0, 1.0))?;
        Ok(())
    }

    /// Seeks relative to the current time; the engine clamps the bounds.
    pub fn seek_by(&mut self, delta_ms: i64) -> Result<()> {
        if !self.state.is_loaded() {
            return Ok(());
        }
        let target = self.engine.time_ms().saturating_add(delta_ms);
        self.engine.set_time_ms(target)?;
        Ok(())
    }

    /// Sets the volume from the volume slider. Volume is an engine-wide
    /// setting and works with or without media loaded.
    pub fn set_volume(&mut self, volume: i32) -> Result<()> {
        self.engine.set_volume(Volume::new(volume).value())?;
        Ok(())
    }

    /// Applies a keyboard action. All actions are gated on a loaded media
    /// item; with nothing loaded they are silently ignored.
    pub fn apply(&mut self, action: TransportAction) -> Result<()> {
        if !self.state.is_loaded() {
            return Ok(());
        }
        match action {
            TransportAction::TogglePlayPause => self.toggle_play_pause(),
            TransportAction::SeekBy(delta_ms) => self.seek_by(delta_ms),
            TransportAction::VolumeBy(delta) => {
                let volume = Volume::new(self.engine.volume().saturating_add(delta));
                self.engine.set_volume(volume.value())?;
                Ok(())
            }
            TransportAction::RateBy(delta) => {
                let rate = PlaybackRate::new(self.engine.rate() + delta);
                self.engine.set_rate(rate.value())?;
                Ok(())
            }
            TransportAction::RateReset => {
                self.engine.set_rate(rate_bounds::DEFAULT)?;
                Ok(())
            }
        }
    }

    /// Runs one sampling tick.
    ///
    /// Reads the engine, derives display values, and detects the end of
    /// the current clip. Only meaningful while the machine is in the
    /// playing state; ticks arriving in any other state are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_playing() || !self.engine.is_playing() {
            return TickOutcome::Idle;
        }
        let position = self.engine.position();
        if position >= self.end_of_clip_threshold {
            return self.advance_or_finish();
        }
        match progress::snapshot(position, self.engine.time_ms(), self.engine.duration_ms()) {
            Some(snap) => TickOutcome::Progress(snap),
            None => TickOutcome::Idle,
        }
    }

    fn advance_or_finish(&mut self) -> TickOutcome {
        let next = self.playlist.advance().cloned();
        match next {
            Some(next) => {
                if let Err(err) = self.engine.load(&next) {
                    // The next entry is unplayable; nothing is bound to the
                    // engine anymore, so the machine goes dark instead of
                    // spinning on the broken entry every tick.
                    warn!(source = %next, "auto-advance failed: {}", err);
                    self.state = TransportState::Empty;
                    return TickOutcome::PlaylistFinished;
                }
                if let Err(err) = self.engine.play() {
                    warn!(source = %next, "auto-play after advance failed: {}", err);
                    self.state = TransportState::Stopped;
                    return TickOutcome::PlaylistFinished;
                }
                info!(source = %next, "advanced to next item");
                TickOutcome::AdvancedTo(next)
            }
            None => {
                if let Err(err) = self.engine.stop() {
                    warn!("stop at end of playlist failed: {}", err);
                }
                self.state = TransportState::Stopped;
                TickOutcome::PlaylistFinished
            }
        }
    }
}

impl std::fmt::Debug for TransportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportController")
            .field("state", &self.state)
            .field("playlist_len", &self.playlist.len())
            .finish()
    }
}
