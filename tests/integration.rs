// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the transport core, driven through a scripted
//! engine standing in for the playback capability.

use marquee::application::port::PlaybackEngine;
use marquee::config;
use marquee::domain::media::MediaSource;
use marquee::domain::playback::TransportState;
use marquee::error::EngineError;
use marquee::player::{
    action_for_key, TickOutcome, TransportController, END_OF_CLIP_THRESHOLD,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Debug, Default)]
struct ScriptedState {
    loaded: Option<String>,
    playing: bool,
    position: f64,
    time_ms: i64,
    duration_ms: i64,
    volume: i32,
    rate: f64,
    fail_load_for: Option<String>,
    pause_calls: usize,
    set_time_calls: Vec<i64>,
}

/// Engine double with shared interior state so the test can keep a handle
/// after moving the engine into the controller.
#[derive(Clone)]
struct ScriptedEngine(Arc<Mutex<ScriptedState>>);

impl ScriptedEngine {
    fn new() -> Self {
        ScriptedEngine(Arc::new(Mutex::new(ScriptedState {
            duration_ms: 120_000,
            volume: 100,
            rate: 1.0,
            ..ScriptedState::default()
        })))
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ScriptedState> {
        self.0.lock().unwrap()
    }
}

impl PlaybackEngine for ScriptedEngine {
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError> {
        let mut s = self.state();
        if s.fail_load_for.as_deref() == Some(source.display_name().as_str()) {
            s.loaded = None;
            return Err(EngineError::load(source, "unplayable content"));
        }
        s.loaded = Some(source.display_name());
        s.playing = false;
        s.position = 0.0;
        s.time_ms = 0;
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        let mut s = self.state();
        if s.loaded.is_some() {
            s.playing = true;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        let mut s = self.state();
        s.pause_calls += 1;
        s.playing = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        let mut s = self.state();
        s.playing = false;
        s.position = 0.0;
        s.time_ms = 0;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.state().playing
    }

    fn position(&self) -> f64 {
        self.state().position
    }

    fn set_position(&mut self, position: f64) -> Result<(), EngineError> {
        self.state().position = position.clamp(0.0, 1.0);
        Ok(())
    }

    fn time_ms(&self) -> i64 {
        self.state().time_ms
    }

    fn set_time_ms(&mut self, time_ms: i64) -> Result<(), EngineError> {
        let mut s = self.state();
        let clamped = time_ms.clamp(0, s.duration_ms);
        s.set_time_calls.push(clamped);
        s.time_ms = clamped;
        Ok(())
    }

    fn duration_ms(&self) -> i64 {
        self.state().duration_ms
    }

    fn volume(&self) -> i32 {
        self.state().volume
    }

    fn set_volume(&mut self, volume: i32) -> Result<(), EngineError> {
        self.state().volume = volume.clamp(0, 100);
        Ok(())
    }

    fn rate(&self) -> f64 {
        self.state().rate
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        self.state().rate = rate.max(0.25);
        Ok(())
    }
}

fn controller(engine: &ScriptedEngine) -> TransportController {
    TransportController::new(Box::new(engine.clone()), END_OF_CLIP_THRESHOLD)
}

fn sources(names: &[&str]) -> Vec<MediaSource> {
    names.iter().copied().map(MediaSource::new).collect()
}

fn key(named: iced::keyboard::key::Named) -> iced::keyboard::Key {
    iced::keyboard::Key::Named(named)
}

#[test]
fn playlist_of_two_plays_through_and_stops() {
    let engine = ScriptedEngine::new();
    let mut transport = controller(&engine);

    // Opening [A, B] loads A and auto-plays it.
    transport.open(sources(&["a.mp4", "b.mp4"])).unwrap();
    assert_eq!(transport.state(), TransportState::Playing);
    assert_eq!(engine.state().loaded.as_deref(), Some("a.mp4"));

    // A finishes: the sampled position crosses the threshold and the
    // shell advances to B without leaving the playing state.
    engine.state().position = 0.993;
    match transport.tick() {
        TickOutcome::AdvancedTo(next) => assert_eq!(next.display_name(), "b.mp4"),
        other => panic!("expected advance to b.mp4, got {:?}", other),
    }
    assert_eq!(transport.state(), TransportState::Playing);
    assert_eq!(engine.state().loaded.as_deref(), Some("b.mp4"));

    // B finishes: no further item, playback stops, controls stay usable,
    // and subsequent ticks are inert.
    engine.state().position = 1.0;
    assert_eq!(transport.tick(), TickOutcome::PlaylistFinished);
    assert_eq!(transport.state(), TransportState::Stopped);
    assert!(transport.controls_enabled());
    assert_eq!(transport.tick(), TickOutcome::Idle);
}

#[test]
fn space_while_playing_pauses_exactly_once() {
    let engine = ScriptedEngine::new();
    let mut transport = controller(&engine);
    transport.open(sources(&["a.mp4"])).unwrap();

    let action = action_for_key(&key(iced::keyboard::key::Named::Space), 10_000)
        .expect("space maps to an action");
    transport.apply(action).unwrap();

    assert_eq!(transport.state(), TransportState::Paused);
    assert_eq!(engine.state().pause_calls, 1);
}

#[test]
fn right_arrow_seeks_ten_seconds_forward() {
    let engine = ScriptedEngine::new();
    let mut transport = controller(&engine);
    transport.open(sources(&["a.mp4"])).unwrap();
    engine.state().time_ms = 5_000;

    let action = action_for_key(&key(iced::keyboard::key::Named::ArrowRight), 10_000)
        .expect("right arrow maps to an action");
    transport.apply(action).unwrap();

    assert_eq!(engine.state().set_time_calls, vec![15_000]);
}

#[test]
fn open_with_unplayable_path_leaves_controls_disabled() {
    let engine = ScriptedEngine::new();
    engine.state().fail_load_for = Some("broken.avi".to_string());
    let mut transport = controller(&engine);

    let result = transport.open(sources(&["broken.avi"]));

    assert!(result.is_err());
    assert_eq!(transport.state(), TransportState::Empty);
    assert!(!transport.controls_enabled());
    assert!(!engine.state().playing);
}

#[test]
fn replacing_the_playlist_restarts_from_the_new_first_item() {
    let engine = ScriptedEngine::new();
    let mut transport = controller(&engine);
    transport.open(sources(&["a.mp4", "b.mp4"])).unwrap();

    engine.state().position = 0.995;
    transport.tick();
    assert_eq!(engine.state().loaded.as_deref(), Some("b.mp4"));

    // Opening a new selection mid-play replaces everything.
    transport.open(sources(&["c.mp4"])).unwrap();
    assert_eq!(engine.state().loaded.as_deref(), Some("c.mp4"));
    assert_eq!(transport.state(), TransportState::Playing);
    assert_eq!(transport.playlist_len(), 1);
    assert_eq!(transport.playlist_index(), Some(0));
}

#[test]
fn keyboard_volume_and_rate_follow_their_clamping_rules() {
    let engine = ScriptedEngine::new();
    let mut transport = controller(&engine);
    transport.open(sources(&["a.mp4"])).unwrap();

    let up = action_for_key(&key(iced::keyboard::key::Named::ArrowUp), 10_000).unwrap();
    transport.apply(up).unwrap();
    assert_eq!(engine.state().volume, 100); // already at the ceiling

    let down = action_for_key(&key(iced::keyboard::key::Named::ArrowDown), 10_000).unwrap();
    for _ in 0..15 {
        transport.apply(down).unwrap();
    }
    assert_eq!(engine.state().volume, 0);

    let slower = action_for_key(&iced::keyboard::Key::Character("-".into()), 10_000).unwrap();
    for _ in 0..10 {
        transport.apply(slower).unwrap();
    }
    assert!((engine.state().rate - 0.25).abs() < 1e-9);

    let reset = action_for_key(&iced::keyboard::Key::Character("0".into()), 10_000).unwrap();
    transport.apply(reset).unwrap();
    assert!((engine.state().rate - 1.0).abs() < 1e-9);
}

#[test]
fn settings_file_tunes_the_playback_knobs() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
        [playback]
        tick-interval-ms = 250
        seek-step-ms = 5000
        end-of-clip-threshold = 0.95
        "#,
    )
    .expect("write settings");

    let (loaded, warning) = config::load(Some(&path));
    assert!(warning.is_none());
    assert_eq!(loaded.playback.tick_interval(), Duration::from_millis(250));
    assert_eq!(loaded.playback.seek_step_ms(), 5_000);

    // A controller tuned with the lower threshold advances earlier.
    let engine = ScriptedEngine::new();
    let mut transport = TransportController::new(
        Box::new(engine.clone()),
        loaded.playback.end_of_clip_threshold(),
    );
    transport.open(sources(&["a.mp4", "b.mp4"])).unwrap();
    engine.state().position = 0.96;
    assert!(matches!(transport.tick(), TickOutcome::AdvancedTo(_)));
}

#[test]
fn malformed_settings_fall_back_to_defaults_with_a_warning() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is not toml [").expect("write settings");

    let (loaded, warning) = config::load(Some(&path));
    assert!(warning.is_some());
    assert_eq!(loaded, config::Config::default());
}
