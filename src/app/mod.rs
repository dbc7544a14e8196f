// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the transport controller to the Iced runtime:
//! messages come in from widgets, key presses and the sampling tick, and
//! go out as engine commands and display updates. Policy decisions
//! (window size, double-click threshold, what an error shows) live close
//! to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::PlaybackEngine;
use crate::config::{self, Config};
use crate::player::{ProgressSnapshot, TransportController};
use iced::window;
use std::time::{Duration, Instant};
use tracing::warn;

/// Root Iced application state.
pub struct App {
    transport: TransportController,
    /// Last sampled display values; overwritten on every progress tick.
    display: ProgressSnapshot,
    /// Seek slider preview position while a drag is in flight.
    seek_preview: Option<f64>,
    /// Non-fatal notice shown under the controls, cleared on the next
    /// successful open.
    status: Option<String>,
    fullscreen: bool,
    /// Previous click instant on the video surface, for double-click
    /// detection.
    last_surface_click: Option<Instant>,
    tick_interval: Duration,
    seek_step_ms: i64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("transport", &self.transport)
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    window::Settings {
        size: iced::Size::new(width, height),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The engine capability is injected here so tests and alternative
/// backends can substitute their own implementation.
pub fn run(flags: Flags, engine: Box<dyn PlaybackEngine>) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load(flags.config_path.as_deref());
    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }
    let settings = window_settings(&config);

    // Wrap the one-shot boot payload in RefCell<Option<_>> to satisfy the
    // Fn bound while only consuming it once.
    let boot_state = RefCell::new(Some((config, flags.start_paths, engine)));
    let boot = move || {
        let (config, start_paths, engine) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(&config, start_paths, engine)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally enqueues media passed
    /// on the command line.
    fn new(
        config: &Config,
        start_paths: Vec<std::path::PathBuf>,
        engine: Box<dyn PlaybackEngine>,
    ) -> (Self, iced::Task<Message>) {
        let mut transport =
            TransportController::new(engine, config.playback.end_of_clip_threshold());
        if let Err(err) = transport.set_volume(config.playback.initial_volume()) {
            warn!("startup volume rejected: {}", err);
        }

        let app = App {
            transport,
            display: ProgressSnapshot::default(),
            seek_preview: None,
            status: None,
            fullscreen: false,
            last_surface_click: None,
            tick_interval: config.playback.tick_interval(),
            seek_step_ms: config.playback.seek_step_ms(),
        };

        let task = if start_paths.is_empty() {
            iced::Task::none()
        } else {
            iced::Task::done(Message::OpenDialogResult(start_paths))
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.transport.current() {
            Some(source) => format!("{} - marquee", source.display_name()),
            None => String::from("marquee"),
        }
    }
}
