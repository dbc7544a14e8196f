// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message};
use crate::domain::media::{extensions, MediaSource};
use crate::error::Result;
use crate::player::{action_for_key, ProgressSnapshot, TickOutcome, SLIDER_SCALE};
use crate::ui::controls;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Two surface clicks within this span count as a double activation.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(controls::Message::OpenPressed) => open_dialog_task(),
            Message::Controls(controls::Message::PlayPressed) => {
                let result = self.transport.play();
                self.report(result);
                Task::none()
            }
            Message::Controls(controls::Message::PausePressed) => {
                let result = self.transport.pause();
                self.report(result);
                Task::none()
            }
            Message::Controls(controls::Message::StopPressed) => {
                let result = self.transport.stop();
                if result.is_ok() {
                    self.display = ProgressSnapshot::default();
                }
                self.report(result);
                Task::none()
            }
            Message::Controls(controls::Message::SeekPreview(position)) => {
                self.seek_preview = Some(position);
                Task::none()
            }
            Message::Controls(controls::Message::SeekCommit) => {
                if let Some(position) = self.seek_preview.take() {
                    let result = self
                        .transport
                        .seek_to_fraction(position / f64::from(SLIDER_SCALE));
                    self.report(result);
                }
                Task::none()
            }
            Message::Controls(controls::Message::VolumeChanged(volume)) => {
                let result = self.transport.set_volume(volume);
                self.report(result);
                Task::none()
            }
            Message::OpenDialogResult(paths) => {
                self.handle_picked_paths(paths);
                Task::none()
            }
            Message::Tick(_) => {
                self.handle_tick();
                Task::none()
            }
            Message::KeyPressed(key) => self.handle_key(key),
            Message::SurfacePressed => self.handle_surface_press(),
        }
    }

    /// Outcome of the open dialog or of paths given on the command line.
    /// Zero paths means the user cancelled; current state is untouched.
    fn handle_picked_paths(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        let sources: Vec<MediaSource> = paths.into_iter().map(MediaSource::from).collect();
        match self.transport.open(sources) {
            Ok(()) => {
                info!(
                    items = self.transport.playlist_len(),
                    "playlist opened"
                );
                self.status = None;
                self.display = ProgressSnapshot::default();
                self.seek_preview = None;
            }
            Err(err) => {
                warn!("open failed: {}", err);
                self.status = Some(err.to_string());
                self.display = ProgressSnapshot::default();
                self.seek_preview = None;
            }
        }
    }

    fn handle_tick(&mut self) {
        match self.transport.tick() {
            TickOutcome::Progress(snapshot) => self.display = snapshot,
            TickOutcome::AdvancedTo(next) => {
                // The next tick samples the new clip; show a clean display
                // instead of the previous item's final position.
                info!(source = %next, "now playing");
                self.display = ProgressSnapshot::default();
            }
            TickOutcome::PlaylistFinished => {
                self.display = ProgressSnapshot::default();
            }
            TickOutcome::Idle => {}
        }
    }

    fn handle_key(&mut self, key: Key) -> Task<Message> {
        if self.fullscreen && matches!(key, Key::Named(Named::Escape)) {
            return self.set_fullscreen(false);
        }
        if let Some(action) = action_for_key(&key, self.seek_step_ms) {
            let result = self.transport.apply(action);
            self.report(result);
        }
        Task::none()
    }

    fn handle_surface_press(&mut self) -> Task<Message> {
        let now = Instant::now();
        let double_click = self
            .last_surface_click
            .map(|instant| now.duration_since(instant) <= DOUBLE_CLICK_THRESHOLD)
            .unwrap_or(false);
        self.last_surface_click = Some(now);

        if double_click {
            self.last_surface_click = None;
            let desired = !self.fullscreen;
            self.set_fullscreen(desired)
        } else {
            Task::none()
        }
    }

    fn set_fullscreen(&mut self, desired: bool) -> Task<Message> {
        if self.fullscreen == desired {
            return Task::none();
        }
        self.fullscreen = desired;
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::latest().and_then(move |id| window::set_mode(id, mode))
    }

    /// Records an engine rejection as a non-fatal notice; the state
    /// machine already fell back to its pre-command state.
    fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            warn!("{}", err);
            self.status = Some(err.to_string());
        }
    }
}

/// Opens the multi-file selection dialog.
fn open_dialog_task() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Open Videos")
                .add_filter("Video", extensions::VIDEO)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::OpenDialogResult,
    )
}
