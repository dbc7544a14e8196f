// SPDX-License-Identifier: MPL-2.0
//! Transport controls toolbar.
//!
//! Open/Play/Pause/Stop buttons, the seek slider, the elapsed/duration
//! label and the volume slider. Play, Pause and Stop light up only while
//! a media item is loaded; Open is always available.

use crate::player::SLIDER_SCALE;
use iced::widget::{button, container, row, slider, text};
use iced::{Alignment, Element, Length};

/// Messages emitted by the transport controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Request the file-selection dialog.
    OpenPressed,
    PlayPressed,
    PausePressed,
    StopPressed,

    /// Seek preview: the slider is being dragged, visual feedback only.
    /// Value in slider units (0..=1000).
    SeekPreview(f64),

    /// Seek commit: the slider was released, perform the actual seek at
    /// the preview position.
    SeekCommit,

    /// Volume slider moved, in percent.
    VolumeChanged(i32),
}

/// Render inputs for the controls row, derived from the transport state
/// each frame.
#[derive(Debug, Clone)]
pub struct ControlsState {
    /// Play/Pause/Stop enablement, derived from the transport state.
    pub controls_enabled: bool,
    /// Seek slider value in `0..=1000`.
    pub slider: u16,
    /// Preview position while the slider is being dragged, if any.
    pub seek_preview: Option<f64>,
    /// Formatted "elapsed / duration" text.
    pub time_label: String,
    /// Current volume in percent.
    pub volume: i32,
}

/// Renders the transport controls row.
pub fn view(state: ControlsState) -> Element<'static, Message> {
    let enabled = state.controls_enabled;

    let open_button = button(text("Open")).on_press(Message::OpenPressed);
    let play_button =
        button(text("Play")).on_press_maybe(enabled.then_some(Message::PlayPressed));
    let pause_button =
        button(text("Pause")).on_press_maybe(enabled.then_some(Message::PausePressed));
    let stop_button =
        button(text("Stop")).on_press_maybe(enabled.then_some(Message::StopPressed));

    // The preview position wins while a drag is in flight; the sampler
    // overwrites it on the first tick after the commit.
    let slider_position = state
        .seek_preview
        .unwrap_or_else(|| f64::from(state.slider));
    let seek_slider = slider(
        0.0..=f64::from(SLIDER_SCALE),
        slider_position,
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .step(1.0)
    .width(Length::FillPortion(1));

    let time_label = text(state.time_label);

    let volume_slider = slider(0..=100, state.volume, Message::VolumeChanged)
        .width(Length::Fixed(100.0));

    let controls = row![
        open_button,
        play_button,
        pause_button,
        stop_button,
        seek_slider,
        time_label,
        volume_slider,
    ]
    .spacing(10)
    .padding(6)
    .align_y(Alignment::Center);

    container(controls).width(Length::Fill).into()
}
