// SPDX-License-Identifier: MPL-2.0
//! Layout for the application root.

use super::{App, Message};
use crate::ui::controls;
use iced::widget::{column, container, mouse_area, text, Column};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        // The engine renders video into its own sink; this area stands in
        // for it in the shell window and receives the double-click that
        // toggles fullscreen.
        let surface_text = match self.transport.current() {
            Some(source) => source.display_name(),
            None => String::from("Open a video to start"),
        };
        let surface = mouse_area(container(text(surface_text)).center(Length::Fill))
            .on_press(Message::SurfacePressed);

        let controls = controls::view(controls::ControlsState {
            controls_enabled: self.transport.controls_enabled(),
            slider: self.display.slider,
            seek_preview: self.seek_preview,
            time_label: self.display.label.clone(),
            volume: self.transport.volume(),
        })
        .map(Message::Controls);

        let mut content: Column<'_, Message> = column![surface];
        if let Some(status) = &self.status {
            content = content.push(text(status.clone()).size(14));
        }
        content = content.push(controls);
        content.into()
    }
}
