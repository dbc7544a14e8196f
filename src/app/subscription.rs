// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is always routed; the sampling tick only exists while
//! the transport is playing, so stopping or reloading halts the sampler
//! before anything else happens.

use super::{App, Message};
use iced::keyboard;
use iced::{time, Subscription};

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let keys = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                handle_key_press(key, modifiers)
            }
            _ => None,
        });
        if self.transport.state().is_playing() {
            let ticks = time::every(self.tick_interval).map(Message::Tick);
            Subscription::batch([keys, ticks])
        } else {
            keys
        }
    }
}

fn handle_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    Some(Message::KeyPressed(key))
}
