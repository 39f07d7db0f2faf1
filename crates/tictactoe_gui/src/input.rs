//! Polling macroquad input into game events.

use macroquad::prelude::*;
use tictactoe_core::{InputEvent, Key, Point, PointerButton};

/// Translates macroquad's per-frame input state into [`InputEvent`]s.
///
/// macroquad exposes polled state rather than a queue, so pointer motion is
/// derived by comparing against the position seen on the previous frame.
#[derive(Debug, Default)]
pub struct InputPoller {
    last_pointer: Option<Point>,
}

impl InputPoller {
    /// Creates a poller that will report the first pointer position as a move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects this frame's events, in the order close, keys, motion, presses.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::CloseRequested);
        }

        while let Some(ch) = get_char_pressed() {
            events.push(InputEvent::KeyPressed(Key::Char(ch)));
        }
        if is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::KeyPressed(Key::Escape));
        }

        let pointer = Point::from(mouse_position());
        if self.last_pointer != Some(pointer) {
            self.last_pointer = Some(pointer);
            events.push(InputEvent::PointerMoved(pointer));
        }

        let buttons = [
            (MouseButton::Left, PointerButton::Primary),
            (MouseButton::Right, PointerButton::Secondary),
            (MouseButton::Middle, PointerButton::Middle),
        ];
        for (mouse, button) in buttons {
            if is_mouse_button_pressed(mouse) {
                events.push(InputEvent::PointerPressed {
                    position: pointer,
                    button,
                });
            }
        }

        events
    }
}
