//! Input events consumed by the frame loop.

use crate::geometry::Point;

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button or a touch.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel button.
    Middle,
}

/// A pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Escape, an alternative quit key on a native host.
    Escape,
}

/// One input event, already translated from the window backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    CloseRequested,
    /// A key went down.
    KeyPressed(Key),
    /// The pointer moved to a new position.
    PointerMoved(Point),
    /// A pointer button went down.
    PointerPressed {
        /// Where the press happened.
        position: Point,
        /// Which button.
        button: PointerButton,
    },
}

impl InputEvent {
    /// Returns the press position when this is a primary-button press.
    pub fn primary_press(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerPressed {
                position,
                button: PointerButton::Primary,
            } => Some(position),
            _ => None,
        }
    }
}
