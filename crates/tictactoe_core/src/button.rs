//! Clickable rectangular button with hover feedback.

use crate::config::{Config, Rgb};
use crate::event::InputEvent;
use crate::geometry::{Point, Rect};
use crate::render::Canvas;
use tracing::{debug, instrument};

/// Command a button emits when clicked. The frame loop dispatches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ButtonAction {
    /// Clear the board and hand the first move back to X.
    ResetBoard,
}

/// A labeled button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    rect: Rect,
    label: String,
    color: Rgb,
    hover_color: Rgb,
    radius: f32,
    action: Option<ButtonAction>,
    is_hovered: bool,
}

impl Button {
    /// Creates a button with no action bound.
    pub fn new(rect: Rect, label: impl Into<String>, color: Rgb, hover_color: Rgb) -> Self {
        Self {
            rect,
            label: label.into(),
            color,
            hover_color,
            radius: 0.0,
            action: None,
            is_hovered: false,
        }
    }

    /// Sets the corner radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Binds the command emitted on click.
    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Replaces the bound command.
    pub fn set_action(&mut self, action: Option<ButtonAction>) {
        self.action = action;
    }

    /// Bounding rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the pointer was over the button at its last move.
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    fn hit(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Tracks hover state and reports whether the button needs repainting.
    ///
    /// Returns `true` for a primary press inside the button, or for a pointer
    /// move that changes the hover state.
    pub fn update(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerMoved(p) => {
                let hovered = self.hit(p);
                if hovered != self.is_hovered {
                    self.is_hovered = hovered;
                    debug!(hovered, label = %self.label, "Button hover changed");
                    return true;
                }
                false
            }
            _ => event.primary_press().is_some_and(|p| self.hit(p)),
        }
    }

    /// Tracks hover state and returns the bound action for a qualifying click.
    #[instrument(level = "trace", skip(self), fields(label = %self.label))]
    pub fn handle(&mut self, event: &InputEvent) -> Option<ButtonAction> {
        if let InputEvent::PointerMoved(p) = *event {
            self.is_hovered = self.hit(p);
        }
        let press = event.primary_press()?;
        if !self.hit(press) {
            return None;
        }
        debug!(action = ?self.action, "Button clicked");
        self.action
    }

    /// Draws the rounded body and the centered label.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &Config) {
        let fill = if self.is_hovered {
            self.hover_color
        } else {
            self.color
        };
        canvas.fill_rounded_rect(self.rect, self.radius, fill);
        canvas.text(
            &self.label,
            self.rect.center(),
            config.layout().button_font_size,
            config.theme().button_text,
        );
    }
}
