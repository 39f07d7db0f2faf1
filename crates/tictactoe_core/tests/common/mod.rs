//! Shared test helpers.

#![allow(dead_code)]

use tictactoe_core::{Canvas, Point, Rect, Rgb};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    FillRect(Rect, Rgb),
    FillRoundedRect(Rect, f32, Rgb),
    Line(Point, Point, f32, Rgb),
    Ring(Point, f32, f32, Rgb),
    Text(String, Point, f32, Rgb),
}

/// Canvas that remembers every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line(..)))
            .count()
    }

    pub fn rings(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Ring(..)))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(s, ..) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::FillRoundedRect(rect, radius, color));
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        self.calls.push(DrawCall::Line(from, to, width, color));
    }

    fn ring(&mut self, center: Point, radius: f32, thickness: f32, color: Rgb) {
        self.calls.push(DrawCall::Ring(center, radius, thickness, color));
    }

    fn text(&mut self, label: &str, center: Point, size: f32, color: Rgb) {
        self.calls.push(DrawCall::Text(label.to_string(), center, size, color));
    }
}
