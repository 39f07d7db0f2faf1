//! [`Canvas`] over macroquad's immediate-mode drawing.

use macroquad::prelude::*;
use tictactoe_core::{Canvas, Point, Rgb};

/// Draws into whatever target the active macroquad camera points at.
pub struct MacroquadCanvas;

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::from_rgba(r, g, b, 255)
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, rgb: Rgb) {
        clear_background(color(rgb));
    }

    fn fill_rect(&mut self, rect: tictactoe_core::Rect, rgb: Rgb) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, color(rgb));
    }

    fn fill_rounded_rect(&mut self, rect: tictactoe_core::Rect, radius: f32, rgb: Rgb) {
        let c = color(rgb);
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);

        // Cross of two rectangles, corners filled with quarter discs.
        draw_rectangle(rect.x + r, rect.y, rect.width - 2.0 * r, rect.height, c);
        draw_rectangle(rect.x, rect.y + r, rect.width, rect.height - 2.0 * r, c);
        if r > 0.0 {
            let (left, right) = (rect.x + r, rect.x + rect.width - r);
            let (top, bottom) = (rect.y + r, rect.y + rect.height - r);
            for (cx, cy) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
                draw_circle(cx, cy, r, c);
            }
        }
    }

    fn line(&mut self, from: Point, to: Point, width: f32, rgb: Rgb) {
        draw_line(from.x, from.y, to.x, to.y, width, color(rgb));
    }

    fn ring(&mut self, center: Point, radius: f32, thickness: f32, rgb: Rgb) {
        // macroquad centers the stroke on the radius.
        let mid = radius - thickness / 2.0;
        draw_circle_lines(center.x, center.y, mid, thickness, color(rgb));
    }

    fn text(&mut self, label: &str, center: Point, size: f32, rgb: Rgb) {
        let font_size = size.round() as u16;
        let dims = measure_text(label, None, font_size, 1.0);
        let x = center.x - dims.width / 2.0;
        let y = center.y - dims.height / 2.0 + dims.offset_y;
        draw_text(label, x, y, size, color(rgb));
    }
}
