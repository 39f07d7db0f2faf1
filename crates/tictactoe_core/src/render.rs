//! Stateless drawing of the whole window onto a [`Canvas`].

use crate::board::Board;
use crate::button::Button;
use crate::config::{Config, Rgb};
use crate::geometry::{Layout, Point, Rect};
use tracing::instrument;

/// Drawing target. Implemented by the window backend, and by recorders in tests.
///
/// All coordinates are logical window pixels with the origin at the top-left.
pub trait Canvas {
    /// Fills the whole target.
    fn clear(&mut self, color: Rgb);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Fills a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgb);

    /// Strokes a straight line.
    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgb);

    /// Strokes a circle outline `thickness` wide, measured inwards from `radius`.
    fn ring(&mut self, center: Point, radius: f32, thickness: f32, color: Rgb);

    /// Draws a single line of text centered on `center`.
    fn text(&mut self, label: &str, center: Point, size: f32, color: Rgb);
}

/// Title bar with the game name.
pub fn draw_title<C: Canvas + ?Sized>(canvas: &mut C, config: &Config, layout: &Layout) {
    let title = layout.title();
    canvas.fill_rect(*title, config.theme().title_background);
    canvas.text(
        &config.window().title,
        title.center(),
        config.layout().title_font_size,
        config.theme().title_text,
    );
}

/// Footer strip with the reset button on top.
pub fn draw_footer<C: Canvas + ?Sized>(
    canvas: &mut C,
    config: &Config,
    layout: &Layout,
    button: &Button,
) {
    canvas.fill_rect(*layout.footer(), config.theme().footer_background);
    button.render(canvas, config);
}

/// Paints a complete frame. The board goes first since it clears the window.
#[instrument(level = "trace", skip_all)]
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    config: &Config,
    layout: &Layout,
    board: &Board,
    button: &Button,
) {
    board.render(canvas, config);
    draw_title(canvas, config, layout);
    draw_footer(canvas, config, layout, button);
}
