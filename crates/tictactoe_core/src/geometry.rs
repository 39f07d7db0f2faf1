//! Pixel geometry and the fixed screen layout.

use crate::config::Config;
use crate::types::Cell;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// A point in logical window pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict interior test: points on any edge are outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        self.x < p.x && p.x < self.right() && self.y < p.y && p.y < self.bottom()
    }

    /// Half-open test: left and top edges inside, right and bottom edges outside.
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x < self.right() && self.y <= p.y && p.y < self.bottom()
    }
}

/// Rectangles of every screen region, derived once from a [`Config`].
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Layout {
    /// The whole window.
    window: Rect,
    /// Title bar across the top.
    title: Rect,
    /// Board including its outer grid strokes.
    board: Rect,
    /// Square rects in row-major order.
    cells: [Rect; 9],
    /// Footer across the bottom.
    footer: Rect,
    /// Reset button, centered in the footer.
    button: Rect,
}

impl Layout {
    /// Derives all regions from the window size and layout metrics.
    #[instrument(skip(config))]
    pub fn compute(config: &Config) -> Self {
        let window = config.window();
        let metrics = config.layout();

        let title = Rect::new(0.0, 0.0, window.width, metrics.title_height);
        let footer_top = window.height - metrics.footer_height;
        let footer = Rect::new(0.0, footer_top, window.width, metrics.footer_height);

        let body_height = window.height - metrics.title_height - metrics.footer_height;
        let side = metrics.board_side();
        let board_left = ((window.width - side) / 2.0).floor();
        let board_top = metrics.title_height + ((body_height - side) / 2.0).floor();
        let board = Rect::new(board_left, board_top, side, side);

        let stride = metrics.square_size + metrics.line_width;
        let cells = Cell::ALL.map(|cell| {
            Rect::new(
                board_left + cell.col() as f32 * stride + metrics.line_width,
                board_top + cell.row() as f32 * stride + metrics.line_width,
                metrics.square_size,
                metrics.square_size,
            )
        });

        let button = Rect::new(
            ((window.width - metrics.button_width) / 2.0).floor(),
            footer_top + ((metrics.footer_height - metrics.button_height) / 2.0).floor(),
            metrics.button_width,
            metrics.button_height,
        );

        debug!(?board, ?button, "Layout computed");

        Self {
            window: Rect::new(0.0, 0.0, window.width, window.height),
            title,
            board,
            cells,
            footer,
            button,
        }
    }

    /// Rect of a single square.
    pub fn cell(&self, cell: Cell) -> Rect {
        self.cells[cell.index()]
    }
}
