//! A single board square.

use crate::config::Config;
use crate::geometry::{Point, Rect};
use crate::render::Canvas;
use crate::types::{Cell, Marker, Player};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {} is already occupied by {}", _0, _1)]
    SquareOccupied(#[error(not(source))] Cell, #[error(not(source))] Player),
}

/// One cell of the board: where it sits, what it holds, and whether it is
/// part of the winning line.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    cell: Cell,
    rect: Rect,
    marker: Marker,
    highlighted: bool,
}

impl Square {
    /// Creates an empty square covering `rect`.
    pub fn new(cell: Cell, rect: Rect) -> Self {
        Self {
            cell,
            rect,
            marker: Marker::Empty,
            highlighted: false,
        }
    }

    /// Board address of this square.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Pixel bounds of this square.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Current occupant.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Whether the square belongs to the winning line.
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Checks if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }

    /// Strict interior hit-test; points on the edges belong to no square.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.rect.contains_strict(Point::new(px, py))
    }

    /// Puts `player`'s mark on this square.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] and leaves the square untouched
    /// when it already holds a mark.
    #[instrument(skip(self), fields(cell = %self.cell))]
    pub fn place(&mut self, player: Player) -> Result<(), PlaceError> {
        if let Some(occupant) = self.marker.player() {
            return Err(PlaceError::SquareOccupied(self.cell, occupant));
        }
        self.marker = player.into();
        debug!(%player, "Marker placed");
        Ok(())
    }

    pub(crate) fn highlight(&mut self) {
        self.highlighted = true;
    }

    pub(crate) fn clear(&mut self) {
        self.marker = Marker::Empty;
        self.highlighted = false;
    }

    /// Draws the marker, if any, over a filled background.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &Config) {
        if self.marker.is_empty() {
            return;
        }

        let theme = config.theme();
        let metrics = config.layout();
        let background = if self.highlighted {
            theme.highlight
        } else {
            theme.square_background
        };
        canvas.fill_rect(self.rect, background);

        let inset = metrics.marker_inset;
        let Rect { x, y, width, height } = self.rect;
        match self.marker {
            Marker::X => {
                canvas.line(
                    Point::new(x + inset, y + inset),
                    Point::new(x + width - inset, y + height - inset),
                    metrics.cross_width,
                    theme.cross,
                );
                canvas.line(
                    Point::new(x + width - inset, y + inset),
                    Point::new(x + inset, y + height - inset),
                    metrics.cross_width,
                    theme.cross,
                );
            }
            Marker::O => {
                canvas.ring(
                    self.rect.center(),
                    metrics.circle_radius,
                    metrics.circle_width,
                    theme.circle,
                );
            }
            Marker::Empty => {}
        }
    }
}
