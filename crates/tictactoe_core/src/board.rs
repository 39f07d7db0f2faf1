//! The 3x3 board: placement, win detection and reset.

use crate::config::Config;
use crate::geometry::{Layout, Point, Rect};
use crate::render::Canvas;
use crate::square::{PlaceError, Square};
use crate::types::{Cell, Marker, Player};
use tracing::{debug, info, instrument};

/// A 3x3 grid of [`Square`]s and the winner, once there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [[Square; 3]; 3],
    bounds: Rect,
    winner: Option<Player>,
}

impl Board {
    /// Creates an empty board laid out according to `layout`.
    #[instrument(skip(layout))]
    pub fn new(layout: &Layout) -> Self {
        let squares = [0, 1, 2].map(|row| {
            [0, 1, 2].map(|col| {
                let cell = Cell::ALL[row * 3 + col];
                Square::new(cell, layout.cell(cell))
            })
        });

        Self {
            squares,
            bounds: *layout.board(),
            winner: None,
        }
    }

    /// Pixel bounds including the outer grid strokes.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The winner detected by the last [`Board::check_winner`], if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Gets the square at `cell`.
    pub fn square(&self, cell: Cell) -> &Square {
        &self.squares[cell.row()][cell.col()]
    }

    fn square_mut(&mut self, cell: Cell) -> &mut Square {
        &mut self.squares[cell.row()][cell.col()]
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Gets the marker at `cell`.
    pub fn marker(&self, cell: Cell) -> Marker {
        self.square(cell).marker()
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares().all(|sq| !sq.is_empty())
    }

    /// Clears every marker, every highlight and the winner.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares.iter_mut().flatten().for_each(Square::clear);
        self.winner = None;
        debug!("Board reset");
    }

    /// Finds the square whose interior contains the point, scanning row-major.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<&Square> {
        self.squares().find(|sq| sq.contains(px, py))
    }

    /// Mutable variant of [`Board::hit_test`].
    pub fn hit_test_mut(&mut self, px: f32, py: f32) -> Option<&mut Square> {
        self.squares
            .iter_mut()
            .flatten()
            .find(|sq| sq.contains(px, py))
    }

    /// Places `player`'s mark at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] when the square already holds a mark.
    pub fn place(&mut self, cell: Cell, player: Player) -> Result<(), PlaceError> {
        self.square_mut(cell).place(player)
    }

    /// Looks for three equal marks in a line.
    ///
    /// Rows are scanned top to bottom, then columns left to right, then the
    /// main and anti diagonal. The first match is highlighted and recorded as
    /// the winner. Returns `false` and leaves the winner untouched when no line
    /// is complete.
    #[instrument(skip(self))]
    pub fn check_winner(&mut self) -> bool {
        let rows = (0..3).map(|r| [(r, 0), (r, 1), (r, 2)]);
        let cols = (0..3).map(|c| [(0, c), (1, c), (2, c)]);
        if let Some(line) = rows.chain(cols).find_map(|line| self.complete_line(line)) {
            return self.declare(line);
        }

        // Both diagonals run through the center.
        if self.marker(Cell::CENTER).is_empty() {
            return false;
        }
        let diagonals = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];
        match diagonals.into_iter().find_map(|line| self.complete_line(line)) {
            Some(line) => self.declare(line),
            None => false,
        }
    }

    /// Returns the line and its owner when all three squares hold the same mark.
    fn complete_line(&self, line: [(usize, usize); 3]) -> Option<([(usize, usize); 3], Player)> {
        let [a, b, c] = line.map(|(r, col)| self.squares[r][col].marker());
        let player = a.player()?;
        (a == b && b == c).then_some((line, player))
    }

    fn declare(&mut self, (line, player): ([(usize, usize); 3], Player)) -> bool {
        for (r, c) in line {
            self.squares[r][c].highlight();
        }
        self.winner = Some(player);
        info!(%player, ?line, "Winning line found");
        true
    }

    /// Paints the background, the board, the grid and every square.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &Config) {
        let theme = config.theme();
        let metrics = config.layout();
        let Rect { x, y, width, height } = self.bounds;
        let stride = metrics.square_size + metrics.line_width;
        let half = metrics.line_width / 2.0;

        canvas.clear(theme.background);
        canvas.fill_rect(self.bounds, theme.board);

        for i in 0..4 {
            let offset = i as f32 * stride + half;
            canvas.line(
                Point::new(x, y + offset),
                Point::new(x + width, y + offset),
                metrics.line_width,
                theme.grid_line,
            );
        }
        for i in 0..4 {
            let offset = i as f32 * stride + half;
            canvas.line(
                Point::new(x + offset, y),
                Point::new(x + offset, y + height),
                metrics.line_width,
                theme.grid_line,
            );
        }

        for square in self.squares() {
            square.render(canvas, config);
        }
    }
}
