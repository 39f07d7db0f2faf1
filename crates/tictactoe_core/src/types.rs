//! Core domain types for tic-tac-toe.

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by X.
    X,
    /// Occupied by O.
    O,
}

impl Marker {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Marker::Empty => None,
            Marker::X => Some(Player::X),
            Marker::O => Some(Player::O),
        }
    }

    /// Checks if the square holding this marker is free.
    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }
}

impl From<Player> for Marker {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Marker::X,
            Player::O => Marker::O,
        }
    }
}

/// A cell address on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Cell = Cell::at(1, 1);

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a cell, or `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_marker_player() {
        assert_eq!(Marker::Empty.player(), None);
        assert_eq!(Marker::from(Player::O).player(), Some(Player::O));
    }

    #[test]
    fn test_cell_bounds() {
        assert_eq!(Cell::new(2, 2).map(Cell::index), Some(8));
        assert_eq!(Cell::new(3, 0), None);
        assert_eq!(Cell::new(0, 3), None);
    }

    #[test]
    fn test_cells_row_major() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }
}
