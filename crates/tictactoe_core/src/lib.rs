//! Tic-tac-toe game logic, widgets and frame loop.
//!
//! Nothing in this crate touches a window. A backend translates its input into
//! [`InputEvent`]s, implements [`Canvas`] for drawing, and drives [`Game::tick`]
//! once per frame.
//!
//! # Architecture
//!
//! - **Geometry**: [`Layout`] derives every screen region from the [`Config`]
//! - **Board**: nine [`Square`]s, placement, win detection and reset
//! - **Button**: the footer widget that emits [`ButtonAction::ResetBoard`]
//! - **Render**: stateless drawing through the [`Canvas`] trait
//! - **Game**: the per-frame state machine tying it all together
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Cell, Config, Game, Host, Phase, Player};
//!
//! let config = Config::default();
//! let mut game = Game::new(&config, Host::Native);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.play(Cell::new(row, col).unwrap());
//! }
//! assert_eq!(game.phase(), Phase::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod button;
mod config;
mod event;
mod game;
mod geometry;
mod render;
mod square;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Marker, Player};

// Crate-level exports - Configuration
pub use config::{
    Config, ConfigError, ConfigErrorKind, Controls, LayoutConfig, Rgb, Theme, WindowConfig,
};

// Crate-level exports - Geometry
pub use geometry::{Layout, Point, Rect};

// Crate-level exports - Board and widgets
pub use board::Board;
pub use button::{Button, ButtonAction};
pub use square::{PlaceError, Square};

// Crate-level exports - Input and rendering
pub use event::{InputEvent, Key, PointerButton};
pub use render::{Canvas, draw_footer, draw_frame, draw_title};

// Crate-level exports - Frame loop
pub use game::{Control, Game, Host, Phase, RESET_LABEL};
