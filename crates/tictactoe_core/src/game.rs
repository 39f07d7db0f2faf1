//! The frame loop state machine.
//!
//! A [`Game`] owns the board, the reset button and the turn. The window
//! backend calls [`Game::tick`] once per frame with the events it drained for
//! that frame, then yields to its host before the next frame.

use crate::board::Board;
use crate::button::{Button, ButtonAction};
use crate::config::Config;
use crate::event::{InputEvent, Key};
use crate::geometry::{Layout, Point};
use crate::render::{Canvas, draw_frame};
use crate::square::Square;
use crate::types::{Cell, Player};
use tracing::{debug, info, instrument, warn};

/// Label of the footer button.
pub const RESET_LABEL: &str = "Reset Game";

/// Where the game loop is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Host {
    /// A desktop process that owns its window.
    Native,
    /// Hosted by a page or another runtime that owns the window lifecycle.
    Embedded,
}

impl Host {
    /// Detects the host from the compilation target, unless forced embedded.
    pub fn detect(force_embedded: bool) -> Self {
        if force_embedded || cfg!(target_arch = "wasm32") {
            Host::Embedded
        } else {
            Host::Native
        }
    }
}

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No winner yet; clicks on the board place marks.
    AwaitingInput,
    /// A line is complete; only the reset button does anything.
    Won(Player),
}

/// What the caller should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Yield to the host and tick again.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Complete game state for one window.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    config: &'a Config,
    layout: Layout,
    board: Board,
    button: Button,
    current_marker: Player,
    phase: Phase,
    host: Host,
    dirty: bool,
    frames_drawn: u64,
}

impl<'a> Game<'a> {
    /// Creates a fresh game. The first tick always paints.
    #[instrument(skip(config))]
    pub fn new(config: &'a Config, host: Host) -> Self {
        let layout = Layout::compute(config);
        let board = Board::new(&layout);
        let theme = config.theme();
        let button = Button::new(*layout.button(), RESET_LABEL, theme.button, theme.button_hover)
            .with_radius(config.layout().button_radius)
            .with_action(ButtonAction::ResetBoard);

        info!(%host, "New game");

        Self {
            config,
            layout,
            board,
            button,
            current_marker: Player::X,
            phase: Phase::AwaitingInput,
            host,
            dirty: true,
            frames_drawn: 0,
        }
    }

    /// Configuration the game was built from.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Screen regions.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The reset button.
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Player whose mark the next board click places.
    pub fn current_marker(&self) -> Player {
        self.current_marker
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Host the game was started on.
    pub fn host(&self) -> Host {
        self.host
    }

    /// Whether the next tick will repaint.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of frames painted so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Runs one frame: applies this frame's events, then repaints if anything changed.
    ///
    /// Only the events passed in are looked at; a frame without input changes
    /// nothing. Returns [`Control::Quit`] as soon as a quit event is seen, without
    /// painting.
    #[instrument(level = "trace", skip_all, fields(phase = ?self.phase))]
    pub fn tick<C, I>(&mut self, events: I, canvas: &mut C) -> Control
    where
        C: Canvas + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(&event) == Control::Quit {
                return Control::Quit;
            }
        }

        if self.dirty {
            draw_frame(canvas, self.config, &self.layout, &self.board, &self.button);
            self.dirty = false;
            self.frames_drawn += 1;
            debug!(frame = self.frames_drawn, "Frame painted");
        }

        Control::Continue
    }

    /// Applies a single event to the game state.
    pub fn handle_event(&mut self, event: &InputEvent) -> Control {
        match *event {
            InputEvent::CloseRequested => {
                info!("Window close requested");
                return Control::Quit;
            }
            InputEvent::KeyPressed(key) if self.is_quit_key(key) => {
                info!(?key, "Quit key pressed");
                return Control::Quit;
            }
            _ => {}
        }

        if self.button.update(event) {
            self.dirty = true;
        }
        if let Some(action) = self.button.handle(event) {
            self.dispatch(action);
        }

        if self.phase == Phase::AwaitingInput
            && let Some(Point { x, y }) = event.primary_press()
            && let Some(cell) = self.board.hit_test(x, y).map(Square::cell)
        {
            self.play(cell);
        }

        Control::Continue
    }

    fn is_quit_key(&self, key: Key) -> bool {
        match (self.host, key) {
            (Host::Embedded, _) => false,
            (Host::Native, Key::Escape) => true,
            (Host::Native, Key::Char(c)) => c.eq_ignore_ascii_case(&self.config.controls().quit_key),
        }
    }

    /// Runs a button command.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::ResetBoard => self.reset(),
        }
    }

    /// Clears the board and gives the first move back to X.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_marker = Player::X;
        self.phase = Phase::AwaitingInput;
        self.dirty = true;
        info!("Game reset");
    }

    /// Places the current player's mark at `cell` and advances the turn.
    ///
    /// Occupied squares and finished games are left alone.
    #[instrument(skip(self), fields(player = %self.current_marker))]
    pub fn play(&mut self, cell: Cell) {
        if let Phase::Won(winner) = self.phase {
            debug!(%winner, "Game already won, ignoring move");
            return;
        }

        let player = self.current_marker;
        if let Err(e) = self.board.place(cell, player) {
            warn!(error = %e, "Placement rejected");
            return;
        }
        self.current_marker = player.opponent();
        self.dirty = true;

        if self.board.check_winner() {
            if let Some(winner) = self.board.winner() {
                self.phase = Phase::Won(winner);
                info!(%winner, "Game won");
                println!("Player {} wins!", winner);
            }
        } else if self.board.is_full() {
            info!("Game ended in a draw");
        }
    }
}
