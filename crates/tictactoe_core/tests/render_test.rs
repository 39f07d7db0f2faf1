//! Tests for what the render pipeline paints.

mod common;

use common::{DrawCall, RecordingCanvas};
use tictactoe_core::{
    Board, Button, Cell, Config, Game, Host, InputEvent, Layout, Player, PointerButton,
    draw_title,
};

fn setup(config: &Config) -> (Layout, Board) {
    let layout = Layout::compute(config);
    let board = Board::new(&layout);
    (layout, board)
}

#[test]
fn test_empty_board_draws_grid_only() {
    let config = Config::default();
    let (_, board) = setup(&config);
    let mut canvas = RecordingCanvas::new();

    board.render(&mut canvas, &config);

    assert_eq!(canvas.calls[0], DrawCall::Clear(config.theme().background));
    assert_eq!(
        canvas.calls[1],
        DrawCall::FillRect(board.bounds(), config.theme().board)
    );
    assert_eq!(canvas.lines(), 8);
    assert_eq!(canvas.rings(), 0);
}

#[test]
fn test_grid_lines_span_the_board() {
    let config = Config::default();
    let (_, board) = setup(&config);
    let mut canvas = RecordingCanvas::new();
    board.render(&mut canvas, &config);

    let bounds = board.bounds();
    for call in &canvas.calls {
        if let DrawCall::Line(from, to, width, _) = call {
            assert_eq!(*width, config.layout().line_width);
            let horizontal = from.y == to.y;
            if horizontal {
                assert_eq!((from.x, to.x), (bounds.x, bounds.right()));
            } else {
                assert_eq!((from.y, to.y), (bounds.y, bounds.bottom()));
            }
        }
    }
}

#[test]
fn test_x_is_two_strokes_and_o_is_a_ring() {
    let config = Config::default();
    let (_, mut board) = setup(&config);
    board.place(Cell::new(0, 0).unwrap(), Player::X).unwrap();
    board.place(Cell::CENTER, Player::O).unwrap();
    let mut canvas = RecordingCanvas::new();

    board.render(&mut canvas, &config);

    assert_eq!(canvas.lines(), 8 + 2);
    assert_eq!(canvas.rings(), 1);
    let center = board.square(Cell::CENTER).rect().center();
    assert!(canvas.calls.contains(&DrawCall::Ring(
        center,
        config.layout().circle_radius,
        config.layout().circle_width,
        config.theme().circle,
    )));
}

#[test]
fn test_x_strokes_are_inset() {
    let config = Config::default();
    let (_, mut board) = setup(&config);
    let cell = Cell::new(2, 1).unwrap();
    board.place(cell, Player::X).unwrap();
    let mut canvas = RecordingCanvas::new();
    board.square(cell).render(&mut canvas, &config);

    let rect = board.square(cell).rect();
    let inset = config.layout().marker_inset;
    match &canvas.calls[1] {
        DrawCall::Line(from, to, width, color) => {
            assert_eq!((from.x, from.y), (rect.x + inset, rect.y + inset));
            assert_eq!((to.x, to.y), (rect.right() - inset, rect.bottom() - inset));
            assert_eq!(*width, config.layout().cross_width);
            assert_eq!(*color, config.theme().cross);
        }
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_winning_squares_use_highlight_fill() {
    let config = Config::default();
    let (_, mut board) = setup(&config);
    for col in 0..3 {
        board.place(Cell::new(0, col).unwrap(), Player::O).unwrap();
    }
    board.place(Cell::new(2, 2).unwrap(), Player::X).unwrap();
    assert!(board.check_winner());

    let theme = config.theme();
    let mut canvas = RecordingCanvas::new();
    board.render(&mut canvas, &config);

    let fills: Vec<_> = canvas
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::FillRect(rect, color) if *rect != board.bounds() => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![
            theme.highlight,
            theme.highlight,
            theme.highlight,
            theme.square_background,
        ]
    );
}

#[test]
fn test_button_color_follows_hover() {
    let config = Config::default();
    let theme = config.theme();
    let mut game = Game::new(&config, Host::Native);
    let mut canvas = RecordingCanvas::new();
    let over = InputEvent::PointerMoved(game.layout().button().center());
    game.tick([over], &mut canvas);

    let button: &Button = game.button();
    assert!(canvas.calls.contains(&DrawCall::FillRoundedRect(
        button.rect(),
        config.layout().button_radius,
        theme.button_hover,
    )));
}

#[test]
fn test_frame_contains_title_and_button_label() {
    let config = Config::default();
    let mut game = Game::new(&config, Host::Native);
    let mut canvas = RecordingCanvas::new();
    let press = InputEvent::PointerPressed {
        position: game.layout().cell(Cell::CENTER).center(),
        button: PointerButton::Primary,
    };
    game.tick([press], &mut canvas);

    assert_eq!(canvas.texts(), vec!["TIC TAC TOE", "Reset Game"]);
}

#[test]
fn test_title_uses_configured_caption() {
    let config = Config::from_toml_str("[window]\ntitle = \"Noughts\"").unwrap();
    let layout = Layout::compute(&config);
    let mut canvas = RecordingCanvas::new();
    draw_title(&mut canvas, &config, &layout);

    assert_eq!(
        canvas.calls,
        vec![
            DrawCall::FillRect(*layout.title(), config.theme().title_background),
            DrawCall::Text(
                "Noughts".to_string(),
                layout.title().center(),
                config.layout().title_font_size,
                config.theme().title_text,
            ),
        ]
    );
}
