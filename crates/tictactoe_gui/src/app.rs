//! Cooperative frame loop over a macroquad window.

use crate::canvas::MacroquadCanvas;
use crate::input::InputPoller;
use macroquad::prelude::*;
use tictactoe_core::{Config, Control, Game, Host};
use tracing::{info, instrument};

/// Window settings for macroquad, taken from the game config.
pub fn window_conf(config: &Config) -> Conf {
    let window = config.window();
    Conf {
        window_title: window.title.clone(),
        window_width: window.width.round() as i32,
        window_height: window.height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Runs the game until the window closes or the quit key is pressed.
///
/// Frames are painted into an offscreen target only when the game reports a
/// change; the cached target is presented on every frame.
#[instrument(skip_all, fields(%host))]
pub async fn run(config: Config, host: Host) {
    prevent_quit();

    let (width, height) = (config.window().width, config.window().height);
    let target = render_target(width.round() as u32, height.round() as u32);
    target.texture.set_filter(FilterMode::Linear);
    let offscreen = Camera2D {
        render_target: Some(target.clone()),
        ..Camera2D::from_display_rect(Rect::new(0.0, 0.0, width, height))
    };

    let mut game = Game::new(&config, host);
    let mut input = InputPoller::new();
    let mut canvas = MacroquadCanvas;

    info!("Entering frame loop");
    loop {
        let events = input.poll();

        set_camera(&offscreen);
        let control = game.tick(events, &mut canvas);
        set_default_camera();

        if control == Control::Quit {
            break;
        }

        draw_texture_ex(
            &target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(width, height)),
                flip_y: true,
                ..Default::default()
            },
        );

        next_frame().await;
    }

    info!(frames = game.frames_drawn(), "Frame loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_conf_follows_config() {
        let config = Config::from_toml_str("[window]\nwidth = 900.0\ntitle = \"XO\"").unwrap();
        let conf = window_conf(&config);
        assert_eq!(conf.window_title, "XO");
        assert_eq!(conf.window_width, 900);
        assert_eq!(conf.window_height, 1000);
        assert!(!conf.window_resizable);
    }
}
