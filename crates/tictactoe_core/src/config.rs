//! Game configuration: window, layout metrics, colors and controls.
//!
//! A [`Config`] is built once at startup, either from defaults or from a TOML
//! file, and then only ever passed around by shared reference.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// An opaque RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window size and caption.
    window: WindowConfig,
    /// Pixel metrics of the title bar, board, footer and button.
    layout: LayoutConfig,
    /// Colors.
    theme: Theme,
    /// Keyboard bindings.
    controls: Controls,
}

/// Window size and caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: f32,
    /// Window height in logical pixels.
    pub height: f32,
    /// Caption, also drawn in the title bar.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            title: "TIC TAC TOE".to_string(),
        }
    }
}

/// Pixel metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the title bar.
    pub title_height: f32,
    /// Height of the footer holding the reset button.
    pub footer_height: f32,
    /// Side length of one board square.
    pub square_size: f32,
    /// Width of the grid strokes between squares.
    pub line_width: f32,
    /// Reset button width.
    pub button_width: f32,
    /// Reset button height.
    pub button_height: f32,
    /// Reset button corner radius.
    pub button_radius: f32,
    /// Distance between a square's edge and the marker drawn inside it.
    pub marker_inset: f32,
    /// Stroke width of the X.
    pub cross_width: f32,
    /// Outer radius of the O.
    pub circle_radius: f32,
    /// Ring thickness of the O.
    pub circle_width: f32,
    /// Font size of the title text.
    pub title_font_size: f32,
    /// Font size of the button label.
    pub button_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_height: 100.0,
            footer_height: 100.0,
            square_size: 200.0,
            line_width: 10.0,
            button_width: 200.0,
            button_height: 50.0,
            button_radius: 20.0,
            marker_inset: 55.0,
            cross_width: 25.0,
            circle_radius: 60.0,
            circle_width: 15.0,
            title_font_size: 30.0,
            button_font_size: 30.0,
        }
    }
}

impl LayoutConfig {
    /// Side length of the board including the outer grid strokes.
    pub fn board_side(&self) -> f32 {
        3.0 * self.square_size + 4.0 * self.line_width
    }

    /// Every metric with its TOML key, in declaration order.
    fn metrics(&self) -> [(&'static str, f32); 13] {
        [
            ("layout.title_height", self.title_height),
            ("layout.footer_height", self.footer_height),
            ("layout.square_size", self.square_size),
            ("layout.line_width", self.line_width),
            ("layout.button_width", self.button_width),
            ("layout.button_height", self.button_height),
            ("layout.button_radius", self.button_radius),
            ("layout.marker_inset", self.marker_inset),
            ("layout.cross_width", self.cross_width),
            ("layout.circle_radius", self.circle_radius),
            ("layout.circle_width", self.circle_width),
            ("layout.title_font_size", self.title_font_size),
            ("layout.button_font_size", self.button_font_size),
        ]
    }
}

/// Colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Window background.
    pub background: Rgb,
    /// Title bar fill.
    pub title_background: Rgb,
    /// Title text.
    pub title_text: Rgb,
    /// Footer fill.
    pub footer_background: Rgb,
    /// Board fill behind the squares.
    pub board: Rgb,
    /// Grid strokes.
    pub grid_line: Rgb,
    /// Fill of an occupied square.
    pub square_background: Rgb,
    /// Fill of a square on the winning line.
    pub highlight: Rgb,
    /// X strokes.
    pub cross: Rgb,
    /// O ring.
    pub circle: Rgb,
    /// Button fill.
    pub button: Rgb,
    /// Button fill under the pointer.
    pub button_hover: Rgb,
    /// Button label.
    pub button_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb(107, 230, 224),
            title_background: Rgb(95, 30, 174),
            title_text: Rgb(255, 255, 255),
            footer_background: Rgb(95, 30, 174),
            board: Rgb(113, 125, 141),
            grid_line: Rgb(255, 255, 255),
            square_background: Rgb(0, 0, 0),
            highlight: Rgb(107, 230, 224),
            cross: Rgb(230, 106, 112),
            circle: Rgb(174, 230, 106),
            // hsl(177, 71%, 50%) and hsl(177, 71%, 70%)
            button: Rgb(37, 218, 209),
            button_hover: Rgb(124, 233, 227),
            button_text: Rgb(0, 0, 0),
        }
    }
}

/// Keyboard bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Key that closes the game on a native host.
    pub quit_key: char,
}

impl Default for Controls {
    fn default() -> Self {
        Self { quit_key: 'q' }
    }
}

/// Metrics allowed to be zero; every other size must be strictly positive.
const MAY_BE_ZERO: [&str; 3] = [
    "layout.line_width",
    "layout.button_radius",
    "layout.marker_inset",
];

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Unreadable, e.to_string()))?;

        let config = Self::from_toml_str(&content)?;
        info!(title = %config.window.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Malformed, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every metric is a usable size and every region fits inside
    /// the window.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        let layout = &self.layout;

        let sizes = [("window.width", window.width), ("window.height", window.height)]
            .into_iter()
            .chain(layout.metrics());
        for (key, value) in sizes {
            if !value.is_finite() {
                return Err(ConfigError::invalid(
                    key,
                    format!("must be a finite number, got {}", value),
                ));
            }
            let (in_range, bound) = if MAY_BE_ZERO.contains(&key) {
                (value >= 0.0, "non-negative")
            } else {
                (value > 0.0, "positive")
            };
            if !in_range {
                return Err(ConfigError::invalid(
                    key,
                    format!("must be {}, got {}", bound, value),
                ));
            }
        }

        let body_height = window.height - layout.title_height - layout.footer_height;
        let side = layout.board_side();
        if side > window.width || side > body_height {
            return Err(ConfigError::invalid(
                "layout.square_size",
                format!(
                    "board of side {} does not fit in a {}x{} body",
                    side, window.width, body_height
                ),
            ));
        }

        if layout.button_width > window.width || layout.button_height > layout.footer_height {
            return Err(ConfigError::invalid(
                "layout.button_height",
                format!(
                    "button {}x{} does not fit in the footer",
                    layout.button_width, layout.button_height
                ),
            ));
        }

        if 2.0 * layout.marker_inset >= layout.square_size {
            return Err(ConfigError::invalid(
                "layout.marker_inset",
                format!(
                    "inset {} leaves no room inside a square of size {}",
                    layout.marker_inset, layout.square_size
                ),
            ));
        }

        debug!(board_side = side, body_height, "Config validated");
        Ok(())
    }
}

/// Stage at which loading a config failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[strum(to_string = "unreadable")]
    Unreadable,
    /// The text is not valid TOML or has mistyped fields.
    #[strum(to_string = "malformed")]
    Malformed,
    /// A value parsed but cannot produce a playable layout.
    #[strum(to_string = "invalid")]
    Invalid,
}

/// Failure to load or validate a [`Config`].
#[derive(Debug, Clone, Display, Error)]
#[display(
    "{} config{}: {} ({}:{})",
    kind,
    key.map(|k| format!(" key `{k}`")).unwrap_or_default(),
    message,
    file,
    line
)]
pub struct ConfigError {
    /// Which stage failed.
    pub kind: ConfigErrorKind,
    /// Offending TOML key, for validation failures.
    pub key: Option<&'static str>,
    /// What went wrong.
    pub message: String,
    /// Line where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error not tied to a single key.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            key: None,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a validation error for one key.
    #[track_caller]
    pub fn invalid(key: &'static str, message: String) -> Self {
        Self {
            key: Some(key),
            ..Self::new(ConfigErrorKind::Invalid, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            [window]
            title = "Noughts and Crosses"

            [theme]
            cross = [1, 2, 3]

            [controls]
            quit_key = "x"
            "#,
        )
        .unwrap();

        assert_eq!(config.window().title, "Noughts and Crosses");
        assert_eq!(config.window().width, 1000.0);
        assert_eq!(config.theme().cross, Rgb(1, 2, 3));
        assert_eq!(config.theme().circle, Theme::default().circle);
        assert_eq!(config.controls().quit_key, 'x');
    }

    #[test]
    fn test_board_too_large_rejected() {
        let err = Config::from_toml_str(
            r#"
            [layout]
            square_size = 300.0
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Invalid);
        assert!(err.message.contains("does not fit"));
    }

    #[test]
    fn test_non_finite_metrics_rejected() {
        let err = Config::from_toml_str("[window]\nwidth = nan").unwrap_err();
        assert_eq!(err.key, Some("window.width"));
        assert!(err.message.contains("finite"));

        let err = Config::from_toml_str("[layout]\ncircle_radius = inf").unwrap_err();
        assert_eq!(err.key, Some("layout.circle_radius"));
    }

    #[test]
    fn test_negative_line_width_rejected() {
        let err = Config::from_toml_str("[layout]\nline_width = -20.0").unwrap_err();
        assert_eq!(err.key, Some("layout.line_width"));
        assert!(err.message.contains("non-negative"));
    }

    #[test]
    fn test_negative_and_zero_sizes_rejected() {
        for key in ["title_height", "footer_height", "cross_width", "circle_width", "title_font_size"] {
            for value in ["-1.0", "0.0"] {
                let toml = format!("[layout]\n{key} = {value}");
                let err = Config::from_toml_str(&toml).unwrap_err();
                assert_eq!(err.key.map(|k| &k["layout.".len()..]), Some(key), "{toml}");
            }
        }
    }

    #[test]
    fn test_zero_line_width_and_radius_allowed() {
        let config =
            Config::from_toml_str("[layout]\nline_width = 0.0\nbutton_radius = 0.0").unwrap();
        assert_eq!(config.layout().board_side(), 600.0);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Config::from_toml_str("[window\nwidth = 3").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Malformed);
        assert_eq!(err.key, None);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::invalid("layout.square_size", "too big".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(
            err.to_string()
                .starts_with("invalid config key `layout.square_size`: too big (")
        );

        let err = ConfigError::new(ConfigErrorKind::Unreadable, "gone".to_string());
        assert!(err.to_string().starts_with("unreadable config: gone ("));
    }
}
