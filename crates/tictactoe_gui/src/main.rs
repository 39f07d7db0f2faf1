//! Tic-tac-toe - windowed game for two players on one machine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod canvas;
mod cli;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_core::{Config, Host};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let host = Host::detect(cli.embedded);

    info!(%host, title = %config.window().title, "Starting tic-tac-toe");

    let conf = app::window_conf(&config);
    macroquad::Window::from_config(conf, app::run(config, host));
    Ok(())
}
