//! Command-line interface for the tic-tac-toe window.

use clap::Parser;

/// Tic-tac-toe for two players sharing one mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Local two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding window size, layout metrics, colors or controls
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Behave as if hosted by another runtime: the quit key is ignored
    #[arg(long)]
    pub embedded: bool,
}
