//! Command-line interface for the strictly_replay terminal UI.

use crate::config::OrderSetting;
use clap::Parser;
use std::path::PathBuf;

/// Strictly Replay - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_replay")]
#[command(about = "Play tic-tac-toe and jump to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_replay.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Initial move list order, overriding the config file
    #[arg(long, value_enum)]
    pub order: Option<OrderSetting>,
}
