//! roomgantt library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once; --config overrides the file path.
    let cfg = if let Some(custom) = &cli.config {
        Config::load_from(&utils::path::expand_tilde(custom))?
    } else {
        Config::load()?
    };

    dispatch(&cli, &cfg)
}
