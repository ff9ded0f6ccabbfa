//! sitejobs library root.
//! Exposes the CLI parser, the high-level run() function and the form core
//! (login gate, validator, normalizer, row-store client).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Schema { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::schema::handle(&cli.command, &cfg)
        }
        Commands::Submit { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::submit::handle(&cli.command, &cfg)
        }
    }
}

/// Diagnostic logging: RUST_LOG wins, otherwise warnings plus whatever -v asks for.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    log::debug!("using configuration {}", config_path.display());

    dispatch(&cli, &config_path)
}
