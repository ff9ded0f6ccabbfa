use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes a default configuration file. The allow-list starts empty, so
/// `submit` refuses to run until someone is added to it.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        println!("⚙️  Initializing sitejobs…");

        if Config::init_at(config_path, *force)? {
            success(format!("Config file: {}", config_path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
            return Ok(());
        }

        let cfg = Config::load_from(config_path)?;
        info(format!("Sheet target: {:?} {}", cfg.store.kind, cfg.store.path));
        for problem in cfg.problems() {
            warning(format!("Before submitting: {}", problem));
        }
    }

    Ok(())
}
