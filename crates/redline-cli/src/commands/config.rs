use std::path::PathBuf;

use anyhow::Result;
use redline_config::Config;

pub fn handle(config: &Config, explicit: Option<PathBuf>, path_only: bool) -> Result<()> {
    let path = explicit.unwrap_or_else(Config::config_path);

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
