use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize the ~/.tagc.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(config::default_path);

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("Commands are stored in: {}", config.store_file.display());

    Ok(())
}
