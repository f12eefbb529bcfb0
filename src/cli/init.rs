//! Init command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;

use numlab_prefs::config::Options;

/// Write a default settings file.
pub fn init_command(config_override: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_override.unwrap_or_else(Options::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Settings file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Options::default().save_to_file(&config_path)?;
    info!("Wrote default settings to {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
