//! Show command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};

use numlab_prefs::config::Options;

/// Print the effective settings as pretty TOML.
pub fn show_command(config_override: Option<PathBuf>) -> Result<()> {
    let options = match config_override {
        Some(path) => Options::from_file(&path)?,
        None => Options::load()?,
    };

    let content =
        toml::to_string_pretty(&options).with_context(|| "Failed to serialize settings")?;
    print!("{content}");

    Ok(())
}
