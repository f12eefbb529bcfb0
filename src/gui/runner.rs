//! GUI runner - launches the preferences window

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::warn;

use crate::config::Options;
use crate::lang::Lang;

use super::app::PrefsApp;

/// Run the preferences window over the global settings file.
///
/// `config_override` points at an alternative settings file (useful for
/// testing a profile without touching `~/.numlab/`).
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config_path = config_override.unwrap_or_else(Options::global_config_path);

    let options = if config_path.exists() {
        match Options::from_file(&config_path) {
            Ok(options) => options,
            Err(e) => {
                warn!(
                    "Failed to parse settings ({}): {e:#}. Falling back to defaults.",
                    config_path.display()
                );
                Options::default()
            }
        }
    } else {
        Options::default()
    };

    let lang = Lang::load();
    let app = PrefsApp::new(options, config_path, lang);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0])
            .with_min_inner_size([480.0, 520.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "numlab-prefs",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
