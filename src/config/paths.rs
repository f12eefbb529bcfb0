//! Default working-directory settings

use serde::{Deserialize, Serialize};

/// Default directories used by the loaders, the script runner and the plotter.
///
/// Paths are stored as entered by the user (placeholders like `<>` for the
/// NumLab root are resolved elsewhere, at the point of use).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory data files are loaded from
    #[serde(default = "default_load_path")]
    pub load_path: String,

    /// Directory data files are saved to
    #[serde(default = "default_save_path")]
    pub save_path: String,

    /// Directory scripts are looked up in
    #[serde(default = "default_script_path")]
    pub script_path: String,

    /// Directory procedures are looked up in
    #[serde(default = "default_process_path")]
    pub process_path: String,

    /// Directory plot output files are written to
    #[serde(default = "default_plot_output_path")]
    pub plot_output_path: String,
}

fn default_load_path() -> String {
    "<>/data".to_string()
}

fn default_save_path() -> String {
    "<>/save".to_string()
}

fn default_script_path() -> String {
    "<>/scripts".to_string()
}

fn default_process_path() -> String {
    "<>/procedures".to_string()
}

fn default_plot_output_path() -> String {
    "<>/plots".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            load_path: default_load_path(),
            save_path: default_save_path(),
            script_path: default_script_path(),
            process_path: default_process_path(),
            plot_output_path: default_plot_output_path(),
        }
    }
}
