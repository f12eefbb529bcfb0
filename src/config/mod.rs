//! Persisted application settings

mod io;
mod paths;

pub use paths::PathSettings;

use serde::{Deserialize, Serialize};

/// Raw print-colour constant fed to the editor widget: black on white.
pub const PRINT_RAW_BLACK_ON_WHITE: i32 = 2;
/// Raw print-colour constant fed to the editor widget: colour on white.
pub const PRINT_RAW_COLOR_ON_WHITE: i32 = 3;

/// The persisted NumLab settings object.
///
/// Owned by the hosting application; the preferences dialog reads it once when
/// opening (snapshot) and writes it back once on a confirmed close (commit).
/// There is exactly one writer at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Render tables in the terminal without padding rows
    #[serde(default)]
    pub compact_tables: bool,

    /// Load the `defines.ndef` definitions on startup
    #[serde(default)]
    pub auto_load_defines: bool,

    /// Keep empty columns when loading data files
    #[serde(default)]
    pub load_empty_columns: bool,

    /// Show extended metadata (dimensions, ranges) in file listings
    #[serde(default = "default_true")]
    pub extended_file_info: bool,

    /// Show tooltips and hints in the editor
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Load user language files from the config directory
    #[serde(default)]
    pub custom_language_files: bool,

    /// Keep backslash escape sequences active inside scripts
    #[serde(default)]
    pub escape_in_scripts: bool,

    /// Mirror terminal output into a session log file
    #[serde(default)]
    pub use_log_file: bool,

    /// Print the greeting banner on terminal startup
    #[serde(default = "default_true")]
    pub show_greeting: bool,

    /// Show text labels next to toolbar icons
    #[serde(default = "default_true")]
    pub show_toolbar_text: bool,

    /// Include line numbers when printing editor content
    #[serde(default)]
    pub print_line_numbers: bool,

    /// Default working directories
    #[serde(default)]
    pub paths: PathSettings,

    /// Raw editor-widget print-colour constant (2 = black on white,
    /// 3 = colour on white). The dialog layer maps this to an enum.
    #[serde(default = "default_print_style_raw")]
    pub print_style_raw: i32,

    /// TeX Gyre font family used for plot labels
    #[serde(default = "default_plot_font")]
    pub default_plot_font: String,

    /// Number of terminal lines kept in the scrollback buffer (100..=300)
    #[serde(default = "default_terminal_history")]
    pub terminal_history: u32,

    /// Significant digits used for numeric output (1..=14)
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Optional MinGW-style toolchain location; empty means "not configured"
    #[serde(default)]
    pub toolchain_path: String,
}

fn default_true() -> bool {
    true
}

fn default_print_style_raw() -> i32 {
    PRINT_RAW_BLACK_ON_WHITE
}

fn default_plot_font() -> String {
    "pagella".to_string()
}

fn default_terminal_history() -> u32 {
    100
}

fn default_precision() -> u32 {
    7
}

impl Default for Options {
    fn default() -> Self {
        Self {
            compact_tables: false,
            auto_load_defines: false,
            load_empty_columns: false,
            extended_file_info: default_true(),
            show_hints: default_true(),
            custom_language_files: false,
            escape_in_scripts: false,
            use_log_file: false,
            show_greeting: default_true(),
            show_toolbar_text: default_true(),
            print_line_numbers: false,
            paths: PathSettings::default(),
            print_style_raw: default_print_style_raw(),
            default_plot_font: default_plot_font(),
            terminal_history: default_terminal_history(),
            precision: default_precision(),
            toolchain_path: String::new(),
        }
    }
}
