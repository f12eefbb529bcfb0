//! Localized display strings
//!
//! All user-facing text in the preferences dialog is looked up by key, so a
//! translation can be dropped into `~/.numlab/lang.toml` without touching
//! code. The embedded table is English; user entries override it key by key.
//! A missing key renders as the key itself, which is ugly but never fatal.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Options;

/// Embedded English defaults, one `key = value` pair per line.
const DEFAULT_STRINGS: &[(&str, &str)] = &[
    ("dialog.title", "NumLab Preferences"),
    ("dialog.save", "Save"),
    ("dialog.close", "Close"),
    ("dialog.saved", "Settings saved!"),
    ("section.paths", "Default Paths"),
    ("section.behaviour", "Program Behaviour"),
    ("section.terminal", "Terminal & Output"),
    ("section.toolchain", "Compiler Toolchain"),
    ("paths.load", "Load path:"),
    ("paths.save", "Save path:"),
    ("paths.script", "Script path:"),
    ("paths.process", "Procedure path:"),
    ("paths.plot", "Plot output path:"),
    ("flags.compact_tables", "Compact tables"),
    ("flags.compact_tables.desc", "(render tables without padding rows)"),
    ("flags.auto_load_defines", "Auto-load definitions"),
    ("flags.auto_load_defines.desc", "(load defines.ndef on startup)"),
    ("flags.load_empty_columns", "Load empty columns"),
    ("flags.load_empty_columns.desc", "(keep empty columns in data files)"),
    ("flags.extended_file_info", "Extended file info"),
    ("flags.extended_file_info.desc", "(show dimensions and ranges in listings)"),
    ("flags.show_hints", "Show hints"),
    ("flags.show_hints.desc", "(tooltips and editor hints)"),
    ("flags.custom_language_files", "Custom language files"),
    ("flags.custom_language_files.desc", "(load user language files)"),
    ("flags.escape_in_scripts", "Escape sequences in scripts"),
    ("flags.escape_in_scripts.desc", "(keep backslash escapes active)"),
    ("flags.use_log_file", "Use log file"),
    ("flags.use_log_file.desc", "(mirror terminal output to a session log)"),
    ("flags.show_greeting", "Show greeting"),
    ("flags.show_greeting.desc", "(banner on terminal startup)"),
    ("flags.show_toolbar_text", "Toolbar text"),
    ("flags.show_toolbar_text.desc", "(labels next to toolbar icons)"),
    ("flags.print_line_numbers", "Print line numbers"),
    ("flags.print_line_numbers.desc", "(include line numbers when printing)"),
    ("terminal.history", "Scrollback lines:"),
    ("terminal.history.desc", "(100-300)"),
    ("terminal.precision", "Numeric precision:"),
    ("terminal.precision.desc", "(1-14 significant digits)"),
    ("print.style", "Print colour mode:"),
    ("print.black_on_white", "Black on white"),
    ("print.color_on_white", "Colour on white"),
    ("plot.font", "Plot font:"),
    ("toolchain.path", "Toolchain path:"),
    ("toolchain.path.desc", "(optional, leave empty to disable)"),
    ("toolchain.verify", "Verify"),
    ("toolchain.valid", "Toolchain found"),
];

/// Lookup-key indirection for every user-facing string.
#[derive(Debug, Clone, Default)]
pub struct Lang {
    overrides: HashMap<String, String>,
}

impl Lang {
    /// Load the language table, applying user overrides from
    /// `~/.numlab/lang.toml` when present. Any load failure falls back to
    /// the embedded defaults with a warning.
    pub fn load() -> Self {
        let path = Options::global_config_dir().join("lang.toml");
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(lang) => lang,
            Err(e) => {
                tracing::warn!("Failed to load language file: {e:#}");
                Self::default()
            }
        }
    }

    /// Load user overrides from a TOML file of `key = "value"` pairs.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read language file: {}", path.display()))?;

        let overrides: HashMap<String, String> = toml::from_str(&content)
            .with_context(|| format!("Failed to parse language file: {}", path.display()))?;

        Ok(Self { overrides })
    }

    /// Look up a display string by key.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }
        DEFAULT_STRINGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn embedded_defaults_resolve() {
        let lang = Lang::default();
        assert_eq!(lang.get("dialog.title"), "NumLab Preferences");
        assert_eq!(lang.get("toolchain.verify"), "Verify");
    }

    #[test]
    fn missing_key_echoes_the_key() {
        let lang = Lang::default();
        assert_eq!(lang.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lang.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "\"dialog.title\" = \"NumLab Einstellungen\"").unwrap();

        let lang = Lang::from_file(&path).unwrap();
        assert_eq!(lang.get("dialog.title"), "NumLab Einstellungen");
        // Untouched keys still come from the embedded table
        assert_eq!(lang.get("dialog.save"), "Save");
    }
}
