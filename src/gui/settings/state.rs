//! Mutable state borrowed by the settings panel for one frame

use std::path::Path;

use crate::config::Options;
use crate::dialog::{ConfigurationSnapshot, ToolchainPathValidator};
use crate::lang::Lang;

/// What the panel asked the host window to do after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelAction {
    #[default]
    None,
    /// Settings were committed and persisted; close the dialog.
    Saved,
    /// The user cancelled; discard the snapshot and close the dialog.
    Cancelled,
}

/// Borrowed view of the app state used while rendering the panel.
pub struct SettingsState<'a> {
    /// The snapshot under edit; checkboxes, path fields and combos bind
    /// straight into it.
    pub snapshot: &'a mut ConfigurationSnapshot,

    /// Draft text for the spin-range fields (parsed and clamped on save)
    pub terminal_history_text: &'a mut String,
    pub precision_text: &'a mut String,

    /// Status line below the sections: message + is-error
    pub status: &'a mut Option<(String, bool)>,

    /// Toolchain path validation state for this session
    pub toolchain_validator: &'a mut ToolchainPathValidator,

    /// The persisted settings, written only by a successful save
    pub options: &'a mut Options,

    /// Where the settings file lives
    pub config_path: &'a Path,

    /// Display strings
    pub lang: &'a Lang,

    /// Set by the panel when the dialog should close
    pub action: &'a mut PanelAction,
}
