//! Save path: parse drafts, validate, commit, persist
//!
//! Mirrors the dialog's confirmed close: the draft text fields are parsed
//! first (bad input stops everything before any mutation), the snapshot is
//! evaluated against the persisted settings (clamping the spin ranges), and
//! only then is the settings file written.

use super::state::{PanelAction, SettingsState};

/// Attempt a confirmed close. On success, settings are committed and
/// persisted and the panel requests the dialog to close; on failure a status
/// message is shown and nothing is written.
pub fn save_settings(state: &mut SettingsState<'_>) {
    let terminal_history = match state.terminal_history_text.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            *state.status = Some(("Invalid scrollback line count".to_string(), true));
            return;
        }
    };

    let precision = match state.precision_text.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            *state.status = Some(("Invalid numeric precision".to_string(), true));
            return;
        }
    };

    state.snapshot.terminal_history = terminal_history;
    state.snapshot.precision = precision;

    // Validate-then-commit; out-of-range spin values are clamped here
    if let Err(e) = state.snapshot.evaluate(state.options) {
        *state.status = Some((e.to_string(), true));
        return;
    }

    // Reflect clamping back into the draft texts
    *state.terminal_history_text = state.snapshot.terminal_history.to_string();
    *state.precision_text = state.snapshot.precision.to_string();

    if let Err(e) = state.options.save_to_file(state.config_path) {
        *state.status = Some((format!("Failed to write settings: {e:#}"), true));
        return;
    }

    tracing::info!("Settings saved to {}", state.config_path.display());
    *state.status = Some((state.lang.get("dialog.saved"), false));
    *state.action = PanelAction::Saved;
}
