//! Preferences panel
//!
//! Renders the dialog's sections (paths, program behaviour, terminal &
//! output, toolchain) over a [`SettingsState`] of borrowed draft fields,
//! and drives validate+commit+persist from the Save button.

mod helpers;
mod panel;
mod save;
mod sections;
mod state;

pub use panel::render_settings;
pub use save::save_settings;
pub use state::{PanelAction, SettingsState};
