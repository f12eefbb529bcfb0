//! The eframe application wrapping one dialog session

use std::path::PathBuf;

use eframe::egui;

use crate::config::Options;
use crate::dialog::{DialogSession, ToolchainPathValidator};
use crate::lang::Lang;

use super::settings::{render_settings, PanelAction, SettingsState};

/// Preferences window state.
///
/// Owns the persisted settings and one [`DialogSession`] over them. The
/// session's snapshot is the only thing the panel mutates; `Options` is
/// written exactly once, by a successful save.
pub struct PrefsApp {
    options: Options,
    config_path: PathBuf,
    lang: Lang,

    session: DialogSession,
    terminal_history_text: String,
    precision_text: String,
    status: Option<(String, bool)>,
    toolchain_validator: ToolchainPathValidator,
}

impl PrefsApp {
    pub fn new(options: Options, config_path: PathBuf, lang: Lang) -> Self {
        let session = DialogSession::open(&options);
        let terminal_history_text = session.snapshot().terminal_history.to_string();
        let precision_text = session.snapshot().precision.to_string();

        Self {
            options,
            config_path,
            lang,
            session,
            terminal_history_text,
            precision_text,
            status: None,
            toolchain_validator: ToolchainPathValidator::default(),
        }
    }
}

impl eframe::App for PrefsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = PanelAction::None;

        let mut state = SettingsState {
            snapshot: self.session.snapshot_mut(),
            terminal_history_text: &mut self.terminal_history_text,
            precision_text: &mut self.precision_text,
            status: &mut self.status,
            toolchain_validator: &mut self.toolchain_validator,
            options: &mut self.options,
            config_path: &self.config_path,
            lang: &self.lang,
            action: &mut action,
        };

        render_settings(ctx, &mut state);

        match action {
            PanelAction::None => {}
            PanelAction::Saved | PanelAction::Cancelled => {
                // Either way the session is over; a fresh snapshot backs any
                // further edits until the window actually closes.
                self.session = DialogSession::open(&self.options);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
