//! Compiler toolchain section

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_GREEN, TEXT_MUTED, TEXT_PRIMARY};

use super::super::helpers::{render_section_frame, render_text_field_with_desc};
use super::super::state::SettingsState;

/// Render the toolchain path field with its advisory Verify button
pub fn render_section_toolchain(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    ui.label(
        RichText::new(state.lang.get("section.toolchain"))
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        render_text_field_with_desc(
            ui,
            &state.lang.get("toolchain.path"),
            &mut state.snapshot.toolchain_path,
            320.0,
            &state.lang.get("toolchain.path.desc"),
        );
        // Any edit after a successful verification forces re-verification
        state
            .toolchain_validator
            .path_changed(&state.snapshot.toolchain_path);

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new(state.lang.get("toolchain.verify")).color(TEXT_MUTED))
                .clicked()
            {
                match state.toolchain_validator.validate(&state.snapshot.toolchain_path) {
                    Ok(()) => {
                        *state.status = Some((state.lang.get("toolchain.valid"), false));
                    }
                    Err(e) => {
                        // Advisory: shown, but does not block saving
                        *state.status = Some((e.to_string(), true));
                    }
                }
            }
            if state.toolchain_validator.is_validated() {
                ui.label(RichText::new("✔").color(ACCENT_GREEN));
            }
        });
    });
    ui.add_space(16.0);
}
