//! Default paths section

use eframe::egui::{self, RichText};

use crate::gui::theme::TEXT_PRIMARY;

use super::super::helpers::{render_section_frame, render_text_field};
use super::super::state::SettingsState;

/// Render the default working-directory fields
pub fn render_section_paths(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    ui.label(
        RichText::new(state.lang.get("section.paths"))
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        render_text_field(
            ui,
            &state.lang.get("paths.load"),
            &mut state.snapshot.load_path,
            320.0,
        );
        render_text_field(
            ui,
            &state.lang.get("paths.save"),
            &mut state.snapshot.save_path,
            320.0,
        );
        render_text_field(
            ui,
            &state.lang.get("paths.script"),
            &mut state.snapshot.script_path,
            320.0,
        );
        render_text_field(
            ui,
            &state.lang.get("paths.process"),
            &mut state.snapshot.process_path,
            320.0,
        );
        render_text_field(
            ui,
            &state.lang.get("paths.plot"),
            &mut state.snapshot.plot_output_path,
            320.0,
        );
    });
    ui.add_space(16.0);
}
