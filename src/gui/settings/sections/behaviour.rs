//! Program behaviour section: the boolean preference flags

use eframe::egui::{self, RichText};

use crate::gui::theme::TEXT_PRIMARY;

use super::super::helpers::{render_checkbox_field, render_section_frame};
use super::super::state::SettingsState;

/// Render the boolean preference flags
pub fn render_section_behaviour(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    ui.label(
        RichText::new(state.lang.get("section.behaviour"))
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    let lang = state.lang;
    let snapshot = &mut *state.snapshot;

    render_section_frame(ui, |ui| {
        let mut flag = |ui: &mut egui::Ui, value: &mut bool, key: &str| {
            render_checkbox_field(
                ui,
                value,
                &lang.get(&format!("flags.{key}")),
                &lang.get(&format!("flags.{key}.desc")),
            );
            ui.add_space(4.0);
        };

        flag(ui, &mut snapshot.compact_tables, "compact_tables");
        flag(ui, &mut snapshot.auto_load_defines, "auto_load_defines");
        flag(ui, &mut snapshot.load_empty_columns, "load_empty_columns");
        flag(ui, &mut snapshot.extended_file_info, "extended_file_info");
        flag(ui, &mut snapshot.show_hints, "show_hints");
        flag(
            ui,
            &mut snapshot.custom_language_files,
            "custom_language_files",
        );
        flag(ui, &mut snapshot.escape_in_scripts, "escape_in_scripts");
        flag(ui, &mut snapshot.use_log_file, "use_log_file");
        flag(ui, &mut snapshot.show_greeting, "show_greeting");
        flag(ui, &mut snapshot.show_toolbar_text, "show_toolbar_text");
        flag(ui, &mut snapshot.print_line_numbers, "print_line_numbers");
    });
    ui.add_space(16.0);
}
