//! Top-level rendering of the preferences panel

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::theme::{ACCENT_GREEN, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};

use super::sections::{
    render_section_behaviour, render_section_paths, render_section_terminal,
    render_section_toolchain,
};
use super::save::save_settings;
use super::state::{PanelAction, SettingsState};

/// Render the preferences panel for one frame
pub fn render_settings(ctx: &egui::Context, state: &mut SettingsState<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(state.lang.get("dialog.title"))
                            .monospace()
                            .size(18.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new(state.lang.get("dialog.close")).color(TEXT_DIM))
                            .clicked()
                        {
                            *state.action = PanelAction::Cancelled;
                        }
                    });
                });
                ui.add_space(16.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_section_paths(ui, state);
                        render_section_behaviour(ui, state);
                        render_section_terminal(ui, state);
                        render_section_toolchain(ui, state);

                        ui.horizontal(|ui| {
                            if ui
                                .button(
                                    RichText::new(state.lang.get("dialog.save"))
                                        .color(ACCENT_GREEN),
                                )
                                .clicked()
                            {
                                save_settings(state);
                            }
                            ui.add_space(8.0);
                            super::helpers::render_status_message(ui, state.status);
                        });
                    });
            });
        });
}
