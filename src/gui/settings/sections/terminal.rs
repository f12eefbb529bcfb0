//! Terminal & output section: spin ranges, print style, plot font

use eframe::egui::{self, RichText};

use crate::dialog::{PlotFont, PrintStyle};
use crate::gui::theme::TEXT_PRIMARY;

use super::super::helpers::{render_section_frame, render_text_field_with_desc};
use super::super::state::SettingsState;

fn print_style_label(lang: &crate::lang::Lang, style: PrintStyle) -> String {
    match style {
        PrintStyle::BlackOnWhite => lang.get("print.black_on_white"),
        PrintStyle::ColorOnWhite => lang.get("print.color_on_white"),
    }
}

/// Render terminal history, precision, print style and plot font
pub fn render_section_terminal(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    ui.label(
        RichText::new(state.lang.get("section.terminal"))
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        render_text_field_with_desc(
            ui,
            &state.lang.get("terminal.history"),
            state.terminal_history_text,
            60.0,
            &state.lang.get("terminal.history.desc"),
        );
        ui.add_space(4.0);

        render_text_field_with_desc(
            ui,
            &state.lang.get("terminal.precision"),
            state.precision_text,
            60.0,
            &state.lang.get("terminal.precision.desc"),
        );
        ui.add_space(8.0);

        egui::ComboBox::from_label(state.lang.get("print.style"))
            .selected_text(print_style_label(state.lang, state.snapshot.print_style))
            .show_ui(ui, |ui| {
                for style in [PrintStyle::BlackOnWhite, PrintStyle::ColorOnWhite] {
                    ui.selectable_value(
                        &mut state.snapshot.print_style,
                        style,
                        print_style_label(state.lang, style),
                    );
                }
            });
        ui.add_space(4.0);

        egui::ComboBox::from_label(state.lang.get("plot.font"))
            .selected_text(state.snapshot.default_plot_font.as_str())
            .show_ui(ui, |ui| {
                for font in PlotFont::ALL {
                    ui.selectable_value(&mut state.snapshot.default_plot_font, font, font.as_str());
                }
            });
    });
    ui.add_space(16.0);
}
