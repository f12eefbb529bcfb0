//! The in-memory record edited during a dialog session

use crate::config::{Options, PRINT_RAW_BLACK_ON_WHITE, PRINT_RAW_COLOR_ON_WHITE};

use super::{PRECISION_RANGE, TERMINAL_HISTORY_RANGE};

/// Colour mode used when printing editor content.
///
/// Persisted settings carry the raw editor-widget constant; the dialog layer
/// only ever sees this enum. The mapping happens at the load/commit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintStyle {
    #[default]
    BlackOnWhite,
    ColorOnWhite,
}

impl PrintStyle {
    /// Derive the style from the raw widget constant. Unknown values fall
    /// back to black on white.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            PRINT_RAW_COLOR_ON_WHITE => PrintStyle::ColorOnWhite,
            _ => PrintStyle::BlackOnWhite,
        }
    }

    /// The raw widget constant for this style.
    pub fn as_raw(self) -> i32 {
        match self {
            PrintStyle::BlackOnWhite => PRINT_RAW_BLACK_ON_WHITE,
            PrintStyle::ColorOnWhite => PRINT_RAW_COLOR_ON_WHITE,
        }
    }
}

/// TeX Gyre font family used for plot labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotFont {
    #[default]
    Pagella,
    Adventor,
    Bonum,
    Chorus,
    Heros,
    HerosCn,
    Schola,
    Termes,
}

impl PlotFont {
    /// All selectable fonts, in combo-box order.
    pub const ALL: [PlotFont; 8] = [
        PlotFont::Pagella,
        PlotFont::Adventor,
        PlotFont::Bonum,
        PlotFont::Chorus,
        PlotFont::Heros,
        PlotFont::HerosCn,
        PlotFont::Schola,
        PlotFont::Termes,
    ];

    /// The persisted font name.
    pub fn as_str(self) -> &'static str {
        match self {
            PlotFont::Pagella => "pagella",
            PlotFont::Adventor => "adventor",
            PlotFont::Bonum => "bonum",
            PlotFont::Chorus => "chorus",
            PlotFont::Heros => "heros",
            PlotFont::HerosCn => "heroscn",
            PlotFont::Schola => "schola",
            PlotFont::Termes => "termes",
        }
    }

    /// Look up a font by its persisted name. Unknown names fall back to
    /// pagella.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .unwrap_or_default()
    }
}

/// Editable copy of the persisted settings, held while the preferences
/// dialog is open.
///
/// Every field here maps to exactly one field of [`Options`]; the mapping is
/// total and fixed. The snapshot is never persisted itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationSnapshot {
    pub compact_tables: bool,
    pub auto_load_defines: bool,
    pub load_empty_columns: bool,
    pub extended_file_info: bool,
    pub show_hints: bool,
    pub custom_language_files: bool,
    pub escape_in_scripts: bool,
    pub use_log_file: bool,
    pub show_greeting: bool,
    pub show_toolbar_text: bool,
    pub print_line_numbers: bool,

    pub load_path: String,
    pub save_path: String,
    pub script_path: String,
    pub process_path: String,
    pub plot_output_path: String,

    pub print_style: PrintStyle,
    pub default_plot_font: PlotFont,

    pub terminal_history: u32,
    pub precision: u32,

    pub toolchain_path: String,
}

impl ConfigurationSnapshot {
    /// Clamp the spin-range fields into their declared bounds, the way the
    /// dialog's spin controls do at the widget boundary.
    pub fn normalize(&mut self) {
        self.terminal_history = self
            .terminal_history
            .clamp(TERMINAL_HISTORY_RANGE.0, TERMINAL_HISTORY_RANGE.1);
        self.precision = self.precision.clamp(PRECISION_RANGE.0, PRECISION_RANGE.1);
    }
}

impl Default for ConfigurationSnapshot {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_style_maps_raw_constants_both_ways() {
        assert_eq!(PrintStyle::from_raw(2), PrintStyle::BlackOnWhite);
        assert_eq!(PrintStyle::from_raw(3), PrintStyle::ColorOnWhite);
        assert_eq!(PrintStyle::BlackOnWhite.as_raw(), 2);
        assert_eq!(PrintStyle::ColorOnWhite.as_raw(), 3);
    }

    #[test]
    fn print_style_unknown_raw_falls_back_to_black_on_white() {
        assert_eq!(PrintStyle::from_raw(0), PrintStyle::BlackOnWhite);
        assert_eq!(PrintStyle::from_raw(-1), PrintStyle::BlackOnWhite);
        assert_eq!(PrintStyle::from_raw(99), PrintStyle::BlackOnWhite);
    }

    #[test]
    fn plot_font_round_trips_every_name() {
        for font in PlotFont::ALL {
            assert_eq!(PlotFont::from_name(font.as_str()), font);
        }
    }

    #[test]
    fn plot_font_unknown_name_falls_back_to_pagella() {
        assert_eq!(PlotFont::from_name("comic-sans"), PlotFont::Pagella);
        assert_eq!(PlotFont::from_name(""), PlotFont::Pagella);
    }

    #[test]
    fn normalize_clamps_spin_ranges() {
        let mut snapshot = ConfigurationSnapshot::default();
        snapshot.terminal_history = 99;
        snapshot.precision = 0;
        snapshot.normalize();
        assert_eq!(snapshot.terminal_history, 100);
        assert_eq!(snapshot.precision, 1);

        snapshot.terminal_history = 301;
        snapshot.precision = 15;
        snapshot.normalize();
        assert_eq!(snapshot.terminal_history, 300);
        assert_eq!(snapshot.precision, 14);
    }

    #[test]
    fn normalize_keeps_boundary_values() {
        let mut snapshot = ConfigurationSnapshot::default();
        for (history, precision) in [(100, 1), (300, 14)] {
            snapshot.terminal_history = history;
            snapshot.precision = precision;
            snapshot.normalize();
            assert_eq!(snapshot.terminal_history, history);
            assert_eq!(snapshot.precision, precision);
        }
    }
}
