//! Snapshot load and commit against the persisted settings
//!
//! Load reads every persisted field once; commit writes every snapshot field
//! back. Fields are independent, so commit has no ordering requirements and
//! never performs a partial write: validation runs as a pure pre-check before
//! the first mutation.

use crate::config::Options;
use crate::error::SettingsError;

use super::snapshot::{ConfigurationSnapshot, PlotFont, PrintStyle};

impl ConfigurationSnapshot {
    /// Populate a snapshot from the persisted settings (dialog initialize).
    pub fn from_options(options: &Options) -> Self {
        Self {
            compact_tables: options.compact_tables,
            auto_load_defines: options.auto_load_defines,
            load_empty_columns: options.load_empty_columns,
            extended_file_info: options.extended_file_info,
            show_hints: options.show_hints,
            custom_language_files: options.custom_language_files,
            escape_in_scripts: options.escape_in_scripts,
            use_log_file: options.use_log_file,
            show_greeting: options.show_greeting,
            show_toolbar_text: options.show_toolbar_text,
            print_line_numbers: options.print_line_numbers,

            load_path: options.paths.load_path.clone(),
            save_path: options.paths.save_path.clone(),
            script_path: options.paths.script_path.clone(),
            process_path: options.paths.process_path.clone(),
            plot_output_path: options.paths.plot_output_path.clone(),

            print_style: PrintStyle::from_raw(options.print_style_raw),
            default_plot_font: PlotFont::from_name(&options.default_plot_font),

            terminal_history: options.terminal_history,
            precision: options.precision,

            toolchain_path: options.toolchain_path.clone(),
        }
    }

    /// Write every snapshot field back into the persisted settings.
    pub fn commit(&self, options: &mut Options) {
        options.compact_tables = self.compact_tables;
        options.auto_load_defines = self.auto_load_defines;
        options.load_empty_columns = self.load_empty_columns;
        options.extended_file_info = self.extended_file_info;
        options.show_hints = self.show_hints;
        options.custom_language_files = self.custom_language_files;
        options.escape_in_scripts = self.escape_in_scripts;
        options.use_log_file = self.use_log_file;
        options.show_greeting = self.show_greeting;
        options.show_toolbar_text = self.show_toolbar_text;
        options.print_line_numbers = self.print_line_numbers;

        options.paths.load_path = self.load_path.clone();
        options.paths.save_path = self.save_path.clone();
        options.paths.script_path = self.script_path.clone();
        options.paths.process_path = self.process_path.clone();
        options.paths.plot_output_path = self.plot_output_path.clone();

        options.print_style_raw = self.print_style.as_raw();
        options.default_plot_font = self.default_plot_font.as_str().to_string();

        options.terminal_history = self.terminal_history;
        options.precision = self.precision;

        options.toolchain_path = self.toolchain_path.clone();
    }

    /// Validate, then commit (dialog confirm).
    ///
    /// The spin-range fields are clamped first; the remaining validity gate
    /// currently accepts everything and exists as the extension point for
    /// per-field rules. On failure nothing is written.
    pub fn evaluate(&mut self, options: &mut Options) -> Result<(), SettingsError> {
        self.normalize();
        self.check_validity()?;
        self.commit(options);
        Ok(())
    }

    fn check_validity(&self) -> Result<(), SettingsError> {
        Ok(())
    }
}
