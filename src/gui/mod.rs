//! GUI for the preferences dialog
//!
//! Hosts the dialog core in an egui window. The window is the dialog: Save
//! confirms (validate, commit, persist) and closes it, Close cancels and
//! discards the snapshot.

pub mod app;
pub mod settings;
pub mod theme;

mod runner;

pub use app::PrefsApp;
pub use runner::run_gui;
