//! NumLab preferences subsystem
//!
//! NumLab keeps its application settings in a single [`config::Options`] object,
//! persisted as TOML under `~/.numlab/`. The preferences dialog never edits that
//! object directly: opening the dialog takes a [`dialog::ConfigurationSnapshot`]
//! of the current values, all edits happen on the snapshot, and only a confirmed
//! close writes the snapshot back in one commit. Cancelling discards the snapshot
//! and leaves the persisted settings untouched.
//!
//! The [`gui`] module hosts the dialog in an egui window; [`dialog`] carries the
//! toolkit-independent core (snapshot, transfer, toolchain path validation).

pub mod config;
pub mod dialog;
pub mod error;
pub mod gui;
pub mod lang;

pub use error::SettingsError;
