//! Modal dialog session lifecycle

use crate::config::Options;
use crate::error::SettingsError;

use super::snapshot::ConfigurationSnapshot;

/// One open-to-close run of the preferences dialog.
///
/// `open` takes the snapshot (initialize), edits go through `snapshot_mut`,
/// and the session ends in exactly one of `confirm` (validate, then commit
/// back into the caller's settings) or `cancel` (discard). Both consume the
/// session; a snapshot never outlives its dialog.
#[derive(Debug)]
pub struct DialogSession {
    snapshot: ConfigurationSnapshot,
}

impl DialogSession {
    /// Open a session over the persisted settings (dialog initialize).
    pub fn open(options: &Options) -> Self {
        Self {
            snapshot: ConfigurationSnapshot::from_options(options),
        }
    }

    pub fn snapshot(&self) -> &ConfigurationSnapshot {
        &self.snapshot
    }

    pub fn snapshot_mut(&mut self) -> &mut ConfigurationSnapshot {
        &mut self.snapshot
    }

    /// Confirmed close: validate the snapshot and commit it. On failure the
    /// session is handed back unchanged so the user can correct the input.
    pub fn confirm(mut self, options: &mut Options) -> Result<(), (Self, SettingsError)> {
        match self.snapshot.evaluate(options) {
            Ok(()) => Ok(()),
            Err(e) => Err((self, e)),
        }
    }

    /// Cancelled close: drop the snapshot, persisted settings untouched.
    pub fn cancel(self) {}
}
