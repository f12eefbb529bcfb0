//! Auxiliary toolchain path validation
//!
//! The toolchain location is optional; an empty path is always accepted. A
//! non-empty path is handed to a [`ToolchainProbe`], the host-supplied
//! collaborator that inspects the filesystem. The result is advisory in the
//! current build: a failed probe reports a diagnostic but does not block
//! confirming the dialog.

use std::fmt;
use std::path::Path;

use crate::error::SettingsError;

/// Host collaborator that inspects a candidate toolchain location.
pub trait ToolchainProbe {
    /// Returns `None` when a usable toolchain lives at `path`, otherwise a
    /// human-readable diagnostic.
    fn probe(&self, path: &Path) -> Option<String>;
}

/// Validate a user-entered toolchain path.
///
/// Empty paths are valid (the toolchain is optional). Non-empty paths are
/// delegated to the probe; its diagnostic becomes the error message.
pub fn validate_toolchain_path(
    path: &str,
    probe: &dyn ToolchainProbe,
) -> Result<(), SettingsError> {
    if path.trim().is_empty() {
        return Ok(());
    }

    match probe.probe(Path::new(path.trim())) {
        None => Ok(()),
        Some(diagnostic) => Err(SettingsError::ToolchainPathInvalid(diagnostic)),
    }
}

/// Filesystem probe used when the host does not supply its own.
///
/// A usable toolchain is a directory containing a `bin` directory with a
/// `g++` or `gcc` executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolchainProbe;

impl ToolchainProbe for SystemToolchainProbe {
    fn probe(&self, path: &Path) -> Option<String> {
        if !path.exists() {
            return Some(format!("{} does not exist", path.display()));
        }
        if !path.is_dir() {
            return Some(format!("{} is not a directory", path.display()));
        }

        let bin_dir = path.join("bin");
        if !bin_dir.is_dir() {
            return Some(format!("{} has no bin directory", path.display()));
        }

        #[cfg(windows)]
        let compilers: [&str; 2] = ["g++.exe", "gcc.exe"];
        #[cfg(not(windows))]
        let compilers: [&str; 2] = ["g++", "gcc"];

        if compilers.iter().any(|c| bin_dir.join(c).is_file()) {
            None
        } else {
            Some(format!(
                "no g++ or gcc compiler found in {}",
                bin_dir.display()
            ))
        }
    }
}

/// Per-session validation state for the toolchain path field.
///
/// Caches whether the current path text has been validated successfully.
/// Any edit to the path after a successful validation clears the flag, so
/// the value cannot be trusted until it is re-validated.
pub struct ToolchainPathValidator {
    probe: Box<dyn ToolchainProbe>,
    validated_path: Option<String>,
}

impl fmt::Debug for ToolchainPathValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolchainPathValidator")
            .field("validated_path", &self.validated_path)
            .finish_non_exhaustive()
    }
}

impl Default for ToolchainPathValidator {
    fn default() -> Self {
        Self::new(Box::new(SystemToolchainProbe))
    }
}

impl ToolchainPathValidator {
    pub fn new(probe: Box<dyn ToolchainProbe>) -> Self {
        Self {
            probe,
            validated_path: None,
        }
    }

    /// Whether the current path text has a successful validation on record.
    pub fn is_validated(&self) -> bool {
        self.validated_path.is_some()
    }

    /// Validate `path` and record the outcome.
    pub fn validate(&mut self, path: &str) -> Result<(), SettingsError> {
        match validate_toolchain_path(path, self.probe.as_ref()) {
            Ok(()) => {
                self.validated_path = Some(path.to_string());
                Ok(())
            }
            Err(e) => {
                self.validated_path = None;
                Err(e)
            }
        }
    }

    /// Notify the validator that the path text changed. A change away from
    /// the validated text invalidates the cached outcome.
    pub fn path_changed(&mut self, new_path: &str) {
        if self
            .validated_path
            .as_deref()
            .is_some_and(|validated| validated != new_path)
        {
            self.validated_path = None;
        }
    }
}
