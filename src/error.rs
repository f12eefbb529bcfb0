//! Error types for the preferences dialog core

/// Recoverable errors raised while confirming the preferences dialog.
///
/// Neither variant is fatal to the hosting application: the dialog stays
/// open, the user corrects the input and retries.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The pre-commit validity check failed; nothing was written.
    #[error("Invalid settings: {0}")]
    ValidationFailure(String),

    /// A non-empty toolchain path does not resolve to a usable toolchain.
    #[error("Toolchain path is not usable: {0}")]
    ToolchainPathInvalid(String),
}
