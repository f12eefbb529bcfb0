//! Toolkit-independent core of the preferences dialog
//!
//! The dialog follows a fixed four-phase lifecycle: construct, initialize
//! (snapshot the persisted settings), confirm (validate, then commit the
//! snapshot) or cancel (discard), destroy. [`DialogSession`] makes those
//! phases explicit calls; [`ConfigurationSnapshot`] is the record being
//! edited in between.

mod session;
mod snapshot;
mod toolchain;
mod transfer;

pub use session::DialogSession;
pub use snapshot::{ConfigurationSnapshot, PlotFont, PrintStyle};
pub use toolchain::{
    validate_toolchain_path, SystemToolchainProbe, ToolchainPathValidator, ToolchainProbe,
};

/// Inclusive range of the terminal scrollback buffer spin control.
pub const TERMINAL_HISTORY_RANGE: (u32, u32) = (100, 300);
/// Inclusive range of the numeric precision spin control.
pub const PRECISION_RANGE: (u32, u32) = (1, 14);
