//! Check-toolchain command implementation

use anyhow::Result;

use numlab_prefs::dialog::{validate_toolchain_path, SystemToolchainProbe};

/// Run the toolchain path validator against `path` and report the outcome.
///
/// Exits nonzero when the path does not hold a usable toolchain, so scripts
/// can use this as a check.
pub fn check_toolchain_command(path: &str) -> Result<()> {
    match validate_toolchain_path(path, &SystemToolchainProbe) {
        Ok(()) => {
            if path.trim().is_empty() {
                println!("No toolchain path configured (that is allowed)");
            } else {
                println!("Toolchain found at {}", path.trim());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
