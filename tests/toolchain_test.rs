//! Tests for the toolchain path validator against a real filesystem

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use numlab_prefs::dialog::{
    validate_toolchain_path, SystemToolchainProbe, ToolchainPathValidator, ToolchainProbe,
};
use numlab_prefs::SettingsError;

#[cfg(windows)]
const COMPILER: &str = "g++.exe";
#[cfg(not(windows))]
const COMPILER: &str = "g++";

/// Lay out a minimal toolchain tree: <root>/bin/g++
fn fake_toolchain() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let bin = dir.path().join("bin");
    fs::create_dir(&bin).expect("Failed to create bin dir");
    fs::write(bin.join(COMPILER), b"").expect("Failed to create compiler stub");
    dir
}

#[test]
fn empty_path_is_always_valid() {
    assert!(validate_toolchain_path("", &SystemToolchainProbe).is_ok());
}

#[test]
fn toolchain_tree_passes_the_system_probe() {
    let dir = fake_toolchain();
    let path = dir.path().to_string_lossy().to_string();
    assert!(validate_toolchain_path(&path, &SystemToolchainProbe).is_ok());
}

#[test]
fn missing_compiler_produces_a_diagnostic() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("bin")).unwrap();

    let path = dir.path().to_string_lossy().to_string();
    let err = validate_toolchain_path(&path, &SystemToolchainProbe).unwrap_err();
    match err {
        SettingsError::ToolchainPathInvalid(diagnostic) => {
            assert!(!diagnostic.is_empty());
            assert!(diagnostic.contains("g++"), "diagnostic: {diagnostic}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_bin_directory_produces_a_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_string_lossy().to_string();
    let err = validate_toolchain_path(&path, &SystemToolchainProbe).unwrap_err();
    assert!(matches!(err, SettingsError::ToolchainPathInvalid(_)));
}

#[test]
fn nonexistent_path_produces_a_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("does-not-exist")
        .to_string_lossy()
        .to_string();
    let err = validate_toolchain_path(&path, &SystemToolchainProbe).unwrap_err();
    assert!(matches!(err, SettingsError::ToolchainPathInvalid(_)));
}

#[test]
fn successful_validation_is_cached_until_the_path_changes() {
    let dir = fake_toolchain();
    let path = dir.path().to_string_lossy().to_string();

    let mut validator = ToolchainPathValidator::default();
    validator.validate(&path).expect("toolchain tree is valid");
    assert!(validator.is_validated());

    // Rendering the same text back does not invalidate
    validator.path_changed(&path);
    assert!(validator.is_validated());

    // Editing the text does
    validator.path_changed(&format!("{path}-edited"));
    assert!(!validator.is_validated());
}

#[test]
fn custom_probe_is_consulted_for_non_empty_paths() {
    struct RecordingProbe(std::cell::RefCell<Vec<String>>);

    impl ToolchainProbe for RecordingProbe {
        fn probe(&self, path: &Path) -> Option<String> {
            self.0.borrow_mut().push(path.display().to_string());
            None
        }
    }

    let probe = RecordingProbe(std::cell::RefCell::new(Vec::new()));
    validate_toolchain_path("/opt/toolchain", &probe).unwrap();
    validate_toolchain_path("", &probe).unwrap();

    assert_eq!(probe.0.borrow().as_slice(), ["/opt/toolchain"]);
}
