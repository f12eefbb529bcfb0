//! Settings file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Options;

impl Options {
    /// Get the global config directory path (~/.numlab/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".numlab")
    }

    /// Get the global settings file path (~/.numlab/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load settings from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let options: Options = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(options)
    }

    /// Load settings from a directory containing a `config.toml`.
    /// Falls back to defaults when the file does not exist.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("config.toml");
        if path.exists() {
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    /// Save settings to a file with atomic write and file locking.
    ///
    /// This ensures:
    /// 1. Exclusive lock prevents concurrent writes from CLI and GUI
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize settings")?;

        // Separate lock file, so the rename below never touches the lock
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire settings lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write settings content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync settings file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename settings file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Load global settings from ~/.numlab/config.toml.
    /// If no settings file exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();

        if !global_path.exists() {
            Self::auto_init()?;
        }

        Self::from_file(&global_path)
    }

    /// Auto-initialize the global settings file when none exists.
    ///
    /// Uses file locking to prevent race conditions when multiple processes
    /// try to auto-init simultaneously.
    fn auto_init() -> Result<()> {
        let config_dir = Self::global_config_dir();
        let config_path = Self::global_config_path();

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).with_context(|| {
                format!(
                    "Failed to create config directory: {}",
                    config_dir.display()
                )
            })?;
        }

        let lock_path = config_path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire settings lock for auto-init")?;

        // Re-check after acquiring the lock; another process may have won
        if config_path.exists() {
            return Ok(());
        }

        let content = toml::to_string_pretty(&Options::default())
            .with_context(|| "Failed to serialize default settings")?;

        let temp_path = config_path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write settings content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync settings file")?;

        std::fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to rename settings file: {}", config_path.display()))?;

        tracing::info!("Created {}", config_path.display());
        Ok(())
    }
}
