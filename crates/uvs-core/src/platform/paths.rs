//! Platform-specific path utilities.
//!
//! This module provides:
//! - The location of the persisted registry file
//! - The default editor installation root
//! - The editor executable's file name
//! - Separator counting used by the absolute depth cutoff

use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use std::path::{Path, PathBuf};

/// Get the path of the persisted registry file.
///
/// # Platform Behavior
/// Uses the `dirs` crate's per-user config directory:
/// - **Linux**: `~/.config/hasht/unity-version-selector/config.toml`
/// - **Windows**: `%APPDATA%\hasht\unity-version-selector\config.toml`
/// - **macOS**: `~/Library/Application Support/hasht/unity-version-selector/config.toml`
pub fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| SelectorError::Config {
        message: "Could not determine config directory".to_string(),
    })?;
    Ok(config_dir
        .join(SelectorConfig::VENDOR_NAME)
        .join(SelectorConfig::APP_NAME)
        .join(SelectorConfig::CONFIG_FILE_NAME))
}

/// Get the directory editor versions are installed under by default.
///
/// # Platform Behavior
/// - **Windows**: `C:/Program Files`
/// - **macOS**: `/Applications`
/// - **Linux/other**: `/opt`
pub fn default_program_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        PathBuf::from("C:/Program Files")
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Applications")
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        PathBuf::from("/opt")
    }
}

/// Get the file name of the editor executable inside a version directory.
///
/// # Platform Behavior
/// - **Windows**: `Unity.exe`
/// - **Linux/macOS**: `Unity` (on macOS this sits in `Unity.app/Contents/MacOS`)
pub fn editor_executable_name() -> &'static str {
    #[cfg(windows)]
    {
        "Unity.exe"
    }
    #[cfg(not(windows))]
    {
        "Unity"
    }
}

/// Count the path separator characters in `path`'s string form.
///
/// Both `/` and `\` count on Windows, so mixed-separator paths such as
/// `C:/Program Files\Unity` are measured consistently.
pub fn separator_count(path: &Path) -> usize {
    path.to_string_lossy()
        .chars()
        .filter(|c| std::path::is_separator(*c))
        .count()
}
