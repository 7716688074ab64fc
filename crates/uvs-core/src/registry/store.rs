//! On-disk storage for the registry document.
//!
//! Writes are atomic:
//! 1. Serialize to a temp file next to the target (PID suffix)
//! 2. Flush and sync so the data reaches disk
//! 3. Copy the previous document to `<name>.bak`
//! 4. Rename the temp file over the target

use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::platform;
use crate::registry::Configuration;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};

/// Handle to the file the registry is persisted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the platform's per-user config location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(platform::config_file_path()?))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the previous document is copied to before an overwrite.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(SelectorConfig::BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Read and parse the stored document.
    ///
    /// Fails with `ConfigMissing` when nothing has been stored yet,
    /// `ConfigRead` when the file cannot be read and `ConfigParse` when the
    /// document is not a valid registry.
    pub fn read(&self) -> Result<Configuration> {
        if !self.path.exists() {
            return Err(SelectorError::ConfigMissing(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| SelectorError::ConfigRead {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| SelectorError::ConfigParse {
            path: self.path.clone(),
            message: e.message().to_string(),
            source: Some(e),
        })
    }

    /// Atomically replace the stored document with `config`.
    pub fn write(&self, config: &Configuration) -> Result<()> {
        let path = &self.path;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SelectorError::Io {
                    message: format!("Failed to create directory {}", parent.display()),
                    path: Some(parent.to_path_buf()),
                    source: Some(e),
                })?;
            }
        }

        let serialized = toml::to_string(config)?;

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(format!(".{}.tmp", process::id()));
        let temp_path = PathBuf::from(temp_name);

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| SelectorError::Io {
                    message: format!("Failed to create temp file {}", temp_path.display()),
                    path: Some(temp_path.clone()),
                    source: Some(e),
                })?;

            if let Err(e) = file
                .write_all(serialized.as_bytes())
                .and_then(|()| file.flush())
                .and_then(|()| file.sync_all())
            {
                drop(file);
                let _ = fs::remove_file(&temp_path);
                return Err(SelectorError::Io {
                    message: format!("Failed to write temp file {}", temp_path.display()),
                    path: Some(temp_path.clone()),
                    source: Some(e),
                });
            }
        }

        if path.exists() {
            let backup_path = self.backup_path();
            if let Err(e) = fs::copy(path, &backup_path) {
                warn!("Failed to create backup {}: {}", backup_path.display(), e);
            } else {
                debug!("Created backup: {}", backup_path.display());
            }
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(SelectorError::Io {
                message: format!(
                    "Failed to rename {} to {}",
                    temp_path.display(),
                    path.display()
                ),
                path: Some(path.clone()),
                source: Some(e),
            });
        }

        debug!("Atomically wrote {}", path.display());
        Ok(())
    }
}
