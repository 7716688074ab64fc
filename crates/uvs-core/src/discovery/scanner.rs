//! Version directory scanning.
//!
//! Matches the installation root's immediate subdirectories against the
//! version pattern and locates the editor executable inside each match.

use crate::cancel::CancellationToken;
use crate::config::DiscoveryConfig;
use crate::discovery::tree_search::{self, DepthLimit};
use crate::error::{Result, SelectorError};
use crate::platform;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parameters for a discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Directory whose children are candidate version directories.
    pub program_dir: PathBuf,
    /// Pattern a child's name must match; capture group 1 is the version.
    pub dir_pattern: String,
    /// File name of the editor executable.
    pub executable_name: String,
    /// Depth bound for the executable search.
    pub depth: DepthLimit,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            program_dir: platform::default_program_dir(),
            dir_pattern: DiscoveryConfig::DEFAULT_DIR_PATTERN.to_string(),
            executable_name: platform::editor_executable_name().to_string(),
            depth: DepthLimit::absolute(DiscoveryConfig::DEPTH_CUTOFF),
        }
    }
}

impl ScanSettings {
    /// Set the installation root.
    pub fn with_program_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.program_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the directory name pattern.
    pub fn with_dir_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.dir_pattern = pattern.into();
        self
    }

    /// Set the executable file name.
    pub fn with_executable_name(mut self, name: impl Into<String>) -> Self {
        self.executable_name = name.into();
        self
    }

    /// Set the depth bound.
    pub fn with_depth(mut self, depth: DepthLimit) -> Self {
        self.depth = depth;
        self
    }
}

/// Compile a directory pattern, requiring at least one capture group.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| SelectorError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group.
    if regex.captures_len() < 2 {
        return Err(SelectorError::InvalidPattern {
            pattern: pattern.to_string(),
            message: "pattern has no capture group for the version".to_string(),
        });
    }

    Ok(regex)
}

/// Extract the version from a directory name, if the name matches.
pub fn version_from_dir_name(pattern: &Regex, name: &str) -> Option<String> {
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Scan `settings.program_dir` and map each discovered version to its
/// executable.
///
/// Matching directories without an executable inside the depth bound are
/// skipped with a warning. When two directories yield the same version the
/// later one (in name order) wins.
pub fn scan(settings: &ScanSettings, token: &CancellationToken) -> Result<BTreeMap<String, PathBuf>> {
    let pattern = compile_pattern(&settings.dir_pattern)?;
    let root = &settings.program_dir;

    let read_dir = fs::read_dir(root).map_err(|e| SelectorError::io_with_path(e, root))?;
    let mut entries = read_dir
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| SelectorError::io_with_path(e, root))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut versions = BTreeMap::new();

    for entry in entries {
        let file_type = entry
            .file_type()
            .map_err(|e| SelectorError::io_with_path(e, entry.path()))?;
        if !file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 directory name {:?}", file_name);
            continue;
        };
        let Some(version) = version_from_dir_name(&pattern, name) else {
            continue;
        };

        let version_dir = entry.path();
        let found = tree_search::find(
            &version_dir,
            &settings.executable_name,
            settings.depth,
            token,
        )?;

        match found {
            Some(exe) => {
                debug!("Found {} {} at {}", settings.executable_name, version, exe.display());
                if let Some(previous) = versions.insert(version.clone(), exe) {
                    debug!(
                        "Version {} from {} replaces {}",
                        version,
                        name,
                        previous.display()
                    );
                }
            }
            None => {
                warn!("{} has no {}!", name, settings.executable_name);
            }
        }
    }

    info!(
        "Discovered {} editor version(s) under {}",
        versions.len(),
        root.display()
    );
    Ok(versions)
}
