//! The persisted registry document.

use crate::config::DiscoveryConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Registry state: where editors were searched for, how version directories
/// are recognised, and what was found.
///
/// Field names follow the on-disk TOML document:
///
/// ```toml
/// ProgramDir = "C:/Program Files"
/// DirPattern = "^Unity(.+)$"
///
/// [Versions]
/// "2019.4.1f1" = "C:/Program Files/Unity2019.4.1f1/Editor/Unity.exe"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "ProgramDir")]
    pub program_dir: PathBuf,
    #[serde(rename = "DirPattern")]
    pub dir_pattern: String,
    #[serde(rename = "Versions", default)]
    pub versions: BTreeMap<String, PathBuf>,
}

impl Configuration {
    /// Executable registered for `version`, if any.
    pub fn lookup(&self, version: &str) -> Option<&Path> {
        self.versions.get(version).map(PathBuf::as_path)
    }

    /// All version keys in listing order.
    ///
    /// Legacy identifiers ("4.7", "5.6") come first, then calendar-style ones
    /// ("2019.4", "2021.1"). Each group is in ascending byte-wise order.
    pub fn ordered_version_keys(&self) -> Vec<&str> {
        // BTreeMap keys already iterate in ascending order; partition keeps it.
        let (calendar, mut legacy): (Vec<&str>, Vec<&str>) = self
            .versions
            .keys()
            .map(String::as_str)
            .partition(|key| key.starts_with(DiscoveryConfig::CALENDAR_VERSION_PREFIX));

        legacy.extend(calendar);
        legacy
    }

    /// `(version, executable)` pairs in listing order.
    pub fn listing(&self) -> Vec<(&str, &Path)> {
        self.ordered_version_keys()
            .into_iter()
            .filter_map(|key| self.lookup(key).map(|path| (key, path)))
            .collect()
    }
}
