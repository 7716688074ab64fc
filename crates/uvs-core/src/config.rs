//! Centralized configuration constants.
//!
//! Values that callers may override at runtime (installation root, pattern,
//! depth) live on [`crate::ScanSettings`]; the constants here are the built-in
//! defaults and the fixed names the engine relies on.

use std::time::Duration;

/// Application-level configuration.
pub struct SelectorConfig;

impl SelectorConfig {
    pub const APP_NAME: &'static str = "unity-version-selector";
    pub const VENDOR_NAME: &'static str = "hasht";
    pub const CONFIG_FILE_NAME: &'static str = "config.toml";
    pub const BACKUP_SUFFIX: &'static str = "bak";
}

/// Editor discovery defaults.
pub struct DiscoveryConfig;

impl DiscoveryConfig {
    pub const DEFAULT_DIR_PATTERN: &'static str = "^Unity(.+)$";
    pub const DEPTH_CUTOFF: usize = 6;
    pub const SCAN_TIMEOUT: Duration = Duration::from_secs(120);

    /// Key prefix that marks calendar-style versions ("2019.4").
    pub const CALENDAR_VERSION_PREFIX: &'static str = "20";
}

/// Project metadata layout.
pub struct ProjectConfig;

impl ProjectConfig {
    pub const SETTINGS_DIR_NAME: &'static str = "ProjectSettings";
    pub const VERSION_FILE_NAME: &'static str = "ProjectVersion.txt";
    pub const EDITOR_VERSION_PATTERN: &'static str = r"(?-u)m_EditorVersion: (.+)";
    pub const PROJECT_PATH_FLAG: &'static str = "-projectPath";
}

/// Location of the editor's own preference store.
pub struct EditorPrefsConfig;

impl EditorPrefsConfig {
    pub const RECENT_PROJECT_PREFIX: &'static str = "RecentlyUsedProjectPaths";
    pub const WINDOWS_REGISTRY_KEY: &'static str = r"Software\Unity Technologies\Unity Editor 5.x";
}
