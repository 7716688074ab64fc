//! Reading the editor version a project was last saved with.

use crate::config::ProjectConfig;
use crate::error::{Result, SelectorError};
use regex::bytes::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static EDITOR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ProjectConfig::EDITOR_VERSION_PATTERN).unwrap());

/// Path of the version metadata file inside `project`.
pub fn version_file_path(project: &Path) -> PathBuf {
    project
        .join(ProjectConfig::SETTINGS_DIR_NAME)
        .join(ProjectConfig::VERSION_FILE_NAME)
}

/// Extract the `m_EditorVersion` value from metadata file contents.
///
/// The value runs to the end of its line and is returned as written. The
/// contents need not be UTF-8; invalid bytes in the value become U+FFFD.
pub fn parse_editor_version(contents: &[u8]) -> Option<String> {
    EDITOR_VERSION
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Read the editor version `project` requires.
pub fn read_editor_version(project: &Path) -> Result<String> {
    let path = version_file_path(project);
    if !path.is_file() {
        return Err(SelectorError::ProjectVersionMissing(path));
    }

    let contents = fs::read(&path).map_err(|e| SelectorError::io_with_path(e, &path))?;
    parse_editor_version(&contents).ok_or(SelectorError::EditorVersionMissing(path))
}
