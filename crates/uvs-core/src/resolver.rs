//! Mapping a project to the editor executable that should open it.

use crate::error::{Result, SelectorError};
use crate::project;
use crate::registry::Configuration;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the executable for `project` against `config`.
///
/// A version missing from the registry is an error. There is no fallback
/// to a nearby version and no implicit rescan.
pub fn resolve(config: &Configuration, project: &Path) -> Result<PathBuf> {
    let version = project::read_editor_version(project)?;
    debug!("{} requires editor {}", project.display(), version);

    config
        .lookup(&version)
        .map(Path::to_path_buf)
        .ok_or(SelectorError::VersionNotFound { version })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> Configuration {
        let mut versions = BTreeMap::new();
        versions.insert("2021.1.0f1".to_string(), PathBuf::from("/path/to/App"));
        Configuration {
            program_dir: PathBuf::from("/path"),
            dir_pattern: "^Unity(.+)$".to_string(),
            versions,
        }
    }

    fn project(version_line: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let settings = temp_dir.path().join("ProjectSettings");
        fs::create_dir_all(&settings).unwrap();
        fs::write(settings.join("ProjectVersion.txt"), version_line).unwrap();
        temp_dir
    }

    #[test]
    fn test_resolve_hit() {
        let project = project("m_EditorVersion: 2021.1.0f1\n");
        assert_eq!(
            resolve(&config(), project.path()).unwrap(),
            PathBuf::from("/path/to/App")
        );
    }

    #[test]
    fn test_resolve_miss() {
        let project = project("m_EditorVersion: 9.9.9\n");
        match resolve(&config(), project.path()) {
            Err(SelectorError::VersionNotFound { version }) => assert_eq!(version, "9.9.9"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_propagates_extraction_errors() {
        let project = TempDir::new().unwrap();
        assert!(matches!(
            resolve(&config(), project.path()),
            Err(SelectorError::ProjectVersionMissing(_))
        ));
    }
}
