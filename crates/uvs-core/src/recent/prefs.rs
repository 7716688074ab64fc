//! Reader for the editor's XML preference file (Linux).

use crate::config::EditorPrefsConfig;
use crate::error::{Result, SelectorError};
use crate::recent::{decode_project_path, RecentProjectSource};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// `<pref>` element holding a recent project; group 1 is the name, group 2
/// the base64 value.
static RECENT_PROJECT_PREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"<pref\s+name="({}[^"]*)"\s+type="string">([^<]*)</pref>"#,
        regex::escape(EditorPrefsConfig::RECENT_PROJECT_PREFIX)
    ))
    .unwrap()
});

/// Recent projects stored in a `unity_prefs` XML file.
///
/// Entries look like
/// `<pref name="RecentlyUsedProjectPaths-0" type="string">L3dvcmsvZ2FtZQ==</pref>`.
#[derive(Debug, Clone)]
pub struct PrefsFileSource {
    path: PathBuf,
}

impl PrefsFileSource {
    /// The editor's prefs file in the per-user data directory
    /// (`~/.local/share/unity3d/prefs`).
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| SelectorError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(Self::at(data_dir.join("unity3d").join("prefs")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Extract recent project paths from prefs file contents, in document order.
pub fn parse_prefs(contents: &str) -> Vec<PathBuf> {
    let mut projects = Vec::new();
    for caps in RECENT_PROJECT_PREF.captures_iter(contents) {
        let name = &caps[1];
        let encoded = caps[2].trim();
        match STANDARD.decode(encoded) {
            Ok(raw) => projects.push(decode_project_path(&raw)),
            Err(e) => warn!("Ignoring undecodable pref {}: {}", name, e),
        }
    }

    projects
}

impl RecentProjectSource for PrefsFileSource {
    fn recent_projects(&self) -> Result<Vec<PathBuf>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| SelectorError::RecentProjects {
            message: format!("{}: {}", self.path.display(), e),
        })?;

        let projects = parse_prefs(&contents);
        debug!(
            "Read {} recent project(s) from {}",
            projects.len(),
            self.path.display()
        );
        Ok(projects)
    }
}
