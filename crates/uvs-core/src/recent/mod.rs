//! Recently opened projects, as recorded by the editor itself.
//!
//! The editor keeps its recent-project list in a platform-specific preference
//! store:
//! - **Windows**: values under `HKCU\Software\Unity Technologies\Unity Editor 5.x`
//! - **Linux**: `~/.local/share/unity3d/prefs`, an XML file of base64 strings
//!
//! Other platforms have no reader and report `UnsupportedPlatform`.

pub mod prefs;
#[cfg(windows)]
pub mod windows;

use crate::error::{Result, SelectorError};
use crate::platform;
use std::path::PathBuf;

pub use prefs::PrefsFileSource;
#[cfg(windows)]
pub use windows::RegistrySource;

/// Anything that can list the editor's recent projects.
pub trait RecentProjectSource {
    /// Recent project paths, in the order the store lists them.
    fn recent_projects(&self) -> Result<Vec<PathBuf>>;
}

/// Turn a raw stored value into a path, dropping the trailing NUL bytes the
/// editor writes after each string.
pub fn decode_project_path(raw: &[u8]) -> PathBuf {
    let end = raw
        .iter()
        .rposition(|b| *b != 0)
        .map(|i| i + 1)
        .unwrap_or(0);
    PathBuf::from(String::from_utf8_lossy(&raw[..end]).into_owned())
}

/// Source used when the platform has no known preference store.
#[derive(Debug, Default)]
pub struct UnsupportedSource;

impl RecentProjectSource for UnsupportedSource {
    fn recent_projects(&self) -> Result<Vec<PathBuf>> {
        Err(SelectorError::UnsupportedPlatform {
            feature: format!("Reading recent projects on {}", platform::current_platform()),
        })
    }
}

/// The preference store reader for the current platform.
pub fn default_source() -> Result<Box<dyn RecentProjectSource>> {
    #[cfg(windows)]
    {
        Ok(Box::new(RegistrySource::default()))
    }
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(PrefsFileSource::open_default()?))
    }
    #[cfg(not(any(windows, target_os = "linux")))]
    {
        Ok(Box::new(UnsupportedSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_trailing_nul() {
        assert_eq!(
            decode_project_path(b"C:/Work/Game\0"),
            PathBuf::from("C:/Work/Game")
        );
        assert_eq!(decode_project_path(b"/work/game"), PathBuf::from("/work/game"));
        assert_eq!(decode_project_path(b"\0\0"), PathBuf::new());
    }

    #[test]
    fn test_unsupported_source() {
        assert!(matches!(
            UnsupportedSource.recent_projects(),
            Err(SelectorError::UnsupportedPlatform { .. })
        ));
    }
}
