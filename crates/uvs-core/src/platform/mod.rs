//! Platform abstraction layer for cross-platform compatibility.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here (and in the
//! Windows-only recent-projects reader) rather than scattered through the
//! engine.
//!
//! - `paths` - Platform-specific directories, default install root and the
//!   editor executable name

pub mod paths;

pub use paths::{config_file_path, default_program_dir, editor_executable_name, separator_count};

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform() {
        let platform = current_platform();
        assert!(["linux", "windows", "macos", "unknown"].contains(&platform));
    }
}
