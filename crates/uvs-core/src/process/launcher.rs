//! Starting an editor against a project.

use crate::config::ProjectConfig;
use crate::error::{Result, SelectorError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

// Platform-specific imports for process detachment
#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// An editor invocation: `<executable> -projectPath <project>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLaunch {
    /// Editor executable resolved from the registry.
    pub executable: PathBuf,
    /// Project directory handed to the editor.
    pub project: PathBuf,
}

impl EditorLaunch {
    pub fn new(executable: impl AsRef<Path>, project: impl AsRef<Path>) -> Self {
        Self {
            executable: executable.as_ref().to_path_buf(),
            project: project.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from(ProjectConfig::PROJECT_PATH_FLAG),
            self.project.clone().into_os_string(),
        ]
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(self.args());
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        // The editor outlives this process; keep it out of our process group
        // so a Ctrl-C in the terminal does not reach it.
        #[cfg(unix)]
        {
            cmd.process_group(0);
        }

        #[cfg(windows)]
        {
            use windows_sys::Win32::System::Threading::{
                CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS,
            };
            cmd.creation_flags(CREATE_NEW_PROCESS_GROUP | DETACHED_PROCESS);
        }

        cmd
    }

    /// Start the editor without waiting for it.
    ///
    /// Returns the child's PID once the process has been spawned.
    pub fn spawn(&self) -> Result<u32> {
        info!(
            "Launching {} -projectPath {}",
            self.executable.display(),
            self.project.display()
        );

        let child = self.command().spawn().map_err(|e| {
            debug!("Failed to spawn {}: {}", self.executable.display(), e);
            SelectorError::LaunchFailed {
                executable: self.executable.clone(),
                message: e.to_string(),
            }
        })?;

        let pid = child.id();
        info!("Launched editor with PID {}", pid);
        Ok(pid)
    }
}

/// Start `executable` against `project`. See [`EditorLaunch::spawn`].
pub fn launch_editor(executable: &Path, project: &Path) -> Result<u32> {
    EditorLaunch::new(executable, project).spawn()
}
