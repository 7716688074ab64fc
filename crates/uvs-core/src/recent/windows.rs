//! Reader for the editor's registry-backed preferences (Windows).
//!
//! This module owns an OS boundary and opts down from the workspace-wide
//! `unsafe_code = "deny"`. Every unsafe block carries a `SAFETY:` note.
#![allow(unsafe_code)]

use crate::config::EditorPrefsConfig;
use crate::error::{Result, SelectorError};
use crate::recent::{decode_project_path, RecentProjectSource};
use std::path::PathBuf;
use tracing::debug;
use windows_sys::Win32::Foundation::{ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
use windows_sys::Win32::System::Registry::{
    RegCloseKey, RegEnumValueW, RegOpenKeyExW, HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE,
};

/// Longest value name the registry allows, plus the terminator.
const MAX_VALUE_NAME_LEN: usize = 16_384;

/// Recent projects stored as binary values under an `HKCU` key.
#[derive(Debug, Clone)]
pub struct RegistrySource {
    subkey: String,
}

impl Default for RegistrySource {
    fn default() -> Self {
        Self {
            subkey: EditorPrefsConfig::WINDOWS_REGISTRY_KEY.to_string(),
        }
    }
}

/// Closes an open registry key on drop.
struct OpenKey(HKEY);

impl Drop for OpenKey {
    fn drop(&mut self) {
        // SAFETY: the handle came from a successful RegOpenKeyExW and is
        // closed exactly once, here.
        unsafe {
            RegCloseKey(self.0);
        }
    }
}

fn registry_error(what: &str, code: u32) -> SelectorError {
    SelectorError::RecentProjects {
        message: format!(
            "{}: {}",
            what,
            std::io::Error::from_raw_os_error(code as i32)
        ),
    }
}

impl RegistrySource {
    fn open(&self) -> Result<OpenKey> {
        let wide: Vec<u16> = self.subkey.encode_utf16().chain(Some(0)).collect();
        let mut hkey: HKEY = std::ptr::null_mut();

        // SAFETY: `wide` is NUL-terminated and outlives the call; `hkey` is a
        // valid out-pointer.
        let status =
            unsafe { RegOpenKeyExW(HKEY_CURRENT_USER, wide.as_ptr(), 0, KEY_QUERY_VALUE, &mut hkey) };
        if status != ERROR_SUCCESS {
            return Err(registry_error(&format!("open HKCU\\{}", self.subkey), status));
        }
        Ok(OpenKey(hkey))
    }
}

impl RecentProjectSource for RegistrySource {
    fn recent_projects(&self) -> Result<Vec<PathBuf>> {
        let key = self.open()?;
        let mut name = vec![0u16; MAX_VALUE_NAME_LEN];
        let mut data = vec![0u8; 4096];
        let mut projects = Vec::new();
        let mut index = 0u32;

        loop {
            let mut name_len = name.len() as u32;
            let mut data_len = data.len() as u32;
            let mut value_type = 0u32;

            // SAFETY: the buffers and their length out-params describe live
            // allocations of the stated sizes.
            let status = unsafe {
                RegEnumValueW(
                    key.0,
                    index,
                    name.as_mut_ptr(),
                    &mut name_len,
                    std::ptr::null(),
                    &mut value_type,
                    data.as_mut_ptr(),
                    &mut data_len,
                )
            };

            match status {
                ERROR_SUCCESS => {
                    let value_name = String::from_utf16_lossy(&name[..name_len as usize]);
                    if value_name.starts_with(EditorPrefsConfig::RECENT_PROJECT_PREFIX) {
                        projects.push(decode_project_path(&data[..data_len as usize]));
                    }
                    index += 1;
                }
                ERROR_MORE_DATA => {
                    // Retry the same index with a buffer of the reported size.
                    data.resize(data_len as usize, 0);
                }
                ERROR_NO_MORE_ITEMS => break,
                other => return Err(registry_error("enumerate values", other)),
            }
        }

        debug!("Read {} recent project(s) from the registry", projects.len());
        Ok(projects)
    }
}
