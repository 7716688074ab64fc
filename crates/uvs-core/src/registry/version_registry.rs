//! Registry lifecycle: load from storage or rebuild from a scan.

use crate::cancel::CancellationToken;
use crate::discovery::{self, ScanSettings};
use crate::error::Result;
use crate::registry::{ConfigStore, Configuration};
use tracing::{debug, info};

/// How the registry reached its ready state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOrigin {
    /// Read unchanged from storage.
    Loaded,
    /// Rebuilt from a fresh scan and persisted.
    Rebuilt,
}

/// Load the persisted registry.
///
/// Fails if nothing is stored or the document is malformed; the caller is
/// expected to [`rebuild`] in that case.
pub fn load(store: &ConfigStore) -> Result<Configuration> {
    let config = store.read()?;
    debug!(
        "Loaded {} version(s) from {}",
        config.versions.len(),
        store.path().display()
    );
    Ok(config)
}

/// Scan for installed editors, persist the result and return it.
///
/// This is the only operation that writes the registry.
pub fn rebuild(
    store: &ConfigStore,
    settings: &ScanSettings,
    token: &CancellationToken,
) -> Result<Configuration> {
    info!(
        "Scanning {} for editor versions",
        settings.program_dir.display()
    );

    let versions = discovery::scan(settings, token)?;
    let config = Configuration {
        program_dir: settings.program_dir.clone(),
        dir_pattern: settings.dir_pattern.clone(),
        versions,
    };

    store.write(&config)?;
    info!(
        "Saved {} version(s) to {}",
        config.versions.len(),
        store.path().display()
    );
    Ok(config)
}

/// Startup transition: load the stored registry, or rebuild it when asked to
/// or when nothing usable is stored.
pub fn load_or_rebuild(
    store: &ConfigStore,
    force_rebuild: bool,
    settings: &ScanSettings,
    token: &CancellationToken,
) -> Result<(Configuration, RegistryOrigin)> {
    if !force_rebuild {
        match load(store) {
            Ok(config) => return Ok((config, RegistryOrigin::Loaded)),
            Err(e) if e.is_recoverable_by_rebuild() => {
                info!("Rebuilding registry: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    let config = rebuild(store, settings, token)?;
    Ok((config, RegistryOrigin::Rebuilt))
}
