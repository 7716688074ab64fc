//! Persisted version registry.
//!
//! The registry maps editor version strings to executable paths, together
//! with the scan parameters that produced the mapping. It is only ever
//! replaced wholesale by a rebuild; there are no incremental updates.
//!
//! # Location
//!
//! The document lives in the per-user config directory:
//! - **Linux**: `~/.config/hasht/unity-version-selector/config.toml`
//! - **Windows**: `%APPDATA%\hasht\unity-version-selector\config.toml`
//! - **macOS**: `~/Library/Application Support/hasht/unity-version-selector/config.toml`

pub mod configuration;
pub mod store;
pub mod version_registry;

pub use configuration::Configuration;
pub use store::ConfigStore;
pub use version_registry::{load, load_or_rebuild, rebuild, RegistryOrigin};
