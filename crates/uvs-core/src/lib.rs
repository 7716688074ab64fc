//! uvs-core - headless engine for picking the right Unity editor for a project.
//!
//! The engine discovers installed editor versions under an installation root,
//! keeps the version → executable mapping in a persisted registry, reads the
//! version a project requires from its `ProjectSettings/ProjectVersion.txt`,
//! and resolves one against the other. Everything is synchronous and returns
//! typed errors; nothing here exits the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use uvs_core::{registry, resolver, CancellationToken, ConfigStore, ScanSettings};
//!
//! fn main() -> uvs_core::Result<()> {
//!     let store = ConfigStore::open_default()?;
//!     let token = CancellationToken::new();
//!     let (config, _origin) =
//!         registry::load_or_rebuild(&store, false, &ScanSettings::default(), &token)?;
//!
//!     for (version, exe) in config.listing() {
//!         println!("{} : {}", version, exe.display());
//!     }
//!
//!     let exe = resolver::resolve(&config, Path::new("/work/game"))?;
//!     uvs_core::launch_editor(&exe, Path::new("/work/game"))?;
//!     Ok(())
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod discovery;
pub mod error;
pub mod platform;
pub mod process;
pub mod project;
pub mod recent;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use cancel::{CancellationToken, CancelledError};
pub use discovery::{DepthLimit, DepthMode, ScanSettings};
pub use error::{Result, SelectorError};
pub use process::{launch_editor, EditorLaunch};
pub use project::read_editor_version;
pub use recent::RecentProjectSource;
pub use registry::{ConfigStore, Configuration, RegistryOrigin};
pub use resolver::resolve;
