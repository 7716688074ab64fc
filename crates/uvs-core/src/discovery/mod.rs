//! Editor installation discovery.
//!
//! - `tree_search` - Depth-limited search for the editor executable
//! - `scanner` - Maps version-named directories to their executables

pub mod scanner;
pub mod tree_search;

pub use scanner::{compile_pattern, scan, version_from_dir_name, ScanSettings};
pub use tree_search::{find, DepthLimit, DepthMode};
