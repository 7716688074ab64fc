//! Process launching for resolved editors.

pub mod launcher;

pub use launcher::{launch_editor, EditorLaunch};
