//! Integration tests for the discovery → registry → resolution pipeline.
//!
//! Each test builds a throwaway installation tree and project under a temp
//! directory and drives the public API the same way the CLI does.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uvs_core::platform::separator_count;
use uvs_core::registry::{self, RegistryOrigin};
use uvs_core::{
    resolve, CancellationToken, ConfigStore, DepthLimit, ScanSettings, SelectorError,
};

const EXE: &str = "Unity";

struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("programs")).unwrap();
        Self { temp_dir }
    }

    fn programs(&self) -> PathBuf {
        self.temp_dir.path().join("programs")
    }

    fn store(&self) -> ConfigStore {
        ConfigStore::at(self.temp_dir.path().join("config").join("config.toml"))
    }

    /// Install an editor at `<programs>/<dir_name>/<rel...>/Unity`.
    fn install(&self, dir_name: &str, rel: &[&str]) -> PathBuf {
        let mut dir = self.programs().join(dir_name);
        for part in rel {
            dir = dir.join(part);
        }
        fs::create_dir_all(&dir).unwrap();
        let exe = dir.join(EXE);
        fs::write(&exe, b"").unwrap();
        exe
    }

    fn project(&self, name: &str, version_file: &str) -> PathBuf {
        let project = self.temp_dir.path().join("projects").join(name);
        let settings = project.join("ProjectSettings");
        fs::create_dir_all(&settings).unwrap();
        fs::write(settings.join("ProjectVersion.txt"), version_file).unwrap();
        project
    }

    fn settings(&self) -> ScanSettings {
        ScanSettings::default()
            .with_program_dir(self.programs())
            .with_executable_name(EXE)
            .with_depth(DepthLimit::relative(6))
    }
}

#[test]
fn test_rebuild_then_resolve_project() {
    let env = TestEnv::new();
    let exe = env.install("Unity2021.1.0f1", &["Editor"]);
    env.install("Unity5.6.7f1", &["Editor"]);
    let project = env.project(
        "game",
        "m_EditorVersion: 2021.1.0f1\nm_EditorVersionWithRevision: 2021.1.0f1 (abc)\n",
    );

    let token = CancellationToken::new();
    let (config, origin) =
        registry::load_or_rebuild(&env.store(), false, &env.settings(), &token).unwrap();
    assert_eq!(origin, RegistryOrigin::Rebuilt);

    assert_eq!(resolve(&config, &project).unwrap(), exe);
}

#[test]
fn test_unknown_version_is_a_resolution_error() {
    let env = TestEnv::new();
    env.install("Unity2021.1.0f1", &["Editor"]);
    let project = env.project("old", "m_EditorVersion: 9.9.9\n");

    let config = registry::rebuild(&env.store(), &env.settings(), &CancellationToken::new())
        .unwrap();

    match resolve(&config, &project) {
        Err(SelectorError::VersionNotFound { version }) => assert_eq!(version, "9.9.9"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_project_without_version_field_fails() {
    let env = TestEnv::new();
    let project = env.project("broken", "m_SomethingElse: 1\n");
    let config = registry::rebuild(&env.store(), &env.settings(), &CancellationToken::new())
        .unwrap();

    assert!(matches!(
        resolve(&config, &project),
        Err(SelectorError::EditorVersionMissing(_))
    ));
}

#[test]
fn test_rebuild_round_trips_through_storage() {
    let env = TestEnv::new();
    env.install("Unity2019.4.1f1", &["Editor"]);
    env.install("Unity4.7.2", &["Editor"]);
    let store = env.store();

    let rebuilt = registry::rebuild(&store, &env.settings(), &CancellationToken::new()).unwrap();
    let loaded = registry::load(&store).unwrap();

    assert_eq!(loaded, rebuilt);
    assert_eq!(loaded.dir_pattern, "^Unity(.+)$");
    assert_eq!(loaded.program_dir, env.programs());
}

#[test]
fn test_listing_order_after_scan() {
    let env = TestEnv::new();
    for dir in ["Unity2021.1", "Unity5.6", "Unity2019.4", "Unity4.7"] {
        env.install(dir, &["Editor"]);
    }

    let config = registry::rebuild(&env.store(), &env.settings(), &CancellationToken::new())
        .unwrap();

    assert_eq!(
        config.ordered_version_keys(),
        vec!["4.7", "5.6", "2019.4", "2021.1"]
    );
}

#[test]
fn test_missing_executable_only_drops_that_version() {
    let env = TestEnv::new();
    fs::create_dir_all(env.programs().join("Unity2018.4.0f1").join("Editor")).unwrap();
    env.install("Unity2020.3.0f1", &["Editor"]);
    // Deeper than the relative bound of 6.
    env.install("Unity2017.1.0f1", &["a", "b", "c", "d", "e", "f"]);

    let config = registry::rebuild(&env.store(), &env.settings(), &CancellationToken::new())
        .unwrap();

    assert_eq!(config.ordered_version_keys(), vec!["2020.3.0f1"]);
}

#[test]
fn test_absolute_depth_cutoff_depends_on_root_depth() {
    let env = TestEnv::new();
    let exe = env.install("Unity2022.1.0f1", &["Editor", "Data"]);
    let exe_depth = separator_count(&exe);

    let store = env.store();
    let token = CancellationToken::new();

    let at_cutoff = env.settings().with_depth(DepthLimit::absolute(exe_depth));
    let config = registry::rebuild(&store, &at_cutoff, &token).unwrap();
    assert_eq!(config.lookup("2022.1.0f1"), Some(exe.as_path()));

    let below_cutoff = env.settings().with_depth(DepthLimit::absolute(exe_depth - 1));
    let config = registry::rebuild(&store, &below_cutoff, &token).unwrap();
    assert!(config.versions.is_empty());
}

#[test]
fn test_unlistable_root_aborts_rebuild() {
    let env = TestEnv::new();
    let settings = env
        .settings()
        .with_program_dir(env.temp_dir.path().join("does-not-exist"));

    let result = registry::load_or_rebuild(&env.store(), true, &settings, &CancellationToken::new());
    assert!(matches!(result, Err(SelectorError::Io { .. })));
}

#[test]
fn test_invalid_pattern_aborts_rebuild() {
    let env = TestEnv::new();
    let settings = env.settings().with_dir_pattern("^Unity.+$");

    let result = registry::rebuild(&env.store(), &settings, &CancellationToken::new());
    assert!(matches!(result, Err(SelectorError::InvalidPattern { .. })));
}

#[test]
fn test_expired_deadline_aborts_rebuild() {
    let env = TestEnv::new();
    env.install("Unity2021.1.0f1", &["Editor"]);

    let token = CancellationToken::with_timeout(std::time::Duration::ZERO);
    let result = registry::rebuild(&env.store(), &env.settings(), &token);

    assert!(matches!(result, Err(SelectorError::ScanTimedOut(_))));
    assert!(!env.store().path().exists());
}

#[test]
fn test_hand_edited_registry_is_used_as_is() {
    let env = TestEnv::new();
    let store = env.store();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        "ProgramDir = \"/nowhere\"\nDirPattern = \"^Unity(.+)$\"\n\n[Versions]\n\"2021.1.0f1\" = \"/path/to/App\"\n",
    )
    .unwrap();
    let project = env.project("game", "m_EditorVersion: 2021.1.0f1\n");

    let (config, origin) =
        registry::load_or_rebuild(&store, false, &env.settings(), &CancellationToken::new())
            .unwrap();

    assert_eq!(origin, RegistryOrigin::Loaded);
    assert_eq!(resolve(&config, &project).unwrap(), Path::new("/path/to/App"));
}
