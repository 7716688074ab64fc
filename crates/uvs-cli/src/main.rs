//! unity-version-selector - open a Unity project with the editor it needs.
//!
//! This binary is the only place errors turn into process exit codes. The
//! engine in `uvs-core` returns typed errors; `main` prints them to stderr
//! and exits non-zero.

mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use uvs_core::config::DiscoveryConfig;
use uvs_core::{recent, registry, resolver};
use uvs_core::{CancellationToken, ConfigStore, DepthLimit, RegistryOrigin, ScanSettings};

#[derive(Parser, Debug)]
#[command(name = "unity-version-selector")]
#[command(about = "Open a Unity project with the editor version it was saved with")]
struct Args {
    /// Project directory (chosen from recent projects when omitted)
    project: Option<PathBuf>,

    /// Rescan installed editor versions instead of using the saved registry
    #[arg(long)]
    reload: bool,

    /// Show the known editor versions and exit
    #[arg(long)]
    list: bool,

    /// Registry file (defaults to the per-user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to scan for editor versions when rebuilding
    #[arg(long, value_name = "DIR")]
    program_dir: Option<PathBuf>,

    /// Directory name pattern; capture group 1 is the version
    #[arg(long, value_name = "REGEX")]
    dir_pattern: Option<String>,

    /// Measure the search depth from each version directory
    #[arg(long)]
    relative_depth: bool,

    /// Give up discovery after this many seconds (0 = never)
    #[arg(long, value_name = "SECS", default_value_t = DiscoveryConfig::SCAN_TIMEOUT.as_secs())]
    scan_timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn scan_settings(&self) -> ScanSettings {
        let mut settings = ScanSettings::default();
        if let Some(dir) = &self.program_dir {
            settings = settings.with_program_dir(dir);
        }
        if let Some(pattern) = &self.dir_pattern {
            settings = settings.with_dir_pattern(pattern.clone());
        }
        if self.relative_depth {
            settings = settings.with_depth(DepthLimit::relative(DiscoveryConfig::DEPTH_CUTOFF));
        }
        settings
    }

    fn cancellation_token(&self) -> CancellationToken {
        match self.scan_timeout {
            0 => CancellationToken::new(),
            secs => CancellationToken::with_timeout(Duration::from_secs(secs)),
        }
    }

    fn config_store(&self) -> Result<ConfigStore> {
        match &self.config {
            Some(path) => Ok(ConfigStore::at(path)),
            None => ConfigStore::open_default().context("Failed to locate the registry file"),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the --list output.
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let store = args.config_store()?;
    let settings = args.scan_settings();
    let token = args.cancellation_token();

    let (config, origin) = registry::load_or_rebuild(&store, args.reload, &settings, &token)
        .context("Failed to prepare the editor registry")?;
    match origin {
        RegistryOrigin::Loaded => debug!("Using registry {}", store.path().display()),
        RegistryOrigin::Rebuilt => info!("Registry rebuilt at {}", store.path().display()),
    }

    if args.list {
        for line in listing_lines(&config) {
            println!("{}", line);
        }
        return Ok(());
    }

    let project = match args.project {
        Some(project) => project,
        None => {
            let source = recent::default_source()?;
            prompt::ask_project(source.as_ref())?
        }
    };

    let exe = resolver::resolve(&config, &project)
        .with_context(|| format!("Cannot open {}", project.display()))?;
    uvs_core::launch_editor(&exe, &project)?;
    Ok(())
}

/// One `"<version> : <path>"` line per registered editor, in listing order.
fn listing_lines(config: &uvs_core::Configuration) -> Vec<String> {
    config
        .listing()
        .into_iter()
        .map(|(version, exe)| format!("{} : {}", version, exe.display()))
        .collect()
}
