//! roster - keep a locally saved list of random users
//!
//! # Examples
//!
//! ```bash
//! # Show the list (fetches 10 users on first run)
//! roster list
//!
//! # Replace it with a fresh page
//! roster refresh
//!
//! # Add one user at the top, then remove one by id
//! roster add
//! roster remove 8f1c0a4e-5b7d-4c39-9f0e-1d2c3b4a5e6f
//! ```

use roster_cli::{Cli, CliError, CliResult, StderrNotifier, execute, logger, render};
use roster_config::Config;
use roster_remote::{RandomUserClient, RemoteSource};
use roster_state::{BootOutcome, ControllerSettings, ListController};
use roster_store::{FileStore, LocalStore, MemoryStore};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| CliError::DirCreation {
            path: log_dir.to_path_buf(),
            source: e,
        })?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting roster v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let remote: Arc<dyn RemoteSource> =
        Arc::new(RandomUserClient::new(&config.remote.base_url));

    let store: Arc<dyn LocalStore> = if cli.ephemeral {
        info!("Ephemeral mode: list will not be saved");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(config.storage_path()?))
    };

    let controller = ListController::new(
        remote,
        store,
        Arc::new(StderrNotifier),
        ControllerSettings::from(&config),
    );

    if let BootOutcome::Unavailable { reason } = controller.boot().await? {
        warn!("Starting with an empty list: {reason}");
    }

    let result = execute(&controller, &cli.command).await;

    let items = controller.items();
    controller.shutdown().await;

    let output = if cli.wants_json() {
        render::render_json(&items, cli.pretty).map_err(|e| CliError::Output { source: e })?
    } else {
        render::render_text(&items)
    };
    print!("{output}");
    if cli.wants_json() {
        println!();
    }

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            // Already reported through the notifier
            info!("Command failed: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
