//! Process entry point: wires the host settings source, the log sink,
//! and the deferred startup sequence.

mod host;
mod logging;
mod settings;
mod startup;

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use host::{ENV_PREFIX, EnvSource, FileSource, SettingsSource};
use startup::{Sequencer, StartupOptions};

/// Returns the path from a `--settings=<path>` argument, if given.
fn parse_settings_path() -> Option<String> {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--settings=") {
            return Some(path.to_string());
        }
    }
    None
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize tracing early; the sequencer retargets the threshold
    // once the LogLevel setting is loaded.
    let log = logging::init("info");

    let source: Box<dyn SettingsSource> = match parse_settings_path() {
        Some(path) => match FileSource::load(&path) {
            Ok(source) => Box::new(source),
            Err(e) => {
                eprintln!("Failed to read settings from {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(EnvSource::new(ENV_PREFIX)),
    };

    let sequencer = Arc::new(Sequencer::new(source, log, StartupOptions::default()));

    // Startup is deferred; the host keeps running while it waits.
    let startup = Arc::clone(&sequencer);
    tokio::spawn(async move {
        if let Err(e) = startup.run().await {
            error!(error = %e, "Startup failed");
        }
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return ExitCode::FAILURE;
    }

    info!("Shutting down");
    ExitCode::SUCCESS
}
