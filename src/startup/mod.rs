//! One-shot delayed startup: wait, announce, load configuration, apply
//! derived settings, announce completion.

mod error;

pub use error::StartupError;

use std::fmt;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock, RwLockReadGuard};
use tokio::time;
use tracing::{debug, info, trace, warn};

use crate::host::{RESOURCE_NAME, SettingsSource};
use crate::logging::{self, LogHandle};
use crate::settings::{ConfigTable, LoadReport, Setting};

/// Setting name recognized as the runtime log threshold override.
const LOG_LEVEL_SETTING: &str = "LogLevel";

/// Host settings stores may still be populating when the start signal
/// fires; loading waits this long before taking the first snapshot.
pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_secs(3);

/// Startup sequence phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Waiting,
    Loading,
    Ready,
}

impl fmt::Display for SequencerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequencerState::Idle => "idle",
            SequencerState::Waiting => "waiting",
            SequencerState::Loading => "loading",
            SequencerState::Ready => "ready",
        };
        write!(f, "{}", name)
    }
}

/// Startup tuning options.
pub struct StartupOptions {
    /// Delay between the start signal and the first settings snapshot.
    pub delay: Duration,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_STARTUP_DELAY,
        }
    }
}

/// Orchestrates the one-shot startup sequence and owns the config table.
///
/// All configuration reads go through [`Sequencer::config`]; the table
/// is never ambient global state.
pub struct Sequencer<S> {
    source: S,
    log: LogHandle,
    delay: Duration,
    state: Mutex<SequencerState>,
    table: RwLock<ConfigTable>,
}

impl<S: SettingsSource> Sequencer<S> {
    pub fn new(source: S, log: LogHandle, options: StartupOptions) -> Self {
        Self {
            source,
            log,
            delay: options.delay,
            state: Mutex::new(SequencerState::Idle),
            table: RwLock::new(ConfigTable::new()),
        }
    }

    /// Runs the startup sequence: wait, announce, load, announce.
    ///
    /// One-shot; a second call fails with [`StartupError::AlreadyStarted`].
    /// The delay is the only suspension point and cannot be cancelled
    /// once entered.
    pub async fn run(&self) -> Result<(), StartupError> {
        {
            let mut state = self.state.lock().await;
            if *state != SequencerState::Idle {
                return Err(StartupError::AlreadyStarted(*state));
            }
            *state = SequencerState::Waiting;
        }

        time::sleep(self.delay).await;

        {
            let mut state = self.state.lock().await;
            *state = SequencerState::Loading;
        }

        logging::print_banner();
        info!("{RESOURCE_NAME} is starting!");

        info!("Loading configuration...");
        let report = self.load_table().await;

        trace!("Debugging information");
        let table_json = self.table.read().await.to_json();
        trace!(loaded = report.loaded, table = %table_json, "Configuration table contents");

        {
            let mut state = self.state.lock().await;
            *state = SequencerState::Ready;
        }

        info!("{RESOURCE_NAME} has finished start-up!");
        Ok(())
    }

    /// Re-runs the loading step only. Requires a completed startup; the
    /// delay and the banner are not repeated.
    pub async fn reload(&self) -> Result<LoadReport, StartupError> {
        {
            let mut state = self.state.lock().await;
            if *state != SequencerState::Ready {
                return Err(StartupError::NotReady(*state));
            }
            *state = SequencerState::Loading;
        }

        let report = self.load_table().await;

        let mut state = self.state.lock().await;
        *state = SequencerState::Ready;
        Ok(report)
    }

    pub async fn state(&self) -> SequencerState {
        *self.state.lock().await
    }

    /// Read access to the configuration table.
    pub async fn config(&self) -> RwLockReadGuard<'_, ConfigTable> {
        self.table.read().await
    }

    /// Snapshots the host settings, rebuilds the table, and applies
    /// derived settings such as the log threshold.
    async fn load_table(&self) -> LoadReport {
        let names = self.source.setting_names().await;
        trace!(count = names.len(), "Detected settings, iterating now...");

        let mut batch = Vec::with_capacity(names.len());
        for name in names {
            // Names and values come from the same snapshot; a missing
            // value means the host dropped the setting mid-read, skip it.
            if let Some(value) = self.source.setting_value(&name).await {
                batch.push(Setting::new(name, value));
            }
        }

        let report = self.table.write().await.load(batch);

        if report.has_duplicates() {
            warn!(
                count = report.duplicates.len(),
                names = %report.duplicates.join(", "),
                "Settings failed to load from configuration, duplicate setting keys could cause errors!"
            );
        }

        self.apply_log_level().await;
        report
    }

    /// Applies the configured log threshold, if one is recognized.
    async fn apply_log_level(&self) {
        let table = self.table.read().await;
        let Some(value) = table.get(LOG_LEVEL_SETTING) else {
            return;
        };

        match logging::parse_level(value) {
            Some(level) => {
                self.log.set_level(level);
                debug!(level = %level, "Log threshold set from configuration");
            }
            None => {
                warn!(value = %value, "Unrecognized LogLevel setting, keeping default threshold");
            }
        }
    }
}
