//! Host environment integration: where raw settings come from.
//!
//! The plugin never parses configuration formats itself; it asks a
//! [`SettingsSource`] for an ordered snapshot of names and reads one raw
//! string value per name. Fallible work (reading a file) happens when a
//! source is constructed, so snapshot reads cannot fail.

mod env;
mod file;

pub use env::EnvSource;
pub use file::FileSource;

use crate::settings::Setting;
use async_trait::async_trait;
use thiserror::Error;

/// Resource name used in announcements and to scope settings.
pub const RESOURCE_NAME: &str = "rallyd";

/// Environment variable prefix recognized by [`EnvSource`].
pub const ENV_PREFIX: &str = "RALLY_";

/// Error building a settings snapshot.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read settings file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("malformed setting on line {line}: {text}")]
    MalformedLine { line: usize, text: String },
}

/// A host-provided source of raw string settings.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Ordered names of the settings currently configured.
    async fn setting_names(&self) -> Vec<String>;

    /// Raw value for one setting name, if present.
    async fn setting_value(&self, name: &str) -> Option<String>;
}

#[async_trait]
impl<T: SettingsSource + ?Sized> SettingsSource for Box<T> {
    async fn setting_names(&self) -> Vec<String> {
        (**self).setting_names().await
    }

    async fn setting_value(&self, name: &str) -> Option<String> {
        (**self).setting_value(name).await
    }
}

/// Fixed in-memory settings, for tests and embedding hosts.
///
/// Names are reported in insertion order, duplicates included; a lookup
/// returns the first matching value, mirroring how a real host exposes a
/// misconfigured resource.
#[derive(Debug, Default)]
pub struct StaticSource {
    settings: Vec<Setting>,
}

impl StaticSource {
    pub fn new(settings: Vec<Setting>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SettingsSource for StaticSource {
    async fn setting_names(&self) -> Vec<String> {
        self.settings.iter().map(|s| s.name.clone()).collect()
    }

    async fn setting_value(&self, name: &str) -> Option<String> {
        self.settings
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.clone())
    }
}
