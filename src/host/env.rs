//! Settings sourced from prefixed process environment variables.

use super::SettingsSource;
use async_trait::async_trait;
use std::env;

/// Reads prefixed environment variables as settings.
///
/// `RALLY_MaxPlayers=32` becomes the setting `MaxPlayers`. The
/// environment has no enumeration order, so names are sorted to keep
/// snapshots deterministic.
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl SettingsSource for EnvSource {
    async fn setting_names(&self) -> Vec<String> {
        let mut names: Vec<String> = env::vars()
            .filter_map(|(key, _)| key.strip_prefix(&self.prefix).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    async fn setting_value(&self, name: &str) -> Option<String> {
        env::var(format!("{}{}", self.prefix, name)).ok()
    }
}
