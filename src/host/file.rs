//! Settings snapshot loaded from a `key=value` file.

use super::{HostError, SettingsSource};
use crate::settings::Setting;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// An ordered settings snapshot parsed from a simple `key=value` file.
///
/// Blank lines and `#` comments are skipped; file order is preserved,
/// duplicate keys included. The file is read once at construction.
pub struct FileSource {
    settings: Vec<Setting>,
}

impl FileSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let content = fs::read_to_string(path)?;
        Ok(Self {
            settings: parse_settings(&content)?,
        })
    }
}

pub(crate) fn parse_settings(content: &str) -> Result<Vec<Setting>, HostError> {
    let mut settings = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            return Err(HostError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(HostError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            });
        }

        settings.push(Setting::new(name, value.trim()));
    }
    Ok(settings)
}

#[async_trait]
impl SettingsSource for FileSource {
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
