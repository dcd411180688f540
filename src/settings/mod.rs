//! Typed configuration table built from host-supplied string settings.
//!
//! Every setting arrives as a raw string; the table runs each value
//! through type inference and stores the typed result under its name.

mod value;

pub use value::TypedValue;

use std::collections::HashMap;
use tracing::{debug, trace};

/// A raw name/value pair supplied by the host environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub name: String,
    pub value: String,
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Outcome of a single table load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of settings inserted.
    pub loaded: usize,
    /// Names rejected because an earlier setting in the batch already
    /// claimed them, in rejection order.
    pub duplicates: Vec<String>,
}

impl LoadReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Process-wide mapping from setting name to typed value.
///
/// Rebuilt wholesale on every load: the first occurrence of a name wins
/// within a batch and later occurrences are rejected, never merged.
#[derive(Debug, Default)]
pub struct ConfigTable {
    entries: HashMap<String, TypedValue>,
}

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the table and rebuilds it from the given batch, in batch
    /// order.
    ///
    /// Duplicate names (case-sensitive exact match) are collected into
    /// the report and skipped. Nothing about a load is fatal.
    pub fn load(&mut self, settings: impl IntoIterator<Item = Setting>) -> LoadReport {
        self.entries.clear();

        let mut report = LoadReport::default();
        for setting in settings {
            if self.entries.contains_key(&setting.name) {
                report.duplicates.push(setting.name);
                continue;
            }
            let value = TypedValue::infer(&setting.value);
            trace!(
                name = %setting.name,
                raw = %setting.value,
                kind = value.type_name(),
                "Added setting to config table"
            );
            self.entries.insert(setting.name, value);
            report.loaded += 1;
        }

        debug!(loaded = report.loaded, "Loaded settings from configuration");
        report
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.entries.get(name)
    }

    /// The value under `name`, if present and inferred as an integer.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_integer()
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_boolean()
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    pub fn timestamp(&self, name: &str) -> Option<chrono::NaiveDateTime> {
        self.get(name)?.as_timestamp()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_text()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostic snapshot of the table, for trace output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.entries).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
