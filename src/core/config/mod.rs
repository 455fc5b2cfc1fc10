//! Queue configuration, loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

const DEFAULT_NAME: &str = "uniqueue";

/// Construction-time settings shared by both queue forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    /// Label attached to every log event the queue emits
    pub name: String,
    /// Pre-sizes the node slab and the membership index. Not a bound.
    pub capacity_hint: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            capacity_hint: 0,
        }
    }
}

impl QueueConfig {
    /// Default config with the given queue name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set how many values to pre-size for
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Parse and validate a config from a JSON document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file, see [`QueueConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Reject a blank queue name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("name must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = QueueConfig::from_json("{}").unwrap();
        assert_eq!(config, QueueConfig::default());
        assert_eq!(config.name, "uniqueue");
        assert_eq!(config.capacity_hint, 0);
    }

    #[test]
    fn parses_all_fields() {
        let config =
            QueueConfig::from_json(r#"{"name": "crawler", "capacity_hint": 512}"#).unwrap();
        assert_eq!(config, QueueConfig::new("crawler").with_capacity_hint(512));
    }

    #[test]
    fn rejects_blank_name() {
        let err = QueueConfig::from_json(r#"{"name": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = QueueConfig::from_json(r#"{"max_len": 10}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = QueueConfig::from_json("{name:").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse queue config"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = QueueConfig::from_path("/nonexistent/uniqueue.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
