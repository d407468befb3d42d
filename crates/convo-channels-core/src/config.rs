use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALERTS_CHANNEL_ID, ALERTS_CHANNEL_NAME, DEFAULT_RETENTION_DAYS, INCOMING_MESSAGES_CHANNEL_ID,
    INCOMING_MESSAGES_CHANNEL_NAME,
};
use crate::error::ConfigError;
use crate::retention::RetentionPolicy;

/// Identity of one of the process-wide channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct GlobalChannelSpec {
    pub id: String,
    pub name: String,
}

impl GlobalChannelSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Engine configuration, loadable from a JSON file. Missing fields fall back
/// to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelConfig {
    pub incoming_messages: GlobalChannelSpec,
    pub alerts: GlobalChannelSpec,
    /// Negative disables purging, 0 deletes immediately.
    pub retention_days: i32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            incoming_messages: GlobalChannelSpec::new(
                INCOMING_MESSAGES_CHANNEL_ID,
                INCOMING_MESSAGES_CHANNEL_NAME,
            ),
            alerts: GlobalChannelSpec::new(ALERTS_CHANNEL_ID, ALERTS_CHANNEL_NAME),
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl ChannelConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn retention(&self) -> RetentionPolicy {
        RetentionPolicy::from_days(self.retention_days)
    }
}
