use serde::{Deserialize, Serialize};

/// Flat, pre-channel notification preferences for a conversation.
///
/// Supplied by the caller from whatever legacy store exists; never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct LegacySettings {
    pub notifications_enabled: bool,
    /// Ringtone URI string, `None` when the user never picked one.
    pub ringtone: Option<String>,
    pub vibration_enabled: bool,
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            ringtone: None,
            vibration_enabled: false,
        }
    }
}
