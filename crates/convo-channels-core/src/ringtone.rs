use crate::constants::DEFAULT_NOTIFICATION_SOUND_URI;

/// Turns a conversation's legacy ringtone preference into a sound URI.
///
/// Implementations never fail: unusable input resolves to a fallback URI.
pub trait RingtoneResolver: Send + Sync {
    fn resolve(&self, conversation_id: &str, legacy_ringtone: Option<&str>) -> String;
}

/// Uses the legacy ringtone as-is and falls back to the system notification
/// sound when none was stored.
#[derive(Debug, Clone)]
pub struct FallbackRingtoneResolver {
    default_uri: String,
}

impl FallbackRingtoneResolver {
    pub fn new(default_uri: impl Into<String>) -> Self {
        Self {
            default_uri: default_uri.into(),
        }
    }
}

impl Default for FallbackRingtoneResolver {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_SOUND_URI)
    }
}

impl RingtoneResolver for FallbackRingtoneResolver {
    fn resolve(&self, _conversation_id: &str, legacy_ringtone: Option<&str>) -> String {
        match legacy_ringtone.map(str::trim) {
            Some(uri) if !uri.is_empty() => uri.to_string(),
            _ => self.default_uri.clone(),
        }
    }
}
