//! Application-wide constants
//!
//! Channel identities and retention defaults shared by the engine,
//! the FFI layer and the CLI.

/// Id of the global "incoming messages" channel. Every conversation channel
/// is linked under it and inherits its importance and vibration defaults.
pub const INCOMING_MESSAGES_CHANNEL_ID: &str = "Conversations";
pub const INCOMING_MESSAGES_CHANNEL_NAME: &str = "Incoming messages";

/// Id of the global "alerts" channel (independent of conversations).
pub const ALERTS_CHANNEL_ID: &str = "Alerts";
pub const ALERTS_CHANNEL_NAME: &str = "Alerts";

/// Sound used when a conversation has no usable legacy ringtone.
pub const DEFAULT_NOTIFICATION_SOUND_URI: &str = "content://settings/system/notification_sound";

// Retention defaults
/// Days a soft-deleted conversation is kept before it is purged.
pub const DEFAULT_RETENTION_DAYS: i32 = 14;
/// Upper bound accepted for the retention setting.
pub const MAX_RETENTION_DAYS: i32 = 999;

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
